use crate::{
    error::{DiffError, Role},
    path,
    raster::{self, RasterImage},
};

use log::debug;
use serde::Serialize;
use std::path::Path;

/// Epsilon used when comparing difference scores for equality.
pub const SMALL_VALUE: f64 = 0.00000001;

/// Sums of absolute per-channel differences over every pixel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize)]
pub struct ChannelSums {
    pub red: u64,
    pub green: u64,
    pub blue: u64,
}

impl ChannelSums {
    pub fn total(&self) -> u64 {
        self.red + self.green + self.blue
    }

    fn accumulate(&mut self, expected: u32, actual: u32) {
        self.red += raster::red(expected).abs_diff(raster::red(actual)) as u64;
        self.green += raster::green(expected).abs_diff(raster::green(actual)) as u64;
        self.blue += raster::blue(expected).abs_diff(raster::blue(actual)) as u64;
    }
}

/// Outcome of comparing two equally sized images.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub expected: String,
    pub actual: String,
    pub width: usize,
    pub height: usize,
    pub pixel_count: usize,
    pub sums: ChannelSums,
    /// Mean normalized channel difference, in `[0, 1]`.
    pub difference: f64,
}

/// Compares two image files pixel by pixel and returns the difference in
/// `[0, 1]`, where 0 means identical RGB data and 1 means every channel of
/// every pixel is maximally different.
///
/// Fails if either path is empty, the files can't be read or decoded, or the
/// images don't share the same dimensions.
pub fn image_difference<P: AsRef<Path>, Q: AsRef<Path>>(
    expected: P,
    actual: Q,
) -> Result<f64, DiffError> {
    Ok(compare(expected, actual)?.difference)
}

/// Same as [`image_difference`] but returns the full comparison report.
pub fn compare<P: AsRef<Path>, Q: AsRef<Path>>(
    expected: P,
    actual: Q,
) -> Result<Comparison, DiffError> {
    let expected = expected.as_ref();
    let actual = actual.as_ref();

    // Both references must be present before either file is looked at
    check_present(expected, Role::Expected)?;
    check_present(actual, Role::Actual)?;
    check_readable(expected, Role::Expected)?;
    check_readable(actual, Role::Actual)?;

    let expected_image = load(expected, Role::Expected)?;
    let actual_image = load(actual, Role::Actual)?;

    compare_rasters(&expected_image, &actual_image)
}

/// Difference between two already decoded images.
pub fn raster_difference(expected: &RasterImage, actual: &RasterImage) -> Result<f64, DiffError> {
    Ok(compare_rasters(expected, actual)?.difference)
}

pub fn compare_rasters(
    expected: &RasterImage,
    actual: &RasterImage,
) -> Result<Comparison, DiffError> {
    if expected.width() != actual.width() || expected.height() != actual.height() {
        return Err(DiffError::DimensionMismatch {
            expected_width: expected.width(),
            expected_height: expected.height(),
            actual_width: actual.width(),
            actual_height: actual.height(),
            expected_file: expected.source().to_owned(),
            actual_file: actual.source().to_owned(),
        });
    }

    // Implied by the dimension check unless a raster was built inconsistently.
    if expected.pixel_count() != actual.pixel_count() {
        return Err(DiffError::PixelCountMismatch {
            expected_len: expected.pixel_count(),
            actual_len: actual.pixel_count(),
            expected_file: expected.source().to_owned(),
            actual_file: actual.source().to_owned(),
        });
    }

    if expected.is_empty() {
        return Err(DiffError::EmptyImage {
            role: Role::Expected,
            file: expected.source().to_owned(),
        });
    }

    let mut sums = ChannelSums::default();
    expected
        .pixels()
        .iter()
        .zip(actual.pixels())
        .for_each(|(e, a)| sums.accumulate(*e, *a));

    let pixel_count = expected.pixel_count();

    // 3 channels per pixel, each channel in [0, 255]
    let difference = sums.total() as f64 / 3.0 / pixel_count as f64 / 255.0;

    debug!(
        "Difference between {} and {}: {}",
        expected.source(),
        actual.source(),
        difference
    );

    Ok(Comparison {
        expected: expected.source().to_owned(),
        actual: actual.source().to_owned(),
        width: expected.width(),
        height: expected.height(),
        pixel_count,
        sums,
        difference,
    })
}

fn check_present(file_path: &Path, role: Role) -> Result<(), DiffError> {
    if path::is_empty(file_path) {
        Err(DiffError::InvalidInput(role))
    } else {
        Ok(())
    }
}

fn check_readable(file_path: &Path, role: Role) -> Result<(), DiffError> {
    if !path::file_readable(file_path) {
        return Err(DiffError::InvalidFile {
            role,
            file: file_path.display().to_string(),
        });
    }
    Ok(())
}

fn load(file_path: &Path, role: Role) -> Result<RasterImage, DiffError> {
    RasterImage::open(file_path).map_err(|cause| DiffError::NotAnImage {
        role,
        file: file_path.display().to_string(),
        cause,
    })
}
