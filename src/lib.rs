//! Pixel-level image comparison for test suites.
//!
//! [`image_difference`] decodes two image files and returns the mean absolute
//! RGB channel difference, normalized to `[0, 1]`. The assertion helpers turn
//! that score into a pass or fail against a caller supplied tolerance.

pub mod assertion;
pub mod difference;
pub mod error;
pub mod path;
pub mod prelude;
pub mod raster;
pub mod resource;

pub use crate::assertion::{check_equals, check_not_equals, AssertionFailure};
pub use crate::difference::{image_difference, SMALL_VALUE};
pub use crate::error::{DiffError, ErrorKind};
