use crate::{difference::image_difference, error::DiffError};

use log::warn;
use std::path::Path;
use thiserror::Error;

/// Raised by the image assertions. `Display` renders the four line report:
///
/// ```text
/// <message>
/// Expected  : <expected file>
/// Actual    : <actual file>
/// Difference: <NN.NN%> or N/A
/// ```
#[derive(Debug, Error)]
#[error(
    "{}\nExpected  : {}\nActual    : {}\nDifference: {}",
    .message.as_deref().unwrap_or(""),
    .expected,
    .actual,
    format_difference(.difference)
)]
pub struct AssertionFailure {
    message: Option<String>,
    expected: String,
    actual: String,
    difference: Option<f64>,
    #[source]
    cause: Option<DiffError>,
}

fn format_difference(difference: &Option<f64>) -> String {
    match difference {
        Some(d) => format!("{:.2}%", d * 100.0),
        None => String::from("N/A"),
    }
}

impl AssertionFailure {
    fn new(
        message: Option<&str>,
        expected: &Path,
        actual: &Path,
        difference: Option<f64>,
        cause: Option<DiffError>,
    ) -> AssertionFailure {
        AssertionFailure {
            message: message.map(str::to_owned),
            expected: expected.display().to_string(),
            actual: actual.display().to_string(),
            difference,
            cause,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// `None` when the images could not be compared at all.
    pub fn difference(&self) -> Option<f64> {
        self.difference
    }

    pub fn cause(&self) -> Option<&DiffError> {
        self.cause.as_ref()
    }
}

/// Passes when the images differ by at most `delta`. A comparison that can't
/// be carried out (unreadable file, mismatched dimensions...) fails.
pub fn check_equals<P: AsRef<Path>, Q: AsRef<Path>>(
    message: Option<&str>,
    expected: P,
    actual: Q,
    delta: f64,
) -> Result<(), AssertionFailure> {
    let expected = expected.as_ref();
    let actual = actual.as_ref();

    match image_difference(expected, actual) {
        Ok(difference) if difference > delta => Err(AssertionFailure::new(
            message,
            expected,
            actual,
            Some(difference),
            None,
        )),
        Ok(_) => Ok(()),
        Err(why) => Err(AssertionFailure::new(
            message,
            expected,
            actual,
            None,
            Some(why),
        )),
    }
}

/// Passes when the images differ by more than `delta`.
///
/// Unlike [`check_equals`], a comparison that can't be carried out passes:
/// images that can't be compared are considered different.
pub fn check_not_equals<P: AsRef<Path>, Q: AsRef<Path>>(
    message: Option<&str>,
    expected: P,
    actual: Q,
    delta: f64,
) -> Result<(), AssertionFailure> {
    let expected = expected.as_ref();
    let actual = actual.as_ref();

    match image_difference(expected, actual) {
        Ok(difference) if difference <= delta => Err(AssertionFailure::new(
            message,
            expected,
            actual,
            Some(difference),
            None,
        )),
        Ok(_) => Ok(()),
        Err(why) => {
            warn!("Images considered different, comparison failed: {}", why);
            Ok(())
        }
    }
}

#[track_caller]
pub fn assert_equals<P: AsRef<Path>, Q: AsRef<Path>>(expected: P, actual: Q, delta: f64) {
    if let Err(failure) = check_equals(None, expected, actual, delta) {
        panic!("{}", failure);
    }
}

#[track_caller]
pub fn assert_equals_with_message<P: AsRef<Path>, Q: AsRef<Path>>(
    message: &str,
    expected: P,
    actual: Q,
    delta: f64,
) {
    if let Err(failure) = check_equals(Some(message), expected, actual, delta) {
        panic!("{}", failure);
    }
}

#[track_caller]
pub fn assert_not_equals<P: AsRef<Path>, Q: AsRef<Path>>(expected: P, actual: Q, delta: f64) {
    if let Err(failure) = check_not_equals(None, expected, actual, delta) {
        panic!("{}", failure);
    }
}

#[track_caller]
pub fn assert_not_equals_with_message<P: AsRef<Path>, Q: AsRef<Path>>(
    message: &str,
    expected: P,
    actual: Q,
    delta: f64,
) {
    if let Err(failure) = check_not_equals(Some(message), expected, actual, delta) {
        panic!("{}", failure);
    }
}

/// Asserts that two image files differ by at most `delta`.
///
/// ```no_run
/// assertimg::assert_image_eq!("expected.png", "actual.png", 0.01);
/// assertimg::assert_image_eq!("expected.png", "actual.png", 0.01, "tile {} differs", 3);
/// ```
#[macro_export]
macro_rules! assert_image_eq {
    ($expected:expr, $actual:expr, $delta:expr $(,)?) => {
        $crate::assertion::assert_equals($expected, $actual, $delta)
    };
    ($expected:expr, $actual:expr, $delta:expr, $($arg:tt)+) => {
        $crate::assertion::assert_equals_with_message(
            &format!($($arg)+),
            $expected,
            $actual,
            $delta,
        )
    };
}

/// Asserts that two image files differ by more than `delta`, or can't be
/// compared at all.
#[macro_export]
macro_rules! assert_image_ne {
    ($expected:expr, $actual:expr, $delta:expr $(,)?) => {
        $crate::assertion::assert_not_equals($expected, $actual, $delta)
    };
    ($expected:expr, $actual:expr, $delta:expr, $($arg:tt)+) => {
        $crate::assertion::assert_not_equals_with_message(
            &format!($($arg)+),
            $expected,
            $actual,
            $delta,
        )
    };
}
