use image::ImageError;
use std::fmt;
use thiserror::Error;

/// Which side of a comparison an input belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Role {
    Expected,
    Actual,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Expected => write!(f, "Expected"),
            Role::Actual => write!(f, "Actual"),
        }
    }
}

/// Broad failure categories. Several `DiffError` variants can share a kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidInput,
    UnreadableFile,
    DimensionMismatch,
}

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("{0} image file must not be empty.")]
    InvalidInput(Role),

    #[error("{role} image file is invalid. {file}")]
    InvalidFile { role: Role, file: String },

    #[error("{role} image file is not an image. {file}")]
    NotAnImage {
        role: Role,
        file: String,
        #[source]
        cause: ImageError,
    },

    #[error("{role} image has no pixels. {file}")]
    EmptyImage { role: Role, file: String },

    #[error(
        "Images dimensions are incompatible. \
         Expected image: [{expected_width}px x {expected_height}px]. \
         Actual image: [{actual_width}px x {actual_height}px]. \
         Expected image file: {expected_file}. \
         Actual image file: {actual_file}."
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
        expected_file: String,
        actual_file: String,
    },

    #[error(
        "Images dimensions are incompatible. \
         Expected image: [{expected_len} values]. \
         Actual image: [{actual_len} values]. \
         Expected image file: {expected_file}. \
         Actual image file: {actual_file}."
    )]
    PixelCountMismatch {
        expected_len: usize,
        actual_len: usize,
        expected_file: String,
        actual_file: String,
    },
}

impl DiffError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiffError::InvalidInput(_) => ErrorKind::InvalidInput,
            DiffError::InvalidFile { .. }
            | DiffError::NotAnImage { .. }
            | DiffError::EmptyImage { .. } => ErrorKind::UnreadableFile,
            DiffError::DimensionMismatch { .. } | DiffError::PixelCountMismatch { .. } => {
                ErrorKind::DimensionMismatch
            }
        }
    }
}
