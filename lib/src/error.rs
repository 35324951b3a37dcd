use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by a single image-to-text conversion
///
/// Every error is terminal for the conversion that raised it: no partial
/// output is returned.
#[derive(Error, Debug)]
pub enum AsciiError {
    /// Input file is missing or cannot be opened
    #[error("Image not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Image data is corrupt or in an unsupported format
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// A parameter is outside its valid range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing the rendered text failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AsciiError>;

impl AsciiError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        AsciiError::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_path() {
        let err = AsciiError::NotFound {
            path: PathBuf::from("missing.png"),
        };
        assert_eq!(err.to_string(), "Image not found: missing.png");
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = AsciiError::invalid("scale factor must be at least 1, got 0");
        assert!(matches!(err, AsciiError::InvalidArgument(_)));
        assert!(err.to_string().contains("got 0"));
    }
}
