use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysiscriptError {
    #[error("Invalid color value: {0}")]
    InvalidColorValue(String),

    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Unsupported color type: {0}")]
    UnsupportedColorType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, PhysiscriptError>;

#[cfg(feature = "serde")]
impl From<serde_json::Error> for PhysiscriptError {
    fn from(err: serde_json::Error) -> Self {
        PhysiscriptError::InvalidSettings(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_error_display() {
        let error = PhysiscriptError::InvalidColorFormat("'#12345'".to_string());
        assert_eq!(error.to_string(), "Invalid color format: '#12345'");

        let error = PhysiscriptError::InvalidColorValue("red 256".to_string());
        assert_eq!(error.to_string(), "Invalid color value: red 256");
    }

    #[test]
    fn test_error_debug() {
        let error = PhysiscriptError::UnsupportedColorType("float 3.5".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("UnsupportedColorType"));
        assert!(debug_str.contains("float 3.5"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let error = PhysiscriptError::from(io_error);

        match error {
            PhysiscriptError::Io(ref err) => {
                assert_eq!(err.kind(), ErrorKind::NotFound);
            }
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_all_error_variants() {
        let errors = vec![
            PhysiscriptError::InvalidColorValue("value".to_string()),
            PhysiscriptError::InvalidColorFormat("format".to_string()),
            PhysiscriptError::UnsupportedColorType("type".to_string()),
            PhysiscriptError::InvalidSettings("width".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        fn returns_error() -> Result<i32> {
            Err(PhysiscriptError::InvalidSettings("height must be positive".to_string()))
        }

        assert_eq!(returns_result().unwrap(), 42);
        assert!(returns_error().is_err());
    }
}
