//! Error types for keyward.

use thiserror::Error;

/// Common error type for keyward.
///
/// Messages never carry passwords or file paths.
#[derive(Error, Debug)]
pub enum KeywardError {
    /// Resource not found (the password file, or a user in the table).
    #[error("{0} not found")]
    NotFound(String),

    /// Resource already exists.
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The password file could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The store actor has shut down.
    #[error("{0} unavailable")]
    Unavailable(String),
}

// csv wraps I/O failures in its own error type; unwrap those so callers
// can still match on `Io`.
impl From<csv::Error> for KeywardError {
    fn from(e: csv::Error) -> Self {
        let message = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => KeywardError::Io(io),
            _ => KeywardError::Parse(message),
        }
    }
}

/// Result type alias for keyward operations.
pub type Result<T> = std::result::Result<T, KeywardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_display() {
        let err = KeywardError::NotFound("user".to_string());
        assert_eq!(err.to_string(), "user not found");
    }

    #[test]
    fn test_already_exists_error_display() {
        let err = KeywardError::AlreadyExists("username".to_string());
        assert_eq!(err.to_string(), "username already exists");
    }

    #[test]
    fn test_validation_error_display() {
        let err = KeywardError::Validation("username cannot be empty".to_string());
        assert_eq!(err.to_string(), "validation error: username cannot be empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: KeywardError = io_err.into();
        assert!(matches!(err, KeywardError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_csv_io_error_stays_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: KeywardError = csv::Error::from(io_err).into();
        assert!(matches!(err, KeywardError::Io(_)));
    }

    #[test]
    fn test_csv_decode_error_is_parse() {
        let record = csv::StringRecord::from(vec!["not-a-number"]);
        let csv_err = record.deserialize::<(u32,)>(None).unwrap_err();
        let err: KeywardError = csv_err.into();

        assert!(matches!(err, KeywardError::Parse(_)));
        assert!(err.to_string().starts_with("parse error: "));
    }

    #[test]
    fn test_unavailable_error_display() {
        let err = KeywardError::Unavailable("store actor".to_string());
        assert_eq!(err.to_string(), "store actor unavailable");
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(KeywardError::Parse("bad row".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
