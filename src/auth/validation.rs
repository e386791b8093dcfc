//! Input validation for keyward user registration.

use thiserror::Error;

use crate::KeywardError;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Username is empty.
    #[error("username cannot be empty")]
    UsernameEmpty,
}

impl From<ValidationError> for KeywardError {
    fn from(e: ValidationError) -> Self {
        KeywardError::Validation(e.to_string())
    }
}

/// Validate a username.
///
/// The only requirement is that it is not empty. Any other string, control
/// characters and delimiters included, is quoted on write and round-trips
/// through the file. Passwords have no requirements at all.
///
/// # Examples
///
/// ```
/// use keyward::auth::validation::{validate_username, ValidationError};
///
/// assert!(validate_username("jdelgad").is_ok());
/// assert_eq!(validate_username(""), Err(ValidationError::UsernameEmpty));
/// ```
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::UsernameEmpty);
    }

    Ok(())
}
