//! Handle format rules
//!
//! GitHub handle grammar: 1-39 characters, ASCII letters, digits, and
//! hyphens only, no leading, trailing, or consecutive hyphens.

use thiserror::Error;

/// Errors that can occur during handle format validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandleValidationError {
    #[error("username cannot be empty")]
    Empty,

    #[error("username cannot exceed {0} characters")]
    TooLong(usize),

    #[error("username must start with a letter or number")]
    InvalidStart,

    #[error("username must end with a letter or number")]
    InvalidEnd,

    #[error("username contains invalid character '{0}'; only letters, numbers, and hyphens are allowed")]
    InvalidCharacter(char),

    #[error("username cannot contain consecutive hyphens")]
    ConsecutiveHyphens,
}

const MAX_HANDLE_LENGTH: usize = 39;

/// Validate a GitHub handle against the format rules.
///
/// Purely syntactic; runs before any directory lookup so malformed input
/// never reaches the network.
pub fn validate_handle(handle: &str) -> Result<(), HandleValidationError> {
    if handle.is_empty() {
        return Err(HandleValidationError::Empty);
    }

    if handle.len() > MAX_HANDLE_LENGTH {
        return Err(HandleValidationError::TooLong(MAX_HANDLE_LENGTH));
    }

    let chars: Vec<char> = handle.chars().collect();

    if !chars[0].is_ascii_alphanumeric() {
        return Err(HandleValidationError::InvalidStart);
    }

    if !chars[chars.len() - 1].is_ascii_alphanumeric() {
        return Err(HandleValidationError::InvalidEnd);
    }

    let mut prev_hyphen = false;

    for c in &chars {
        if *c == '-' {
            if prev_hyphen {
                return Err(HandleValidationError::ConsecutiveHyphens);
            }
            prev_hyphen = true;
        } else if c.is_ascii_alphanumeric() {
            prev_hyphen = false;
        } else {
            return Err(HandleValidationError::InvalidCharacter(*c));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_handles() {
        assert!(validate_handle("abc").is_ok());
        assert!(validate_handle("a").is_ok());
        assert!(validate_handle("octo-cat").is_ok());
        assert!(validate_handle("Octo-Cat-123").is_ok());
        assert!(validate_handle(&"a".repeat(39)).is_ok());
    }

    #[test]
    fn test_empty_handle() {
        assert_eq!(validate_handle(""), Err(HandleValidationError::Empty));
    }

    #[test]
    fn test_handle_too_long() {
        let long = "a".repeat(40);
        assert_eq!(
            validate_handle(&long),
            Err(HandleValidationError::TooLong(39))
        );
    }

    #[test]
    fn test_leading_hyphen() {
        assert_eq!(
            validate_handle("-abc"),
            Err(HandleValidationError::InvalidStart)
        );
    }

    #[test]
    fn test_trailing_hyphen() {
        assert_eq!(
            validate_handle("abc-"),
            Err(HandleValidationError::InvalidEnd)
        );
    }

    #[test]
    fn test_consecutive_hyphens() {
        assert_eq!(
            validate_handle("a--b"),
            Err(HandleValidationError::ConsecutiveHyphens)
        );
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_handle("octo_cat"),
            Err(HandleValidationError::InvalidCharacter('_'))
        );
        assert_eq!(
            validate_handle("octo.cat"),
            Err(HandleValidationError::InvalidCharacter('.'))
        );
    }
}
