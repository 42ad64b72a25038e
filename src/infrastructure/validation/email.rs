//! Email field validator

use crate::domain::email::is_valid_email;
use crate::domain::ValidationOutcome;

const MISSING_EMAIL: &str = "No email address was provided";

/// Validates the syntax of a submitted email address.
///
/// Purely syntactic and synchronous: no I/O, no deliverability probing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, email: Option<&str>) -> ValidationOutcome {
        let Some(email) = email else {
            return ValidationOutcome::rejected(MISSING_EMAIL);
        };

        let trimmed = email.trim();

        if trimmed.is_empty() {
            return ValidationOutcome::rejected(MISSING_EMAIL);
        }

        if !is_valid_email(trimmed) {
            return ValidationOutcome::rejected(
                "The email address is not in a valid format (e.g. user@example.com)",
            );
        }

        ValidationOutcome::success()
    }
}
