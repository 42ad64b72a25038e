//! Validation outcome reported back to the onboarding workflow

use std::fmt;

/// The string reported for a successful validation.
pub const SUCCESS: &str = "success";

/// Result of validating a single submission field.
///
/// Validators are total: every input maps to an outcome, and unexpected
/// infrastructure failures are downgraded to [`Rejected`] carrying the
/// underlying message. The workflow layer therefore always receives a
/// displayable string, never an error.
///
/// [`Rejected`]: ValidationOutcome::Rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The field is acceptable.
    Success,
    /// The field was rejected, with a human-readable explanation.
    Rejected(String),
}

impl ValidationOutcome {
    pub fn success() -> Self {
        Self::Success
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The string handed to the workflow layer: the `"success"` sentinel or
    /// the rejection message.
    pub fn message(&self) -> &str {
        match self {
            Self::Success => SUCCESS,
            Self::Rejected(message) => message,
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
