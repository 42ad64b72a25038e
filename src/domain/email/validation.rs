//! Email syntax validation

use validator::ValidateEmail;

/// Check that `email` has RFC-shaped local-part/domain syntax.
///
/// This is a grammar check only; existence and deliverability are not
/// verified.
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}
