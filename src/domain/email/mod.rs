//! Email address rules

mod validation;

pub use validation::is_valid_email;
