//! Remote user-directory domain module
//!
//! Models the query-by-username lookup against the directory service as
//! data: a lookup either finds an account, reports "not found", or fails
//! with a [`DomainError`](crate::domain::DomainError). Validator logic
//! branches on the lookup value, never on caught exceptions.

mod entity;
mod repository;
mod validation;

pub use entity::{AccountType, DirectoryAccount, DirectoryLookup};
pub use repository::UserDirectory;
pub use validation::{validate_handle, HandleValidationError};

#[cfg(test)]
pub use repository::mock;
