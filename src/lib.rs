//! Onboarding field validation
//!
//! Validates free-text fields from an issue-form-based member onboarding
//! workflow before they are merged into the persisted YAML registries:
//! - email address syntax,
//! - team names against the `teams.yaml` registry,
//! - GitHub usernames against the users API and the `members.yaml` registry.
//!
//! Each validator reduces one untrusted field to a single
//! [`ValidationOutcome`] and never returns an error to the caller; registry
//! files are read-only lookup tables loaded fresh on every call.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, FieldValue, ValidationOutcome};
pub use infrastructure::validation::{EmailValidator, TeamValidator, UsernameValidator};
