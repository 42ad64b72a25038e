//! Username field validator

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::directory::{validate_handle, DirectoryLookup, UserDirectory};
use crate::domain::member::MemberRegistryRepository;
use crate::domain::{DomainError, ValidationOutcome};

const MISSING_USERNAME: &str = "No GitHub username was provided";

/// Validates a submitted GitHub username.
///
/// Three checks, strictly in order: handle format (pure, before any I/O),
/// existence in the remote directory, and absence from the member registry.
/// A missing member registry is not a failure; a brand-new deployment has
/// no members yet, so the duplicate check is simply skipped.
#[derive(Debug, Clone)]
pub struct UsernameValidator {
    directory: Arc<dyn UserDirectory>,
    registry: Arc<dyn MemberRegistryRepository>,
}

impl UsernameValidator {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        registry: Arc<dyn MemberRegistryRepository>,
    ) -> Self {
        Self {
            directory,
            registry,
        }
    }

    pub async fn validate(&self, username: Option<&str>) -> ValidationOutcome {
        let Some(username) = username else {
            return ValidationOutcome::rejected(MISSING_USERNAME);
        };

        let trimmed = username.trim();

        if trimmed.is_empty() {
            return ValidationOutcome::rejected(MISSING_USERNAME);
        }

        if let Err(e) = validate_handle(trimmed) {
            return ValidationOutcome::rejected(format!(
                "'{}' is not a valid GitHub username: {}",
                trimmed, e
            ));
        }

        match self.check_directory(trimmed).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Username validation failed unexpectedly: {}", e);
                ValidationOutcome::rejected(format!("Validation failed: {}", e))
            }
        }
    }

    async fn check_directory(&self, username: &str) -> Result<ValidationOutcome, DomainError> {
        info!("Checking if user '{}' exists", username);

        let account = match self.directory.lookup(username).await? {
            DirectoryLookup::NotFound => {
                return Ok(ValidationOutcome::rejected(format!(
                    "GitHub user '{}' was not found; check the username",
                    username
                )));
            }
            DirectoryLookup::Found(account) => account,
        };

        if !account.account_type.is_user() {
            return Ok(ValidationOutcome::rejected(format!(
                "'{}' is not a valid GitHub user account (type: {})",
                username, account.account_type
            )));
        }

        info!("User '{}' exists", username);

        self.check_not_registered(username).await
    }

    async fn check_not_registered(&self, username: &str) -> Result<ValidationOutcome, DomainError> {
        info!("Checking if user '{}' is already in members.yaml", username);

        let Some(registry) = self.registry.load().await? else {
            warn!("Member registry not found, skipping duplicate check");
            return Ok(ValidationOutcome::success());
        };

        if registry.contains(username) {
            return Ok(ValidationOutcome::rejected(format!(
                "User '{}' is already registered in members.yaml",
                username
            )));
        }

        info!("User '{}' is not in members.yaml", username);

        Ok(ValidationOutcome::success())
    }
}
