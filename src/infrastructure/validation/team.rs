//! Team field validator

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::team::TeamRegistryRepository;
use crate::domain::{DomainError, FieldValue, ValidationOutcome};

/// Validates that every submitted team name is registered in `teams.yaml`.
///
/// Team assignment is optional: a missing or empty field succeeds without
/// touching the registry. A missing registry file, by contrast, is a
/// rejection; without the registry there is no ground truth to check
/// against. Names are checked in input order and the first unregistered
/// name ends the validation.
#[derive(Debug, Clone)]
pub struct TeamValidator {
    registry: Arc<dyn TeamRegistryRepository>,
}

impl TeamValidator {
    pub fn new(registry: Arc<dyn TeamRegistryRepository>) -> Self {
        Self { registry }
    }

    pub async fn validate(&self, field: Option<&FieldValue>) -> ValidationOutcome {
        let Some(field) = field else {
            return ValidationOutcome::success();
        };

        let names = field.normalize();

        if names.is_empty() {
            return ValidationOutcome::success();
        }

        match self.check_registered(&names).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Team validation failed unexpectedly: {}", e);
                ValidationOutcome::rejected(format!("Validation failed: {}", e))
            }
        }
    }

    async fn check_registered(&self, names: &[String]) -> Result<ValidationOutcome, DomainError> {
        let Some(registry) = self.registry.load().await? else {
            warn!("Team registry not found");
            return Ok(ValidationOutcome::rejected(
                "The teams registry (teams.yaml) could not be found",
            ));
        };

        for name in names {
            info!("Validating team '{}'", name);

            if !registry.contains(name) {
                error!("Team '{}' is not registered", name);
                return Ok(ValidationOutcome::rejected(format!(
                    "Team '{}' is not registered in teams.yaml",
                    name
                )));
            }

            info!("Team '{}' is registered", name);
        }

        Ok(ValidationOutcome::success())
    }
}
