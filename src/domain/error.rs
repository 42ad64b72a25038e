use thiserror::Error;

/// Core domain errors
///
/// These cover unexpected infrastructure failures only. Expected validation
/// failures are reported as [`ValidationOutcome::Rejected`] and never travel
/// through this type.
///
/// [`ValidationOutcome::Rejected`]: crate::domain::ValidationOutcome::Rejected
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Registry error: {message}")]
    Registry { message: String },

    #[error("Directory error: {message}")]
    Directory { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error() {
        let error = DomainError::registry("teams.yaml is malformed");
        assert_eq!(error.to_string(), "Registry error: teams.yaml is malformed");
    }

    #[test]
    fn test_directory_error() {
        let error = DomainError::directory("HTTP 503: unavailable");
        assert_eq!(error.to_string(), "Directory error: HTTP 503: unavailable");
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("workspace is not set");
        assert_eq!(
            error.to_string(),
            "Configuration error: workspace is not set"
        );
    }
}
