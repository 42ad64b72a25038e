//! Member registry access

use async_trait::async_trait;

use super::entity::MemberRegistry;
use crate::domain::DomainError;

/// Loads the member registry from its persisted form.
///
/// Same snapshot semantics as the team registry: a fresh load per call,
/// no caching. `None` means the backing file does not exist; the policy for
/// that case belongs to the caller, not the loader.
#[async_trait]
pub trait MemberRegistryRepository: Send + Sync + std::fmt::Debug {
    /// Load the registry, or `None` when the backing file does not exist.
    async fn load(&self) -> Result<Option<MemberRegistry>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Mock repository serving a fixed registry, an absent file, or an error.
    #[derive(Debug, Default)]
    pub struct MockMemberRegistryRepository {
        registry: Option<MemberRegistry>,
        error: Option<String>,
    }

    impl MockMemberRegistryRepository {
        pub fn with_registry(registry: MemberRegistry) -> Self {
            Self {
                registry: Some(registry),
                error: None,
            }
        }

        /// Simulate a missing `members.yaml`.
        pub fn absent() -> Self {
            Self::default()
        }

        /// Simulate an infrastructure failure on every load.
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                registry: None,
                error: Some(message.into()),
            }
        }
    }

    #[async_trait]
    impl MemberRegistryRepository for MockMemberRegistryRepository {
        async fn load(&self) -> Result<Option<MemberRegistry>, DomainError> {
            if let Some(message) = &self.error {
                return Err(DomainError::registry(message.clone()));
            }

            Ok(self.registry.clone())
        }
    }
}
