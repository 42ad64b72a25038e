//! Team registry access

use async_trait::async_trait;

use super::entity::TeamRegistry;
use crate::domain::DomainError;

/// Loads the team registry from its persisted form.
///
/// Implementations load a fresh snapshot on every call. There is no caching
/// layer, which keeps validators stateless and safe to run concurrently.
#[async_trait]
pub trait TeamRegistryRepository: Send + Sync + std::fmt::Debug {
    /// Load the registry, or `None` when the backing file does not exist.
    async fn load(&self) -> Result<Option<TeamRegistry>, DomainError>;
}
