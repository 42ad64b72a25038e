//! Directory lookup trait

use async_trait::async_trait;

use super::entity::DirectoryLookup;
use crate::domain::DomainError;

/// Queries the remote user directory by username.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug {
    /// Look up `username`, distinguishing "not found" from query failure.
    async fn lookup(&self, username: &str) -> Result<DirectoryLookup, DomainError>;
}
