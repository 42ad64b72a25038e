//! YAML-backed registry repositories

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::member::{MemberRegistry, MemberRegistryRepository};
use crate::domain::team::{TeamRegistry, TeamRegistryRepository};
use crate::domain::DomainError;

const TEAMS_FILE: &str = "teams.yaml";
const MEMBERS_FILE: &str = "members.yaml";

/// Loads registries from `<data_dir>/teams.yaml` and
/// `<data_dir>/members.yaml`.
///
/// Every `load` reads and parses its file anew; the returned registry is a
/// snapshot owned by the caller. An absent file is reported as `None`, a
/// read or parse failure as a registry error.
#[derive(Debug, Clone)]
pub struct YamlRegistryRepository {
    data_dir: PathBuf,
}

impl YamlRegistryRepository {
    /// Create a repository rooted at the workspace `data` directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn teams_path(&self) -> PathBuf {
        self.data_dir.join(TEAMS_FILE)
    }

    pub fn members_path(&self) -> PathBuf {
        self.data_dir.join(MEMBERS_FILE)
    }

    async fn read_if_exists(path: &Path) -> Result<Option<String>, DomainError> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::registry(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl TeamRegistryRepository for YamlRegistryRepository {
    async fn load(&self) -> Result<Option<TeamRegistry>, DomainError> {
        let path = self.teams_path();

        let Some(content) = Self::read_if_exists(&path).await? else {
            return Ok(None);
        };

        let registry = serde_yaml::from_str(&content).map_err(|e| {
            DomainError::registry(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(Some(registry))
    }
}

#[async_trait]
impl MemberRegistryRepository for YamlRegistryRepository {
    async fn load(&self) -> Result<Option<MemberRegistry>, DomainError> {
        let path = self.members_path();

        let Some(content) = Self::read_if_exists(&path).await? else {
            return Ok(None);
        };

        let registry = serde_yaml::from_str(&content).map_err(|e| {
            DomainError::registry(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(Some(registry))
    }
}
