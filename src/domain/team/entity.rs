//! Team registry records

use serde::Deserialize;

/// A registered team as persisted in `teams.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamRecord {
    /// Unique team name, compared case-sensitively.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// The `teams.yaml` registry: an ordered sequence of team records.
///
/// Loaded fresh on every validation call and discarded afterwards; there is
/// no cached or shared instance.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamRegistry {
    #[serde(default)]
    teams: Vec<TeamRecord>,
}

impl TeamRegistry {
    pub fn new(teams: Vec<TeamRecord>) -> Self {
        Self { teams }
    }

    /// Whether `name` is a registered team (exact, case-sensitive match).
    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|team| team.name == name)
    }

    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
