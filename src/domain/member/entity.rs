//! Member registry records

use serde::Deserialize;

/// A registered member as persisted in `members.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberRecord {
    /// GitHub username, unique case-insensitively.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact address recorded at onboarding time.
    #[serde(default)]
    pub email: Option<String>,
    /// Teams the member belongs to.
    #[serde(default)]
    pub teams: Vec<String>,
}

impl MemberRecord {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            name: None,
            email: None,
            teams: Vec::new(),
        }
    }
}

/// The `members.yaml` registry: an ordered sequence of member records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberRegistry {
    #[serde(default)]
    members: Vec<MemberRecord>,
}

impl MemberRegistry {
    pub fn new(members: Vec<MemberRecord>) -> Self {
        Self { members }
    }

    /// Whether `username` is already registered (ASCII case-insensitive).
    pub fn contains(&self, username: &str) -> bool {
        self.members
            .iter()
            .any(|member| member.username.eq_ignore_ascii_case(username))
    }

    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
