//! Directory account types

use serde::Deserialize;

/// Classification of a directory account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AccountType {
    /// A personal user account, the only type accepted for onboarding.
    User,
    /// An organization account.
    Organization,
    /// A machine account.
    Bot,
    /// Any classification this crate does not recognize.
    Other(String),
}

impl AccountType {
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User)
    }
}

impl From<String> for AccountType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "User" => Self::User,
            "Organization" => Self::Organization,
            "Bot" => Self::Bot,
            _ => Self::Other(value),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Organization => write!(f, "Organization"),
            Self::Bot => write!(f, "Bot"),
            Self::Other(value) => write!(f, "{}", value),
        }
    }
}

/// An account returned by the directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryAccount {
    /// Canonical username as the directory records it.
    pub login: String,
    /// Account classification.
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

impl DirectoryAccount {
    pub fn user(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            account_type: AccountType::User,
        }
    }
}

/// Outcome of a directory lookup.
///
/// "Not found" is an expected answer, distinct from a query failure; the
/// latter travels as a `DomainError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryLookup {
    Found(DirectoryAccount),
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_from_known_strings() {
        assert_eq!(AccountType::from("User".to_string()), AccountType::User);
        assert_eq!(
            AccountType::from("Organization".to_string()),
            AccountType::Organization
        );
        assert_eq!(AccountType::from("Bot".to_string()), AccountType::Bot);
    }

    #[test]
    fn test_account_type_preserves_unknown_strings() {
        let kind = AccountType::from("Mannequin".to_string());
        assert_eq!(kind, AccountType::Other("Mannequin".to_string()));
        assert_eq!(kind.to_string(), "Mannequin");
    }

    #[test]
    fn test_only_user_accounts_are_acceptable() {
        assert!(AccountType::User.is_user());
        assert!(!AccountType::Organization.is_user());
        assert!(!AccountType::Bot.is_user());
        assert!(!AccountType::Other("Mannequin".to_string()).is_user());
    }

    #[test]
    fn test_deserialize_account() {
        let json = r#"{"login": "octocat", "type": "User", "id": 583231}"#;
        let account: DirectoryAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.login, "octocat");
        assert!(account.account_type.is_user());
    }
}
