//! GitHub users API directory client

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::directory::{DirectoryAccount, DirectoryLookup, UserDirectory};
use crate::domain::DomainError;

const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("onboarding-validator/", env!("CARGO_PKG_VERSION"));

/// Directory backed by the GitHub REST users API.
///
/// A 404 on `GET /users/{username}` is the "not found" answer; every other
/// non-success status is a query failure. No retries and no client-side
/// timeout; the caller owns timeout policy.
#[derive(Debug, Clone)]
pub struct GithubUserDirectory {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl GithubUserDirectory {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_GITHUB_API_BASE_URL)
    }

    /// Point the client at a non-default API root (GitHub Enterprise, or a
    /// mock server in tests).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to build HTTP client"),
            token: token.into(),
            base_url,
        }
    }

    fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, username)
    }
}

#[async_trait]
impl UserDirectory for GithubUserDirectory {
    async fn lookup(&self, username: &str) -> Result<DirectoryLookup, DomainError> {
        let response = self
            .client
            .get(self.user_url(username))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .send()
            .await
            .map_err(|e| DomainError::directory(format!("Request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(DirectoryLookup::NotFound);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::directory(format!("HTTP {}: {}", status, body)));
        }

        let account: DirectoryAccount = response
            .json()
            .await
            .map_err(|e| DomainError::directory(format!("Failed to parse response: {}", e)))?;

        Ok(DirectoryLookup::Found(account))
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::domain::directory::AccountType;

    fn directory_for(server: &MockServer) -> GithubUserDirectory {
        GithubUserDirectory::with_base_url("test-token", server.uri())
    }

    #[tokio::test]
    async fn test_lookup_existing_user() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "octocat",
                "id": 583231,
                "type": "User"
            })))
            .mount(&server)
            .await;

        let directory = directory_for(&server);
        let lookup = directory.lookup("octocat").await.unwrap();

        assert_eq!(
            lookup,
            DirectoryLookup::Found(DirectoryAccount::user("octocat"))
        );
    }

    #[tokio::test]
    async fn test_lookup_organization_account() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/github"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "github",
                "type": "Organization"
            })))
            .mount(&server)
            .await;

        let directory = directory_for(&server);
        let lookup = directory.lookup("github").await.unwrap();

        match lookup {
            DirectoryLookup::Found(account) => {
                assert_eq!(account.account_type, AccountType::Organization);
            }
            DirectoryLookup::NotFound => panic!("expected a found account"),
        }
    }

    #[tokio::test]
    async fn test_lookup_missing_user_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/no-such-user"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Not Found"
            })))
            .mount(&server)
            .await;

        let directory = directory_for(&server);
        let lookup = directory.lookup("no-such-user").await.unwrap();

        assert_eq!(lookup, DirectoryLookup::NotFound);
    }

    #[tokio::test]
    async fn test_server_error_is_directory_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let directory = directory_for(&server);
        let error = directory.lookup("octocat").await.unwrap_err();

        assert!(error.to_string().contains("HTTP 500"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let directory = GithubUserDirectory::with_base_url("t", "https://ghe.example.com/api/v3/");
        assert_eq!(
            directory.user_url("octocat"),
            "https://ghe.example.com/api/v3/users/octocat"
        );
    }
}
