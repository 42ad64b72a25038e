use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration
///
/// Loaded from optional `config/default` / `config/local` files plus
/// `ONBOARD`-prefixed environment variables with `__` as the separator
/// (e.g. `ONBOARD__GITHUB__TOKEN`, `ONBOARD__WORKSPACE`).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Checkout of the registry repository. The YAML registries live under
    /// `<workspace>/data`.
    pub workspace: PathBuf,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    /// Token used to query the users API. Required only when validating
    /// usernames.
    #[serde(default)]
    pub token: Option<String>,
    /// API root; override for GitHub Enterprise.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base_url: default_api_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("ONBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Directory holding the YAML registries.
    pub fn data_dir(&self) -> PathBuf {
        self.workspace.join("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_is_under_workspace() {
        let config = AppConfig {
            workspace: PathBuf::from("/checkout"),
            github: GithubConfig::default(),
            logging: LoggingConfig::default(),
        };

        assert_eq!(config.data_dir(), PathBuf::from("/checkout/data"));
    }

    #[test]
    fn test_github_defaults() {
        let github = GithubConfig::default();
        assert!(github.token.is_none());
        assert_eq!(github.api_base_url, "https://api.github.com");
    }

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "info");
        assert!(matches!(logging.format, LogFormat::Pretty));
    }
}
