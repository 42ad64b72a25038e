//! Command-line entry points
//!
//! A debugging convenience for running a single validator outside the
//! onboarding workflow. Prints exactly the outcome string the workflow
//! would receive; exit-code policy stays with the invoking layer.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::FieldValue;
use crate::infrastructure::directory::GithubUserDirectory;
use crate::infrastructure::observability::init_tracing;
use crate::infrastructure::registry::YamlRegistryRepository;
use crate::infrastructure::validation::{EmailValidator, TeamValidator, UsernameValidator};

#[derive(Debug, Parser)]
#[command(
    name = "onboarding-validator",
    about = "Validate onboarding form fields",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate an email address field
    Email { value: String },
    /// Validate a team-name field (newline-separated names allowed)
    Team { value: String },
    /// Validate a GitHub username field
    Username { value: String },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let outcome = match cli.command {
        Command::Email { value } => EmailValidator::new().validate(Some(&value)),
        Command::Team { value } => {
            let registry = Arc::new(YamlRegistryRepository::new(config.data_dir()));
            let field = FieldValue::scalar(value);
            TeamValidator::new(registry).validate(Some(&field)).await
        }
        Command::Username { value } => {
            let token = config
                .github
                .token
                .as_deref()
                .context("github.token is required to validate usernames")?;
            let registry = Arc::new(YamlRegistryRepository::new(config.data_dir()));
            let directory = Arc::new(GithubUserDirectory::with_base_url(
                token,
                &config.github.api_base_url,
            ));
            UsernameValidator::new(directory, registry)
                .validate(Some(&value))
                .await
        }
    };

    println!("{}", outcome);
    Ok(())
}
