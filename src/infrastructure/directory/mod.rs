//! Directory service adapters

mod github;

pub use github::GithubUserDirectory;
