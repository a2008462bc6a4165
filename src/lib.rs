pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod taxonomy;
pub mod analysis;
pub mod render;
pub mod server;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::{Error, LookupError, Result};
pub use github::{normalize_username, GitHubApi, GitHubClient, ProfileFetcher};
pub use analysis::ScorePipeline;
pub use models::{Rank, ScoreReport, StatsRecord};
