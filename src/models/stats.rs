use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized summary of a user's public footprint, built once per lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsRecord {
    pub username: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub followers: u32,
    pub public_repos: u32,
    pub total_stars: u64,
    /// Ordered by repository count, most used first.
    pub languages: Vec<LanguageShare>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageShare {
    pub name: String,
    pub repo_count: u32,
    pub percentage: f64,
}
