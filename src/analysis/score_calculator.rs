use crate::models::{Rank, ScoreResult, StatsRecord};

pub const FOLLOWER_WEIGHT: f64 = 0.5;
pub const STAR_WEIGHT: f64 = 2.0;
pub const PUBLIC_REPO_WEIGHT: f64 = 1.0;

pub fn calculate_score(stats: &StatsRecord) -> ScoreResult {
    let score = weighted_score(stats.followers, stats.total_stars, stats.public_repos);
    ScoreResult {
        score,
        rank: rank_for_score(score),
    }
}

/// Unbounded linear combination of the three counts.
pub fn weighted_score(followers: u32, total_stars: u64, public_repos: u32) -> f64 {
    followers as f64 * FOLLOWER_WEIGHT
        + total_stars as f64 * STAR_WEIGHT
        + public_repos as f64 * PUBLIC_REPO_WEIGHT
}

/// First tier whose threshold the score strictly exceeds, `D` otherwise.
pub fn rank_for_score(score: f64) -> Rank {
    Rank::ALL
        .into_iter()
        .find(|rank| match rank.min_score_exclusive() {
            Some(threshold) => score > threshold,
            None => true,
        })
        .unwrap_or(Rank::D)
}
