use crate::analysis::score_calculator::calculate_score;
use crate::analysis::stats_aggregator::aggregate_stats;
use crate::error::LookupError;
use crate::github::{GitHubApi, ProfileFetcher};
use crate::models::ScoreReport;

/// Fetch, aggregate and score a single user. Holds no per-lookup state, so
/// one instance can serve concurrent lookups.
#[derive(Clone)]
pub struct ScorePipeline {
    fetcher: ProfileFetcher,
}

impl ScorePipeline {
    pub fn new(github: impl GitHubApi + 'static) -> Self {
        Self {
            fetcher: ProfileFetcher::new(github),
        }
    }

    pub async fn score_user(&self, username: &str) -> Result<ScoreReport, LookupError> {
        tracing::info!("Scoring GitHub user: {}", username);

        let fetched = self.fetcher.fetch(username).await?;
        let stats = aggregate_stats(&fetched.user, &fetched.repos);
        let result = calculate_score(&stats);

        tracing::info!(
            "{} scored {:.1} ({} - {})",
            stats.username,
            result.score,
            result.rank,
            result.rank.info().title
        );

        Ok(ScoreReport::new(stats, result))
    }
}
