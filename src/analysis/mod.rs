pub mod pipeline;
pub mod stats_aggregator;
pub mod score_calculator;

pub use pipeline::ScorePipeline;
pub use stats_aggregator::{aggregate_stats, language_breakdown, total_stars};
pub use score_calculator::{calculate_score, rank_for_score, weighted_score};
