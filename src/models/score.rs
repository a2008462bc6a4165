use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::stats::StatsRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    #[serde(rename = "S+")]
    SPlus,
    S,
    A,
    B,
    C,
    D,
}

impl Rank {
    /// Highest tier first, the order thresholds are checked in.
    pub const ALL: [Rank; 6] = [Rank::SPlus, Rank::S, Rank::A, Rank::B, Rank::C, Rank::D];

    pub fn label(self) -> &'static str {
        match self {
            Rank::SPlus => "S+",
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        }
    }

    /// A score must be strictly greater than this to reach the tier.
    /// `D` is the catch-all and has none.
    pub fn min_score_exclusive(self) -> Option<f64> {
        match self {
            Rank::SPlus => Some(1000.0),
            Rank::S => Some(500.0),
            Rank::A => Some(200.0),
            Rank::B => Some(100.0),
            Rank::C => Some(50.0),
            Rank::D => None,
        }
    }

    pub fn info(self) -> RankInfo {
        let (title, description, emoji, color) = match self {
            Rank::SPlus => (
                "Legendary Flan",
                "The texture is perfect, the caramel is divine. You are a coding god!",
                "🍮✨",
                "amber-500",
            ),
            Rank::S => (
                "Master Pudim",
                "A delicious result. Michelin star worthy.",
                "🍮",
                "yellow-600",
            ),
            Rank::A => (
                "Tasty Pudding",
                "Everyone wants a slice. Great job!",
                "😋",
                "orange-500",
            ),
            Rank::B => (
                "Sweet Treat",
                "Solid and dependable. A good dessert.",
                "🍬",
                "orange-400",
            ),
            Rank::C => (
                "Homemade",
                "Made with love, but room for improvement.",
                "🏠",
                "yellow-700",
            ),
            Rank::D => (
                "Underbaked",
                "Needs a bit more time in the oven.",
                "🥚",
                "zinc-500",
            ),
        };

        RankInfo {
            rank: self,
            title,
            description,
            emoji,
            color,
            min_score_exclusive: self.min_score_exclusive(),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRank(pub String);

impl std::fmt::Display for UnknownRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown rank: {}", self.0)
    }
}

impl std::error::Error for UnknownRank {}

impl FromStr for Rank {
    type Err = UnknownRank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRank(s.to_string()))
    }
}

/// Static display data for a tier.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RankInfo {
    pub rank: Rank,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score_exclusive: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub rank: Rank,
}

/// What a successful lookup hands to the presentation layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreReport {
    pub stats: StatsRecord,
    pub score: f64,
    pub rank: RankInfo,
}

impl ScoreReport {
    pub fn new(stats: StatsRecord, result: ScoreResult) -> Self {
        Self {
            stats,
            score: result.score,
            rank: result.rank.info(),
        }
    }
}
