use chrono::Datelike;

use crate::error::{LookupError, Result};
use crate::models::{Rank, ScoreReport};
use crate::taxonomy::language_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Text,
        }
    }
}

pub fn render_report(report: &ScoreReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Markdown => format_markdown(report),
        OutputFormat::Text => format_text(report),
    })
}

pub fn render_error(err: LookupError, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&err)?,
        _ => err.to_string(),
    })
}

pub fn render_ranks(format: OutputFormat) -> Result<String> {
    let ranks: Vec<_> = Rank::ALL.iter().map(|r| r.info()).collect();
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&ranks)?);
    }

    let markdown = format == OutputFormat::Markdown;
    let mut output = String::new();
    if markdown {
        output.push_str("| Rank | Title | Score | Emoji |\n|------|-------|-------|-------|\n");
    } else {
        output.push_str("Ranking thresholds:\n");
    }

    for info in ranks {
        let threshold = match info.min_score_exclusive {
            Some(t) => format!("> {}", t),
            None => "anything else".to_string(),
        };
        if markdown {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                info.rank, info.title, threshold, info.emoji
            ));
        } else {
            output.push_str(&format!(
                "  {:<2} {:<15} {:<14} {}\n",
                info.rank.label(),
                info.title,
                threshold,
                info.emoji
            ));
        }
    }

    Ok(output)
}

fn format_text(report: &ScoreReport) -> String {
    let stats = &report.stats;
    let rank = &report.rank;
    let mut output = String::new();

    output.push_str(&format!("\n=== Dev Pudim Score: {} ===\n\n", stats.username));
    output.push_str(&format!("Member since {}\n", stats.created_at.year()));
    output.push_str(&format!(
        "Rank: {} - {} {}\n",
        rank.rank, rank.title, rank.emoji
    ));
    output.push_str(&format!("  {}\n", rank.description));
    output.push_str(&format!("Score: {:.1}\n\n", report.score));

    output.push_str(&format!("Stars: {}\n", stats.total_stars));
    output.push_str(&format!("Followers: {}\n", stats.followers));
    output.push_str(&format!("Repos: {}\n", stats.public_repos));

    if !stats.languages.is_empty() {
        output.push_str("\nPudim Flavors:\n");
        for lang in &stats.languages {
            output.push_str(&format!(
                "  - {} {}% ({})\n",
                lang.name,
                lang.percentage.round(),
                language_color(&lang.name)
            ));
        }
    }

    output
}

fn format_markdown(report: &ScoreReport) -> String {
    let stats = &report.stats;
    let rank = &report.rank;
    let mut output = String::new();

    output.push_str(&format!(
        "# {} Dev Pudim Score: {}\n\n",
        rank.emoji, stats.username
    ));
    output.push_str(&format!("![avatar]({})\n\n", stats.avatar_url));
    output.push_str(&format!("*Member since {}*\n\n", stats.created_at.year()));
    output.push_str(&format!("## {} - {}\n\n", rank.rank, rank.title));
    output.push_str(&format!("> {}\n\n", rank.description));

    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Score | {:.1} |\n", report.score));
    output.push_str(&format!("| Stars | {} |\n", stats.total_stars));
    output.push_str(&format!("| Followers | {} |\n", stats.followers));
    output.push_str(&format!("| Repos | {} |\n", stats.public_repos));

    if !stats.languages.is_empty() {
        output.push_str("\n## Pudim Flavors\n\n");
        output.push_str("| Language | Share | Color |\n|----------|-------|-------|\n");
        for lang in &stats.languages {
            output.push_str(&format!(
                "| {} | {:.1}% | `{}` |\n",
                lang.name,
                lang.percentage,
                language_color(&lang.name)
            ));
        }
    }

    output
}
