use std::collections::HashMap;

use crate::models::{GitHubUser, LanguageShare, Repository, StatsRecord};

pub fn aggregate_stats(user: &GitHubUser, repos: &[Repository]) -> StatsRecord {
    StatsRecord {
        username: user.login.clone(),
        avatar_url: user.avatar_url.clone(),
        created_at: user.created_at,
        followers: user.followers,
        public_repos: user.public_repos,
        total_stars: total_stars(repos),
        languages: language_breakdown(repos),
    }
}

/// Stars over every repository, including those without a language.
pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| r.stargazers_count as u64).sum()
}

/// Share of repositories per primary language, counted by repository and
/// not by size. Repositories without a language are left out entirely.
pub fn language_breakdown(repos: &[Repository]) -> Vec<LanguageShare> {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        match index.get(language).copied() {
            Some(i) => counts[i].1 += 1,
            None => {
                index.insert(language, counts.len());
                counts.push((language, 1));
            }
        }
    }

    let total: u32 = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return Vec::new();
    }

    // Stable: ties stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(name, repo_count)| LanguageShare {
            name: name.to_string(),
            repo_count,
            percentage: repo_count as f64 / total as f64 * 100.0,
        })
        .collect()
}
