use std::sync::Arc;

use crate::error::LookupError;
use crate::github::api::GitHubApi;
use crate::models::{GitHubUser, Repository};

/// Raw payloads of one successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedProfile {
    pub user: GitHubUser,
    pub repos: Vec<Repository>,
}

/// Runs the two profile lookups in order and collapses every failure into
/// a [`LookupError`].
#[derive(Clone)]
pub struct ProfileFetcher {
    github: Arc<dyn GitHubApi>,
}

impl ProfileFetcher {
    pub fn new(github: impl GitHubApi + 'static) -> Self {
        Self {
            github: Arc::new(github),
        }
    }

    pub async fn fetch(&self, username: &str) -> Result<FetchedProfile, LookupError> {
        // The repository list is never requested for a user that failed.
        let user = self
            .github
            .get_user(username)
            .await
            .map_err(|e| normalize(username, e))?;

        let repos = self
            .github
            .get_user_repos(username)
            .await
            .map_err(|e| normalize(username, e))?;

        tracing::debug!("Fetched {} repositories for {}", repos.len(), username);
        Ok(FetchedProfile { user, repos })
    }
}

fn normalize(username: &str, err: crate::error::Error) -> LookupError {
    let lookup = LookupError::from(&err);
    match lookup {
        LookupError::UserNotFound => tracing::info!("User not found: {}", username),
        LookupError::Unexpected => tracing::warn!("Lookup for {} failed: {}", username, err),
    }
    lookup
}
