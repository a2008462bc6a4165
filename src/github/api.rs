use async_trait::async_trait;
use crate::error::Result;
use crate::models::{GitHubUser, Repository};

/// Remote source of profile data keyed by username.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Must return `Error::UserNotFound` when the user does not exist.
    async fn get_user(&self, username: &str) -> Result<GitHubUser>;
    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>>;
}
