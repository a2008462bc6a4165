//! In-memory fakes and fixtures shared by the unit tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::github::GitHubApi;
use crate::models::{GitHubUser, Repository};

pub fn user(login: &str, followers: u32, public_repos: u32) -> GitHubUser {
    GitHubUser {
        login: login.to_string(),
        avatar_url: "https://example.com/avatar.jpg".to_string(),
        created_at: Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap(),
        followers,
        public_repos,
    }
}

pub fn repo(stars: u32, language: Option<&str>) -> Repository {
    Repository {
        stargazers_count: stars,
        language: language.map(str::to_string),
        size: 100,
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    NotFound,
    Transport,
    Malformed,
}

impl Failure {
    fn into_error(self, username: &str) -> Error {
        match self {
            Failure::NotFound => Error::UserNotFound(username.to_string()),
            Failure::Transport => Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "Network error",
            )),
            Failure::Malformed => {
                let err = serde_json::from_str::<GitHubUser>("{").unwrap_err();
                Error::Serialization(err)
            }
        }
    }
}

/// Scripted `GitHubApi` that records every username each lookup received.
#[derive(Clone, Default)]
pub struct FakeGitHub {
    user: Option<GitHubUser>,
    repos: Vec<Repository>,
    user_failure: Option<Failure>,
    repos_failure: Option<Failure>,
    user_calls: Arc<AtomicUsize>,
    repo_calls: Arc<AtomicUsize>,
    user_requests: Arc<Mutex<Vec<String>>>,
    repo_requests: Arc<Mutex<Vec<String>>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: GitHubUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_repos(mut self, repos: Vec<Repository>) -> Self {
        self.repos = repos;
        self
    }

    pub fn failing_user(mut self, failure: Failure) -> Self {
        self.user_failure = Some(failure);
        self
    }

    pub fn failing_repos(mut self, failure: Failure) -> Self {
        self.repos_failure = Some(failure);
        self
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    pub fn repo_calls(&self) -> usize {
        self.repo_calls.load(Ordering::SeqCst)
    }

    pub fn user_requests(&self) -> Vec<String> {
        self.user_requests.lock().unwrap().clone()
    }

    pub fn repo_requests(&self) -> Vec<String> {
        self.repo_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        self.user_requests.lock().unwrap().push(username.to_string());
        if let Some(failure) = self.user_failure {
            return Err(failure.into_error(username));
        }
        self.user
            .clone()
            .ok_or_else(|| Error::UserNotFound(username.to_string()))
    }

    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        self.repo_requests.lock().unwrap().push(username.to_string());
        if let Some(failure) = self.repos_failure {
            return Err(failure.into_error(username));
        }
        Ok(self.repos.clone())
    }
}
