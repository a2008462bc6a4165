use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Username is required")]
    UsernameRequired,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The only failures a lookup ever reports to its caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("User not found")]
    UserNotFound,

    #[error("An unexpected error occurred")]
    Unexpected,
}

impl From<&Error> for LookupError {
    fn from(err: &Error) -> Self {
        match err {
            Error::UserNotFound(_) => LookupError::UserNotFound,
            _ => LookupError::Unexpected,
        }
    }
}

impl Serialize for LookupError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("LookupError", 1)?;
        state.serialize_field("error", &self.to_string())?;
        state.end()
    }
}
