pub mod api;
pub mod client;
pub mod fetcher;
pub mod username;

pub use api::GitHubApi;
pub use client::GitHubClient;
pub use fetcher::{FetchedProfile, ProfileFetcher};
pub use username::{normalize_username, require_username};
