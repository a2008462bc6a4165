use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::api::GitHubApi;
use crate::models::{GitHubUser, Repository};

/// Repositories are read from a single page of this size.
const REPOS_PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = config.github_token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("pudim/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.github_api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(username))
    }

    pub fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page={}",
            self.base_url,
            urlencoding::encode(username),
            REPOS_PER_PAGE
        )
    }
}

async fn ensure_success(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::GitHubApi(format!(
        "Failed to fetch {}: {} - {}",
        what, status, body
    )))
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = self.user_url(username);
        tracing::info!("Fetching user: {}", username);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        let response = ensure_success(response, &format!("user {}", username)).await?;
        Ok(response.json().await?)
    }

    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = self.repos_url(username);
        tracing::info!("Fetching repositories for: {}", username);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, &format!("repositories of {}", username)).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> GitHubClient {
        let config = Config {
            github_api_url: base.to_string(),
            ..Config::default()
        };
        GitHubClient::new(&config).unwrap()
    }

    #[test]
    fn builds_lookup_urls() {
        let client = client_for("https://api.github.com/");
        assert_eq!(client.user_url("octocat"), "https://api.github.com/users/octocat");
        assert_eq!(
            client.repos_url("octocat"),
            "https://api.github.com/users/octocat/repos?per_page=100"
        );
    }

    #[test]
    fn encodes_username_segment() {
        let client = client_for("https://api.github.com");
        assert_eq!(
            client.user_url("test user/x"),
            "https://api.github.com/users/test%20user%2Fx"
        );
    }

    #[test]
    fn rejects_token_with_invalid_header_bytes() {
        let config = Config {
            github_token: Some("bad\ntoken".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            GitHubClient::new(&config),
            Err(Error::InvalidHeader(_))
        ));
    }

    async fn spawn_stub() -> String {
        use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
        use serde_json::json;

        async fn user(Path(name): Path<String>) -> std::result::Result<Json<serde_json::Value>, StatusCode> {
            match name.as_str() {
                "ghost" => Err(StatusCode::NOT_FOUND),
                "broken" => Err(StatusCode::INTERNAL_SERVER_ERROR),
                _ => Ok(Json(json!({
                    "login": name,
                    "avatar_url": "https://example.com/avatar.png",
                    "created_at": "2012-01-01T00:00:00Z",
                    "followers": 100,
                    "public_repos": 2
                }))),
            }
        }

        async fn repos(Path(name): Path<String>) -> std::result::Result<Json<serde_json::Value>, StatusCode> {
            match name.as_str() {
                "norepos" => Err(StatusCode::FORBIDDEN),
                _ => Ok(Json(json!([
                    { "stargazers_count": 10, "language": "JavaScript", "size": 100 },
                    { "stargazers_count": 5, "language": null, "size": 50 }
                ]))),
            }
        }

        let app = Router::new()
            .route("/users/:name", get(user))
            .route("/users/:name/repos", get(repos));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn fetches_user_and_repos() {
        let client = client_for(&spawn_stub().await);

        let user = client.get_user("octocat").await.unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.followers, 100);

        let repos = client.get_user_repos("octocat").await.unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[1].language, None);
    }

    #[tokio::test]
    async fn not_found_maps_to_user_not_found() {
        let client = client_for(&spawn_stub().await);
        let err = client.get_user("ghost").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound(ref name) if name == "ghost"));
    }

    #[tokio::test]
    async fn other_failures_are_api_errors() {
        let client = client_for(&spawn_stub().await);

        let err = client.get_user("broken").await.unwrap_err();
        assert!(matches!(err, Error::GitHubApi(_)));

        let err = client.get_user_repos("norepos").await.unwrap_err();
        assert!(matches!(err, Error::GitHubApi(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        let err = client.get_user("octocat").await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
