use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitHubUser {
    pub login: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub followers: u32,
    pub public_repos: u32,
}

/// One entry of the user's repository list. `size` is carried through but
/// never weighs into the language breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub stargazers_count: u32,
    pub language: Option<String>,
    #[serde(default)]
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_profile_payload() {
        let user: GitHubUser = serde_json::from_str(
            r#"{
                "login": "octocat",
                "id": 583231,
                "avatar_url": "https://avatars.githubusercontent.com/u/583231",
                "created_at": "2011-01-25T18:44:36Z",
                "followers": 9000,
                "following": 9,
                "public_repos": 8
            }"#,
        )
        .unwrap();

        assert_eq!(user.login, "octocat");
        assert_eq!(user.followers, 9000);
        assert_eq!(user.public_repos, 8);
        assert_eq!(user.created_at.format("%Y").to_string(), "2011");
    }

    #[test]
    fn repository_language_may_be_null() {
        let repos: Vec<Repository> = serde_json::from_str(
            r#"[
                {"stargazers_count": 3, "language": "Rust", "size": 120},
                {"stargazers_count": 1, "language": null, "size": 4},
                {"stargazers_count": 0}
            ]"#,
        )
        .unwrap();

        assert_eq!(repos[0].language.as_deref(), Some("Rust"));
        assert_eq!(repos[1].language, None);
        assert_eq!(repos[2].language, None);
        assert_eq!(repos[2].size, 0);
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let result = serde_json::from_str::<GitHubUser>(
            r#"{"login":"x","avatar_url":"","created_at":"yesterday","followers":0,"public_repos":0}"#,
        );
        assert!(result.is_err());
    }
}
