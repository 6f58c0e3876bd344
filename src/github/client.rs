use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::github::{CommitRecord, CommitSource};

/// GitHub returns at most this many commits per page; we never page further.
const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    pub fn new(api_url: &str, token: Option<&str>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        if let Some(token) = token {
            if let Ok(val) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(header::AUTHORIZATION, val);
            }
        }
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static("gitpulse/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("failed to build reqwest client");

        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
struct GhCommitEntry {
    commit: GhCommit,
}

#[derive(Deserialize)]
struct GhCommit {
    author: GhSignature,
}

#[derive(Deserialize)]
struct GhSignature {
    date: String,
}

#[async_trait]
impl CommitSource for GitHubClient {
    async fn recent_commits(&self, owner: &str, repo: &str) -> Result<Vec<CommitRecord>> {
        let url = format!(
            "{}/repos/{owner}/{repo}/commits?per_page={PER_PAGE}",
            self.api_url
        );
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream {
                status: 0,
                message: e.to_string(),
            })?;

        let status = resp.status().as_u16();
        if status == 403 || status == 429 {
            return Err(AppError::RateLimited);
        }
        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status,
                message: body,
            });
        }

        let entries: Vec<GhCommitEntry> = resp.json().await.map_err(|e| AppError::Upstream {
            status: 0,
            message: format!("JSON parse error: {e}"),
        })?;

        Ok(entries
            .into_iter()
            .map(|e| CommitRecord {
                author_date: e.commit.author.date,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_list_decoding() {
        let body = r#"[
            {
                "sha": "abc123",
                "commit": {
                    "author": { "name": "Alice", "email": "a@example.com", "date": "2024-01-02T15:04:05Z" },
                    "message": "fix widget"
                }
            },
            {
                "sha": "def456",
                "commit": {
                    "author": { "name": "Bob", "email": "b@example.com", "date": "2024-01-03T09:00:00Z" },
                    "message": "add gadget"
                }
            }
        ]"#;

        let entries: Vec<GhCommitEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].commit.author.date, "2024-01-02T15:04:05Z");
        assert_eq!(entries[1].commit.author.date, "2024-01-03T09:00:00Z");
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let client = GitHubClient::new("https://api.github.com/", None);
        assert_eq!(client.api_url, "https://api.github.com");
    }
}
