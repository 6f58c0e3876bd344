//! Upstream commit source.
//!
//! `CommitSource` is the seam between the aggregator and the GitHub REST API;
//! handlers depend on the trait so tests can substitute a scripted double.
//! `GitHubClient` is the real implementation.

pub mod client;

pub use client::GitHubClient;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// A single commit as consumed by the aggregator. Only the author timestamp
/// matters; everything else GitHub returns is discarded.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    /// ISO-8601 author timestamp, e.g. `2024-01-02T15:04:05Z`.
    pub author_date: String,
}

#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Fetch up to 100 most-recent commits for `owner/repo`.
    async fn recent_commits(&self, owner: &str, repo: &str) -> Result<Vec<CommitRecord>>;
}

pub type SharedCommitSource = Arc<dyn CommitSource>;
