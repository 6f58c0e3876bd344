//! Commit statistics: concurrent collection plus pure aggregation.

pub mod aggregate;

pub use aggregate::{RepoCommits, chart_data, commit_table, series_color};

use std::sync::Arc;

use crate::db::SharedRegistry;
use crate::error::{AppError, Result};
use crate::github::SharedCommitSource;

/// Fetch the commit batch for every tracked repo.
///
/// One task is spawned per repo so the fetches run concurrently; results are
/// joined back in registration order, which keeps chart series order (and
/// therefore colors) stable across requests. A single failed fetch fails the
/// whole collection.
pub async fn collect_commits(
    registry: &SharedRegistry,
    source: &SharedCommitSource,
) -> Result<Vec<RepoCommits>> {
    let repos = registry.tracked_repos()?;

    let mut handles = Vec::with_capacity(repos.len());
    for repo in repos {
        let source = Arc::clone(source);
        handles.push(tokio::spawn(async move {
            let commits = source
                .recent_commits(&repo.github_username, &repo.repo_name)
                .await?;
            Ok::<_, AppError>(RepoCommits { repo, commits })
        }));
    }

    let mut batches = Vec::with_capacity(handles.len());
    for handle in handles {
        let batch = handle
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;
        batches.push(batch);
    }

    Ok(batches)
}
