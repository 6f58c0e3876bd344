use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A (team, GitHub username, repository) triple registered for monitoring.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedRepo {
    pub id: i64,
    pub team_name: String,
    pub github_username: String,
    pub repo_name: String,
    pub created_at: DateTime<Utc>,
}

impl TrackedRepo {
    /// Display label grouping commits by team and repo. Rows that differ only
    /// by username share a key and merge in the chart.
    pub fn series_key(&self) -> String {
        format!("{} ({})", self.team_name, self.repo_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub team_name: String,
    pub github_username: String,
    pub repo_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}
