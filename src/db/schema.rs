/// SQL statements for creating the GitPulse database schema.

pub const CREATE_SCHEMA_VERSION: &str = "
CREATE TABLE IF NOT EXISTS schema_version (
    version     INTEGER PRIMARY KEY,
    applied_at  TEXT NOT NULL
)";

pub const CREATE_TRACKED_REPOS: &str = "
CREATE TABLE IF NOT EXISTS tracked_repos (
    id              INTEGER PRIMARY KEY,
    team_name       TEXT NOT NULL,
    github_username TEXT NOT NULL,
    repo_name       TEXT NOT NULL,
    created_at      TEXT NOT NULL,
    UNIQUE (team_name, github_username, repo_name)
)";

/// All table creation statements in order.
pub const ALL_TABLES: &[&str] = &[CREATE_SCHEMA_VERSION, CREATE_TRACKED_REPOS];
