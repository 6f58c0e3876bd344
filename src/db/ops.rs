use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};

use crate::error::Result;
use crate::models::TrackedRepo;

fn parse_dt(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Insert a tracked repo unless the (team, username, repo) triple already
/// exists. Returns `true` if a row was inserted, `false` if it was already
/// tracked. The UNIQUE constraint makes this atomic; there is no separate
/// existence check to race against.
pub fn insert_tracked_repo(
    conn: &Connection,
    team_name: &str,
    github_username: &str,
    repo_name: &str,
) -> Result<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO tracked_repos (team_name, github_username, repo_name, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            team_name,
            github_username,
            repo_name,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(changed > 0)
}

/// List all tracked repos in registration order.
pub fn list_tracked_repos(conn: &Connection) -> Result<Vec<TrackedRepo>> {
    let mut stmt = conn.prepare(
        "SELECT id, team_name, github_username, repo_name, created_at
         FROM tracked_repos ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| row_to_tracked_repo(row))?;
    Ok(rows.filter_map(|r| r.ok()).collect())
}

fn row_to_tracked_repo(row: &rusqlite::Row) -> rusqlite::Result<TrackedRepo> {
    let created_str: String = row.get(4)?;
    Ok(TrackedRepo {
        id: row.get(0)?,
        team_name: row.get(1)?,
        github_username: row.get(2)?,
        repo_name: row.get(3)?,
        created_at: parse_dt(&created_str),
    })
}
