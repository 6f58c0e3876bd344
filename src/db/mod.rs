//! Tracked-repo registry over SQLite.
//!
//! `Registry` wraps a single connection behind a mutex so axum handlers can
//! share it; the queries here are small enough that holding the lock across
//! them is fine.

pub mod migration;
pub mod ops;
pub mod schema;

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::error::{AppError, Result};
use crate::models::TrackedRepo;

/// Open (or create) the GitPulse database at the given path and run migrations.
pub fn open_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    migration::run_migrations(&conn)?;
    Ok(conn)
}

/// Open an in-memory database for testing.
pub fn open_memory_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    migration::run_migrations(&conn)?;
    Ok(conn)
}

pub struct Registry {
    conn: Mutex<Connection>,
}

impl Registry {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            conn: Mutex::new(open_db(path.as_ref())?),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Mutex::new(open_memory_db()?),
        })
    }

    /// Register a repo for tracking. Returns `true` if the repo was newly
    /// added, `false` if the exact triple was already tracked.
    pub fn register(
        &self,
        team_name: &str,
        github_username: &str,
        repo_name: &str,
    ) -> Result<bool> {
        let conn = self.lock()?;
        ops::insert_tracked_repo(&conn, team_name, github_username, repo_name)
    }

    /// All tracked repos in registration order.
    pub fn tracked_repos(&self) -> Result<Vec<TrackedRepo>> {
        let conn = self.lock()?;
        ops::list_tracked_repos(&conn)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| AppError::Internal("Lock poisoned".to_string()))
    }
}

pub type SharedRegistry = Arc<Registry>;
