//! GitPulse - GitHub commit activity dashboard backend.
//!
//! Registers repositories under a team name, pulls recent commit history from
//! the GitHub REST API, and serves aggregated per-day commit counts as a
//! chart payload and a summary table.

pub mod config;
pub mod db;
pub mod error;
pub mod github;
pub mod models;
pub mod routes;
pub mod stats;
