//! API route handlers - maps HTTP endpoints to registry and aggregation calls.
//!
//! - `repos`: repo registration (POST /api/repos)
//! - `stats`: chart payload (GET /api/stats)
//! - `commits`: commit summary table (GET /api/commits)

pub mod commits;
pub mod repos;
pub mod stats;

use axum::Router;

use crate::db::SharedRegistry;
use crate::github::SharedCommitSource;

/// Handler dependencies, constructed once in `main` and injected everywhere.
#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
    pub commits: SharedCommitSource,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(repos::routes(state.clone()))
        .merge(stats::routes(state.clone()))
        .merge(commits::routes(state))
}
