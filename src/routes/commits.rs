use axum::{Json, Router, extract::State, routing::get};

use crate::error::Result;
use crate::models::CommitTableRow;
use crate::routes::AppState;
use crate::stats;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/commits", get(get_commits))
        .with_state(state)
}

async fn get_commits(State(state): State<AppState>) -> Result<Json<Vec<CommitTableRow>>> {
    let batches = stats::collect_commits(&state.registry, &state.commits).await?;
    Ok(Json(stats::commit_table(&batches)))
}
