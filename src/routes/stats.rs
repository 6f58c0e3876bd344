use axum::{Json, Router, extract::State, routing::get};

use crate::error::Result;
use crate::models::ChartData;
use crate::routes::AppState;
use crate::stats;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/stats", get(get_stats))
        .with_state(state)
}

async fn get_stats(State(state): State<AppState>) -> Result<Json<ChartData>> {
    let batches = stats::collect_commits(&state.registry, &state.commits).await?;
    Ok(Json(stats::chart_data(&batches)))
}
