use axum::{Json, Router, extract::State, routing::post};

use crate::error::{AppError, Result};
use crate::models::{RegisterRequest, RegisterResponse};
use crate::routes::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/repos", post(register_repo))
        .with_state(state)
}

async fn register_repo(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    for (field, value) in [
        ("team_name", &req.team_name),
        ("github_username", &req.github_username),
        ("repo_name", &req.repo_name),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::InvalidInput(format!("{field} is required")));
        }
    }

    let inserted =
        state
            .registry
            .register(&req.team_name, &req.github_username, &req.repo_name)?;

    let message = if inserted {
        "Repository added successfully."
    } else {
        "Repo already tracked."
    };

    Ok(Json(RegisterResponse {
        message: message.to_string(),
    }))
}
