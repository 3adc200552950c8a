//! Team handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::info;

use crate::api::state::AppState;
use crate::db::team as repo;
use crate::entities::teams;
use crate::error::Result;
use crate::models::CreateTeam;

/// POST /teams
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateTeam>, JsonRejection>,
) -> Result<(StatusCode, Json<teams::Model>)> {
    let Json(body) = payload?;
    let body = body.validated()?;

    let team = repo::create(&state.db, body).await?;
    info!(team_id = team.id, name = %team.name, "Team created");

    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /teams
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<teams::Model>>> {
    Ok(Json(repo::list_all(&state.db).await?))
}
