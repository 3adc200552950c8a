//! Employee handlers: CRUD plus the management tree.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::api::state::AppState;
use crate::db::{employee as repo, team as team_repo};
use crate::error::{AppError, Result};
use crate::models::{CreateEmployee, EmployeeView, TreeNode, UpdateEmployee};
use crate::tree::build_tree;

type IdPath = std::result::Result<Path<i32>, PathRejection>;

/// Referenced team and manager must exist when given.
async fn ensure_references(db: &DatabaseConnection, manager_id: Option<i32>, team_id: Option<i32>) -> Result<()> {
    if let Some(manager_id) = manager_id {
        if !repo::exists(db, manager_id).await? {
            return Err(AppError::validation(format!("manager {manager_id} does not exist")));
        }
    }
    if let Some(team_id) = team_id {
        if team_repo::get_by_id(db, team_id).await?.is_none() {
            return Err(AppError::validation(format!("team {team_id} does not exist")));
        }
    }
    Ok(())
}

/// Fetch with team and manager expanded, or the generic 404.
async fn fetch(db: &DatabaseConnection, id: i32) -> Result<EmployeeView> {
    repo::get_expanded(db, id)
        .await?
        .ok_or_else(|| AppError::not_found("not found"))
}

/// POST /employees
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateEmployee>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeView>)> {
    let Json(body) = payload?;
    let body = body.validated()?;
    ensure_references(&state.db, body.manager_id, body.team_id).await?;

    let employee = repo::create(&state.db, body).await?;
    info!(employee_id = employee.id, "Employee created");

    Ok((StatusCode::CREATED, Json(EmployeeView::from(employee))))
}

/// GET /employees
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EmployeeView>>> {
    Ok(Json(repo::list_all_expanded(&state.db).await?))
}

/// GET /employees/{id}
pub async fn get(State(state): State<AppState>, id: IdPath) -> Result<Json<EmployeeView>> {
    let Path(id) = id?;
    Ok(Json(fetch(&state.db, id).await?))
}

/// PUT /employees/{id}
pub async fn update(
    State(state): State<AppState>,
    id: IdPath,
    payload: std::result::Result<Json<UpdateEmployee>, JsonRejection>,
) -> Result<Json<EmployeeView>> {
    let Path(id) = id?;
    let Json(body) = payload?;
    let body = body.validated()?;

    ensure_references(&state.db, body.manager_id.flatten(), body.team_id.flatten()).await?;

    if repo::update(&state.db, id, body).await?.is_some() {
        info!(employee_id = id, "Employee updated");
    }

    Ok(Json(fetch(&state.db, id).await?))
}

/// DELETE /employees/{id}
pub async fn delete(State(state): State<AppState>, id: IdPath) -> Result<StatusCode> {
    let Path(id) = id?;

    if repo::delete(&state.db, id).await? {
        info!(employee_id = id, "Employee deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /employees/{id}/tree
pub async fn tree(State(state): State<AppState>, id: IdPath) -> Result<Json<TreeNode>> {
    let Path(id) = id?;
    Ok(Json(build_tree(&state.db, id).await?))
}
