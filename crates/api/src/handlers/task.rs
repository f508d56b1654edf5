//! Handlers for the `/api/tasks` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pmis_core::error::CoreError;
use pmis_core::types::DbId;
use pmis_store::models::task::{CreateTask, Task, UpdateTask};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::ProjectScope;
use crate::state::AppState;

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    input.validate().map_err(|e| AppError::validation("task", e))?;
    let task = state.store.create_task(input);
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks?projectId={id}
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ProjectScope>,
) -> AppResult<Json<Vec<Task>>> {
    Ok(Json(state.store.tasks(scope.project_id)))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = state
        .store
        .task(id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    input.validate().map_err(|e| AppError::validation("task", e))?;
    let task = state
        .store
        .update_task(id, input)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.store.delete_task(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}
