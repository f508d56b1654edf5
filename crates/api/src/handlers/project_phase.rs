//! Handlers for the `/api/project-phases` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pmis_core::error::CoreError;
use pmis_core::types::DbId;
use pmis_store::models::project_phase::{CreateProjectPhase, ProjectPhase, UpdateProjectPhase};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::ProjectScope;
use crate::state::AppState;

/// POST /api/project-phases
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProjectPhase>,
) -> AppResult<(StatusCode, Json<ProjectPhase>)> {
    input
        .validate()
        .map_err(|e| AppError::validation("project phase", e))?;
    let phase = state.store.create_phase(input);
    Ok((StatusCode::CREATED, Json(phase)))
}

/// GET /api/project-phases?projectId={id}
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ProjectScope>,
) -> AppResult<Json<Vec<ProjectPhase>>> {
    Ok(Json(state.store.phases(scope.project_id)))
}

/// GET /api/project-phases/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectPhase>> {
    let phase = state
        .store
        .phase(id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectPhase",
            id,
        }))?;
    Ok(Json(phase))
}

/// PUT /api/project-phases/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateProjectPhase>,
) -> AppResult<Json<ProjectPhase>> {
    input
        .validate()
        .map_err(|e| AppError::validation("project phase", e))?;
    let phase = state
        .store
        .update_phase(id, input)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectPhase",
            id,
        }))?;
    Ok(Json(phase))
}

/// DELETE /api/project-phases/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.store.delete_phase(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectPhase",
            id,
        }))
    }
}
