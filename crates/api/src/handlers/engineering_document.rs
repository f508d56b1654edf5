//! Handlers for the `/api/engineering` resource (engineering documents).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pmis_core::error::CoreError;
use pmis_core::types::DbId;
use pmis_store::models::engineering_document::{
    CreateEngineeringDocument, EngineeringDocument, UpdateEngineeringDocument,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::ProjectScope;
use crate::state::AppState;

/// POST /api/engineering
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEngineeringDocument>,
) -> AppResult<(StatusCode, Json<EngineeringDocument>)> {
    input
        .validate()
        .map_err(|e| AppError::validation("document", e))?;
    let doc = state.store.create_document(input);
    Ok((StatusCode::CREATED, Json(doc)))
}

/// GET /api/engineering?projectId={id}
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ProjectScope>,
) -> AppResult<Json<Vec<EngineeringDocument>>> {
    Ok(Json(state.store.documents(scope.project_id)))
}

/// GET /api/engineering/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EngineeringDocument>> {
    let doc = state
        .store
        .document(id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EngineeringDocument",
            id,
        }))?;
    Ok(Json(doc))
}

/// PUT /api/engineering/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateEngineeringDocument>,
) -> AppResult<Json<EngineeringDocument>> {
    input
        .validate()
        .map_err(|e| AppError::validation("document", e))?;
    let doc = state
        .store
        .update_document(id, input)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EngineeringDocument",
            id,
        }))?;
    Ok(Json(doc))
}

/// DELETE /api/engineering/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.store.delete_document(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "EngineeringDocument",
            id,
        }))
    }
}
