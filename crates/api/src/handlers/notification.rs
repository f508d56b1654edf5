//! Handlers for the `/api/notifications` resource.
//!
//! Listing is always scoped to the default user; there is no
//! authenticated-user concept in this system.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pmis_core::error::CoreError;
use pmis_core::types::DbId;
use pmis_store::models::notification::{CreateNotification, Notification};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::DEFAULT_USER_ID;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Notification>>> {
    Ok(Json(state.store.notifications(DEFAULT_USER_ID)))
}

/// POST /api/notifications
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNotification>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    input
        .validate()
        .map_err(|e| AppError::validation("notification", e))?;
    let notification = state.store.create_notification(input);
    Ok((StatusCode::CREATED, Json(notification)))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if state.store.mark_notification_read(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))
    }
}
