//! Handlers for the `/api/import` resource (file imports).
//!
//! The upload handler accepts a single `file` field from a multipart body,
//! stores a `processing` record, answers 201 immediately, and hands the
//! record to the background import pipeline. Disallowed content types are
//! rejected with an explicit 400 naming the offending type.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use pmis_core::error::CoreError;
use pmis_core::types::DbId;
use pmis_store::models::imported_file::{CreateImportedFile, ImportedFile};

use crate::background::import::spawn_processing;
use crate::error::{AppError, AppResult};
use crate::handlers::DEFAULT_USER_ID;
use crate::state::AppState;

/// Upload size cap, enforced both by the route's body limit and an explicit
/// check on the received field.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Content types the importer accepts: CSV, legacy and modern Excel, PDF.
const ALLOWED_CONTENT_TYPES: [&str; 4] = [
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/pdf",
];

/// POST /api/import
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ImportedFile>)> {
    let mut accepted: Option<CreateImportedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_default();

        if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Unsupported file type: '{content_type}'. Accepted types: CSV, Excel, PDF"
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file field: {e}")))?;

        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::BadRequest(
                "File exceeds the 50MB upload limit".to_string(),
            ));
        }

        accepted = Some(CreateImportedFile {
            file_name,
            file_type: content_type,
            file_size: data.len() as i64,
            uploaded_by: Some(DEFAULT_USER_ID),
        });
        break;
    }

    let Some(input) = accepted else {
        return Err(AppError::BadRequest("No file uploaded".to_string()));
    };

    let file = state.store.create_imported_file(input);
    tracing::info!(file_id = file.id, file_name = %file.file_name, "Accepted file for import");

    spawn_processing(
        Arc::clone(&state.store),
        Arc::clone(&state.import_processor),
        file.id,
    );

    Ok((StatusCode::CREATED, Json(file)))
}

/// GET /api/import
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ImportedFile>>> {
    Ok(Json(state.store.imported_files()))
}

/// GET /api/import/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ImportedFile>> {
    let file = state
        .store
        .imported_file(id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ImportedFile",
            id,
        }))?;
    Ok(Json(file))
}
