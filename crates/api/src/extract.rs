//! Request extractors with project-specific rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor that rejects malformed bodies with a 400 instead of
/// axum's default 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "Rejected request body");
        AppError::BadRequest("Invalid request body".to_string())
    }
}
