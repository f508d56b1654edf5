//! Route definitions for the `/import` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::import;
use crate::state::AppState;

/// Routes mounted at `/import`.
///
/// The upload route carries its own body limit; 1 KiB of headroom covers
/// multipart framing around a maximum-size file.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(import::list).post(import::upload))
        .route("/{id}", get(import::get_by_id))
        .layer(DefaultBodyLimit::max(import::MAX_UPLOAD_BYTES + 1024))
}
