//! Route definitions for the `/notifications` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list).post(notification::create))
        .route("/{id}/read", put(notification::mark_read))
}
