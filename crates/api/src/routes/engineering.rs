//! Route definitions for the `/engineering` resource (documents).

use axum::routing::get;
use axum::Router;

use crate::handlers::engineering_document;
use crate::state::AppState;

/// Routes mounted at `/engineering`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(engineering_document::list).post(engineering_document::create),
        )
        .route(
            "/{id}",
            get(engineering_document::get_by_id)
                .put(engineering_document::update)
                .delete(engineering_document::delete),
        )
}
