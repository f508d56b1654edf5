//! Route definitions for the `/procurement-requests` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::procurement_request;
use crate::state::AppState;

/// Routes mounted at `/procurement-requests`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(procurement_request::list).post(procurement_request::create),
        )
        .route(
            "/{id}",
            get(procurement_request::get_by_id)
                .put(procurement_request::update)
                .delete(procurement_request::delete),
        )
}
