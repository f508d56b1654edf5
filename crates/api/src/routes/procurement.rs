//! Route definitions for the `/procurement` resource (orders).

use axum::routing::get;
use axum::Router;

use crate::handlers::procurement_order;
use crate::state::AppState;

/// Routes mounted at `/procurement`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(procurement_order::list).post(procurement_order::create),
        )
        .route(
            "/{id}",
            get(procurement_order::get_by_id)
                .put(procurement_order::update)
                .delete(procurement_order::delete),
        )
}
