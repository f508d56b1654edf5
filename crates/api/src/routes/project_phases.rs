//! Route definitions for the `/project-phases` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project_phase;
use crate::state::AppState;

/// Routes mounted at `/project-phases`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project_phase::list).post(project_phase::create))
        .route(
            "/{id}",
            get(project_phase::get_by_id)
                .put(project_phase::update)
                .delete(project_phase::delete),
        )
}
