//! Route tree construction.

pub mod dashboard;
pub mod engineering;
pub mod health;
pub mod import;
pub mod notifications;
pub mod procurement;
pub mod procurement_requests;
pub mod project_phases;
pub mod projects;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /dashboard/stats               GET
/// /projects                      GET, POST
/// /projects/{id}                 GET, PUT, DELETE
/// /tasks                         GET (?projectId=), POST
/// /tasks/{id}                    GET, PUT, DELETE
/// /procurement                   GET (?projectId=), POST
/// /procurement/{id}              GET, PUT, DELETE
/// /procurement-requests          GET (?projectId=), POST
/// /procurement-requests/{id}     GET, PUT, DELETE
/// /project-phases                GET (?projectId=), POST
/// /project-phases/{id}           GET, PUT, DELETE
/// /engineering                   GET (?projectId=), POST
/// /engineering/{id}              GET, PUT, DELETE
/// /import                        GET, POST (multipart)
/// /import/{id}                   GET
/// /notifications                 GET, POST
/// /notifications/{id}/read       PUT
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dashboard", dashboard::router())
        .nest("/projects", projects::router())
        .nest("/tasks", tasks::router())
        .nest("/procurement", procurement::router())
        .nest("/procurement-requests", procurement_requests::router())
        .nest("/project-phases", project_phases::router())
        .nest("/engineering", engineering::router())
        .nest("/import", import::router())
        .nest("/notifications", notifications::router())
}
