//! HTTP handlers, one module per resource.

pub mod dashboard;
pub mod engineering_document;
pub mod import;
pub mod notification;
pub mod procurement_order;
pub mod procurement_request;
pub mod project;
pub mod project_phase;
pub mod task;

use pmis_core::types::DbId;
use serde::Deserialize;

/// There is no authenticated-user concept; everything that needs a user
/// identity (notifications, upload attribution) is scoped to the seeded
/// admin account.
pub const DEFAULT_USER_ID: DbId = 1;

/// Query parameters for list endpoints that support project scoping.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScope {
    pub project_id: Option<DbId>,
}
