//! User entity model and DTOs.

use pmis_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub avatar: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a user. `username` and `email` must be unique.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    #[serde(default = "default_role")]
    pub role: String,
    pub avatar: Option<String>,
}

fn default_role() -> String {
    "user".to_string()
}
