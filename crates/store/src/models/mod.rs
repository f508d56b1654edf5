//! Entity models and insert/patch DTOs.
//!
//! All wire payloads are camelCase JSON. Enumerated status fields are Rust
//! enums with kebab-case serde renames, so an out-of-range value fails
//! deserialization before it ever reaches the store.

pub mod dashboard;
pub mod engineering_document;
pub mod imported_file;
pub mod notification;
pub mod procurement_order;
pub mod procurement_request;
pub mod project;
pub mod project_phase;
pub mod task;
pub mod user;
