//! Engineering document entity model and DTOs.

use pmis_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Review,
    Approved,
    Rejected,
}

/// A stored engineering document record (metadata only; file content lives
/// elsewhere).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineeringDocument {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub title: String,
    pub document_type: String,
    pub version: String,
    pub file_path: Option<String>,
    pub status: DocumentStatus,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating an engineering document.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEngineeringDocument {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub document_type: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub file_path: Option<String>,
    #[serde(default)]
    pub status: DocumentStatus,
    pub created_by: Option<DbId>,
}

/// DTO for updating an engineering document. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEngineeringDocument {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub document_type: Option<String>,
    pub version: Option<String>,
    pub file_path: Option<String>,
    pub status: Option<DocumentStatus>,
    pub created_by: Option<DbId>,
}

impl UpdateEngineeringDocument {
    /// Shallow-merge the supplied fields into an existing record.
    pub fn apply(self, doc: &mut EngineeringDocument) {
        if let Some(project_id) = self.project_id {
            doc.project_id = Some(project_id);
        }
        if let Some(title) = self.title {
            doc.title = title;
        }
        if let Some(document_type) = self.document_type {
            doc.document_type = document_type;
        }
        if let Some(version) = self.version {
            doc.version = version;
        }
        if let Some(file_path) = self.file_path {
            doc.file_path = Some(file_path);
        }
        if let Some(status) = self.status {
            doc.status = status;
        }
        if let Some(created_by) = self.created_by {
            doc.created_by = Some(created_by);
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}
