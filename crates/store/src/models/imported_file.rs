//! Imported file entity model and DTOs.
//!
//! An imported file starts in `processing` and is moved to `completed` or
//! `failed` by the background import pipeline. There is no retry and no
//! cancellation; the two terminal states are the whole lifecycle.

use pmis_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportStatus {
    #[default]
    Processing,
    Completed,
    Failed,
}

/// A stored file-import record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedFile {
    pub id: DbId,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub status: ImportStatus,
    pub processed_data: Option<serde_json::Value>,
    pub error_message: Option<String>,
    pub uploaded_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating an imported file record. Built by the upload handler,
/// never deserialized from a client body.
#[derive(Debug, Clone)]
pub struct CreateImportedFile {
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub uploaded_by: Option<DbId>,
}

/// Patch applied by the import pipeline when processing finishes.
#[derive(Debug, Clone, Default)]
pub struct UpdateImportedFile {
    pub status: Option<ImportStatus>,
    pub processed_data: Option<serde_json::Value>,
    pub error_message: Option<String>,
}

impl UpdateImportedFile {
    /// Shallow-merge the supplied fields into an existing record.
    pub fn apply(self, file: &mut ImportedFile) {
        if let Some(status) = self.status {
            file.status = status;
        }
        if let Some(processed_data) = self.processed_data {
            file.processed_data = Some(processed_data);
        }
        if let Some(error_message) = self.error_message {
            file.error_message = Some(error_message);
        }
    }
}
