//! Project phase entity model and DTOs.

use pmis_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored project phase.
///
/// `dependencies` names the phases this one depends on; the store does not
/// resolve or enforce them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPhase {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub phase_name: String,
    pub dependencies: Option<Vec<String>>,
    pub deliverables: Option<String>,
    pub budget: Option<String>,
    pub progress: i32,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a project phase.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectPhase {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub phase_name: String,
    pub dependencies: Option<Vec<String>>,
    pub deliverables: Option<String>,
    pub budget: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 100))]
    pub progress: i32,
    #[serde(default = "default_status")]
    pub status: String,
}

/// DTO for updating a project phase. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectPhase {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub phase_name: Option<String>,
    pub dependencies: Option<Vec<String>>,
    pub deliverables: Option<String>,
    pub budget: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub progress: Option<i32>,
    pub status: Option<String>,
}

impl UpdateProjectPhase {
    /// Shallow-merge the supplied fields into an existing record.
    pub fn apply(self, phase: &mut ProjectPhase) {
        if let Some(project_id) = self.project_id {
            phase.project_id = Some(project_id);
        }
        if let Some(phase_name) = self.phase_name {
            phase.phase_name = phase_name;
        }
        if let Some(dependencies) = self.dependencies {
            phase.dependencies = Some(dependencies);
        }
        if let Some(deliverables) = self.deliverables {
            phase.deliverables = Some(deliverables);
        }
        if let Some(budget) = self.budget {
            phase.budget = Some(budget);
        }
        if let Some(progress) = self.progress {
            phase.progress = progress;
        }
        if let Some(status) = self.status {
            phase.status = status;
        }
    }
}

fn default_status() -> String {
    "pending".to_string()
}
