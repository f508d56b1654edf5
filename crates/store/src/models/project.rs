//! Project entity model and DTOs.

use pmis_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    Review,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    /// A project counts toward the dashboard's active total while it is
    /// still being planned or executed.
    pub fn is_active(self) -> bool {
        matches!(self, ProjectStatus::Planning | ProjectStatus::InProgress)
    }
}

/// A stored project.
///
/// `budget` is a decimal string on the wire; the dashboard aggregation
/// treats absent or unparsable values as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub progress: i32,
    pub budget: Option<String>,
    pub due_date: Option<Timestamp>,
    pub start_date: Option<Timestamp>,
    pub created_by: Option<DbId>,
    pub category: String,
    pub priority: String,
    pub objectives: Option<Vec<String>>,
    pub stakeholders: Option<Vec<String>>,
    pub milestones: Option<String>,
    pub requirements: Option<String>,
    pub risk_assessment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    #[validate(range(min = 0, max = 100))]
    pub progress: i32,
    pub budget: Option<String>,
    pub due_date: Option<Timestamp>,
    pub start_date: Option<Timestamp>,
    pub created_by: Option<DbId>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub objectives: Option<Vec<String>>,
    pub stakeholders: Option<Vec<String>>,
    pub milestones: Option<String>,
    pub requirements: Option<String>,
    pub risk_assessment: Option<String>,
}

/// DTO for updating a project. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    #[validate(range(min = 0, max = 100))]
    pub progress: Option<i32>,
    pub budget: Option<String>,
    pub due_date: Option<Timestamp>,
    pub start_date: Option<Timestamp>,
    pub created_by: Option<DbId>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub objectives: Option<Vec<String>>,
    pub stakeholders: Option<Vec<String>>,
    pub milestones: Option<String>,
    pub requirements: Option<String>,
    pub risk_assessment: Option<String>,
}

impl UpdateProject {
    /// Shallow-merge the supplied fields into an existing record.
    pub fn apply(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = Some(description);
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(progress) = self.progress {
            project.progress = progress;
        }
        if let Some(budget) = self.budget {
            project.budget = Some(budget);
        }
        if let Some(due_date) = self.due_date {
            project.due_date = Some(due_date);
        }
        if let Some(start_date) = self.start_date {
            project.start_date = Some(start_date);
        }
        if let Some(created_by) = self.created_by {
            project.created_by = Some(created_by);
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(priority) = self.priority {
            project.priority = priority;
        }
        if let Some(objectives) = self.objectives {
            project.objectives = Some(objectives);
        }
        if let Some(stakeholders) = self.stakeholders {
            project.stakeholders = Some(stakeholders);
        }
        if let Some(milestones) = self.milestones {
            project.milestones = Some(milestones);
        }
        if let Some(requirements) = self.requirements {
            project.requirements = Some(requirements);
        }
        if let Some(risk_assessment) = self.risk_assessment {
            project.risk_assessment = Some(risk_assessment);
        }
    }
}

fn default_category() -> String {
    "general".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}
