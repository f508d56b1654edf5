//! Task entity model and DTOs.

use pmis_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// A stored task, optionally scoped to a project and assigned to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub assigned_to: Option<DbId>,
    pub due_date: Option<Timestamp>,
    pub priority: TaskPriority,
    pub created_at: Timestamp,
}

/// DTO for creating a task.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    pub assigned_to: Option<DbId>,
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub priority: TaskPriority,
}

/// DTO for updating a task. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<DbId>,
    pub due_date: Option<Timestamp>,
    pub priority: Option<TaskPriority>,
}

impl UpdateTask {
    /// Shallow-merge the supplied fields into an existing record.
    pub fn apply(self, task: &mut Task) {
        if let Some(project_id) = self.project_id {
            task.project_id = Some(project_id);
        }
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(assigned_to) = self.assigned_to {
            task.assigned_to = Some(assigned_to);
        }
        if let Some(due_date) = self.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
    }
}
