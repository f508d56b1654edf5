//! Procurement request entity model and DTOs.

use pmis_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
    Rejected,
}

/// A stored procurement request. `request_number` is unique across requests.
///
/// `specifications` is an arbitrary JSON map supplied by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRequest {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub request_number: String,
    pub item_name: String,
    pub category: String,
    pub quantity: i32,
    pub estimated_cost: Option<String>,
    pub urgency: Urgency,
    pub justification: Option<String>,
    pub specifications: Option<serde_json::Value>,
    pub preferred_vendors: Option<Vec<String>>,
    pub status: RequestStatus,
    pub requested_by: Option<DbId>,
    pub approved_by: Option<DbId>,
    pub required_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a procurement request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcurementRequest {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub request_number: String,
    #[validate(length(min = 1))]
    pub item_name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub estimated_cost: Option<String>,
    #[serde(default)]
    pub urgency: Urgency,
    pub justification: Option<String>,
    pub specifications: Option<serde_json::Value>,
    pub preferred_vendors: Option<Vec<String>>,
    #[serde(default)]
    pub status: RequestStatus,
    pub requested_by: Option<DbId>,
    pub approved_by: Option<DbId>,
    pub required_date: Option<Timestamp>,
}

/// DTO for updating a procurement request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcurementRequest {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub request_number: Option<String>,
    #[validate(length(min = 1))]
    pub item_name: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
    pub estimated_cost: Option<String>,
    pub urgency: Option<Urgency>,
    pub justification: Option<String>,
    pub specifications: Option<serde_json::Value>,
    pub preferred_vendors: Option<Vec<String>>,
    pub status: Option<RequestStatus>,
    pub requested_by: Option<DbId>,
    pub approved_by: Option<DbId>,
    pub required_date: Option<Timestamp>,
}

impl UpdateProcurementRequest {
    /// Shallow-merge the supplied fields into an existing record.
    pub fn apply(self, request: &mut ProcurementRequest) {
        if let Some(project_id) = self.project_id {
            request.project_id = Some(project_id);
        }
        if let Some(request_number) = self.request_number {
            request.request_number = request_number;
        }
        if let Some(item_name) = self.item_name {
            request.item_name = item_name;
        }
        if let Some(category) = self.category {
            request.category = category;
        }
        if let Some(quantity) = self.quantity {
            request.quantity = quantity;
        }
        if let Some(estimated_cost) = self.estimated_cost {
            request.estimated_cost = Some(estimated_cost);
        }
        if let Some(urgency) = self.urgency {
            request.urgency = urgency;
        }
        if let Some(justification) = self.justification {
            request.justification = Some(justification);
        }
        if let Some(specifications) = self.specifications {
            request.specifications = Some(specifications);
        }
        if let Some(preferred_vendors) = self.preferred_vendors {
            request.preferred_vendors = Some(preferred_vendors);
        }
        if let Some(status) = self.status {
            request.status = status;
        }
        if let Some(requested_by) = self.requested_by {
            request.requested_by = Some(requested_by);
        }
        if let Some(approved_by) = self.approved_by {
            request.approved_by = Some(approved_by);
        }
        if let Some(required_date) = self.required_date {
            request.required_date = Some(required_date);
        }
    }
}
