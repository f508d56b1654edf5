//! Procurement order entity model and DTOs.

use pmis_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Approved,
    Ordered,
    Delivered,
    Cancelled,
}

/// A stored procurement order. `order_number` is unique across orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementOrder {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub vendor_name: String,
    pub order_number: String,
    pub description: Option<String>,
    pub amount: String,
    pub status: OrderStatus,
    pub order_date: Option<Timestamp>,
    pub expected_delivery: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a procurement order.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcurementOrder {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub vendor_name: String,
    #[validate(length(min = 1))]
    pub order_number: String,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub amount: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub order_date: Option<Timestamp>,
    pub expected_delivery: Option<Timestamp>,
}

/// DTO for updating a procurement order. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcurementOrder {
    pub project_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub vendor_name: Option<String>,
    #[validate(length(min = 1))]
    pub order_number: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub status: Option<OrderStatus>,
    pub order_date: Option<Timestamp>,
    pub expected_delivery: Option<Timestamp>,
}

impl UpdateProcurementOrder {
    /// Shallow-merge the supplied fields into an existing record.
    pub fn apply(self, order: &mut ProcurementOrder) {
        if let Some(project_id) = self.project_id {
            order.project_id = Some(project_id);
        }
        if let Some(vendor_name) = self.vendor_name {
            order.vendor_name = vendor_name;
        }
        if let Some(order_number) = self.order_number {
            order.order_number = order_number;
        }
        if let Some(description) = self.description {
            order.description = Some(description);
        }
        if let Some(amount) = self.amount {
            order.amount = amount;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(order_date) = self.order_date {
            order.order_date = Some(order_date);
        }
        if let Some(expected_delivery) = self.expected_delivery {
            order.expected_delivery = Some(expected_delivery);
        }
    }
}
