//! Dashboard aggregate types.

use serde::Serialize;

/// Aggregate statistics shown on the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Projects currently in `planning` or `in-progress`.
    pub active_projects: usize,
    /// Sum of all project budgets, formatted as `"$X.XM"`.
    pub total_budget: String,
    /// Mean project progress, rounded to the nearest integer.
    pub completion_rate: i64,
    /// Total number of stored users.
    pub team_members: usize,
}
