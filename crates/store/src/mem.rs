//! In-memory store: one [`Table`] per entity type behind a single lock.
//!
//! Ids are handed out by a per-table monotonically increasing counter and
//! are never reused, even after a delete. Reads return clones; the lock is
//! never held across an await point (all operations are synchronous).
//!
//! Uniqueness is enforced at create time for the fields the data model
//! declares unique: `username`, `email`, `orderNumber`, `requestNumber`.
//! Duplicates surface as [`CoreError::Conflict`]. Updates do not re-check.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use pmis_core::error::CoreError;
use pmis_core::types::DbId;

use crate::models::dashboard::DashboardStats;
use crate::models::engineering_document::{
    CreateEngineeringDocument, EngineeringDocument, UpdateEngineeringDocument,
};
use crate::models::imported_file::{
    CreateImportedFile, ImportStatus, ImportedFile, UpdateImportedFile,
};
use crate::models::notification::{CreateNotification, Notification};
use crate::models::procurement_order::{
    CreateProcurementOrder, ProcurementOrder, UpdateProcurementOrder,
};
use crate::models::procurement_request::{
    CreateProcurementRequest, ProcurementRequest, UpdateProcurementRequest,
};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::project_phase::{CreateProjectPhase, ProjectPhase, UpdateProjectPhase};
use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::models::user::{CreateUser, User};

/// A single entity table: ordered rows plus the next id to hand out.
///
/// `BTreeMap` keeps iteration in id order, which equals insertion order
/// because ids only ever increase.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<DbId, T>,
    next_id: DbId,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Insert a row built from the id this table assigns to it.
    fn insert_with(&mut self, build: impl FnOnce(DbId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn list_where(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| pred(row)).cloned().collect()
    }

    fn any(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.rows.values().any(|row| pred(row))
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| pred(row)).cloned()
    }

    /// Apply a merge function to the row, returning the updated value.
    fn update_with(&mut self, id: DbId, merge: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        merge(row);
        Some(row.clone())
    }

    fn remove(&mut self, id: DbId) -> bool {
        self.rows.remove(&id).is_some()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug)]
struct Tables {
    users: Table<User>,
    projects: Table<Project>,
    tasks: Table<Task>,
    orders: Table<ProcurementOrder>,
    requests: Table<ProcurementRequest>,
    phases: Table<ProjectPhase>,
    documents: Table<EngineeringDocument>,
    imported_files: Table<ImportedFile>,
    notifications: Table<Notification>,
}

/// The in-memory access layer.
///
/// Construct one per process (or per test) and share it via `Arc`. All
/// state is lost on drop; the only seeded record is the default admin user.
#[derive(Debug)]
pub struct MemStore {
    inner: RwLock<Tables>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    /// Create an empty store seeded with the default admin user (id 1).
    pub fn new() -> Self {
        let store = Self {
            inner: RwLock::new(Tables {
                users: Table::new(),
                projects: Table::new(),
                tasks: Table::new(),
                orders: Table::new(),
                requests: Table::new(),
                phases: Table::new(),
                documents: Table::new(),
                imported_files: Table::new(),
                notifications: Table::new(),
            }),
        };
        store.seed_admin();
        store
    }

    fn seed_admin(&self) {
        let mut tables = self.write();
        tables.users.insert_with(|id| User {
            id,
            username: "admin".to_string(),
            password: "admin123".to_string(),
            email: "admin@pmis.local".to_string(),
            full_name: "Administrator".to_string(),
            role: "admin".to_string(),
            avatar: None,
            created_at: Utc::now(),
        });
        tracing::debug!("seeded default admin user");
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    // ── Users ────────────────────────────────────────────────────────

    pub fn create_user(&self, input: CreateUser) -> Result<User, CoreError> {
        let mut tables = self.write();
        if tables.users.any(|u| u.username == input.username) {
            return Err(CoreError::Conflict(format!(
                "username '{}' is already taken",
                input.username
            )));
        }
        if tables.users.any(|u| u.email == input.email) {
            return Err(CoreError::Conflict(format!(
                "email '{}' is already registered",
                input.email
            )));
        }
        Ok(tables.users.insert_with(|id| User {
            id,
            username: input.username.clone(),
            password: input.password.clone(),
            email: input.email.clone(),
            full_name: input.full_name.clone(),
            role: input.role.clone(),
            avatar: input.avatar.clone(),
            created_at: Utc::now(),
        }))
    }

    pub fn user(&self, id: DbId) -> Option<User> {
        self.read().users.get(id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.read().users.find(|u| u.username == username)
    }

    pub fn user_count(&self) -> usize {
        self.read().users.len()
    }

    // ── Projects ─────────────────────────────────────────────────────

    pub fn create_project(&self, input: CreateProject) -> Project {
        self.write().projects.insert_with(|id| Project {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            status: input.status,
            progress: input.progress,
            budget: input.budget.clone(),
            due_date: input.due_date,
            start_date: input.start_date,
            created_by: input.created_by,
            category: input.category.clone(),
            priority: input.priority.clone(),
            objectives: input.objectives.clone(),
            stakeholders: input.stakeholders.clone(),
            milestones: input.milestones.clone(),
            requirements: input.requirements.clone(),
            risk_assessment: input.risk_assessment.clone(),
            created_at: Utc::now(),
        })
    }

    pub fn project(&self, id: DbId) -> Option<Project> {
        self.read().projects.get(id)
    }

    pub fn projects(&self) -> Vec<Project> {
        self.read().projects.list()
    }

    pub fn update_project(&self, id: DbId, patch: UpdateProject) -> Option<Project> {
        self.write().projects.update_with(id, |p| patch.apply(p))
    }

    pub fn delete_project(&self, id: DbId) -> bool {
        self.write().projects.remove(id)
    }

    // ── Tasks ────────────────────────────────────────────────────────

    pub fn create_task(&self, input: CreateTask) -> Task {
        self.write().tasks.insert_with(|id| Task {
            id,
            project_id: input.project_id,
            title: input.title.clone(),
            description: input.description.clone(),
            status: input.status,
            assigned_to: input.assigned_to,
            due_date: input.due_date,
            priority: input.priority,
            created_at: Utc::now(),
        })
    }

    pub fn task(&self, id: DbId) -> Option<Task> {
        self.read().tasks.get(id)
    }

    pub fn tasks(&self, project_id: Option<DbId>) -> Vec<Task> {
        match project_id {
            Some(pid) => self.read().tasks.list_where(|t| t.project_id == Some(pid)),
            None => self.read().tasks.list(),
        }
    }

    pub fn update_task(&self, id: DbId, patch: UpdateTask) -> Option<Task> {
        self.write().tasks.update_with(id, |t| patch.apply(t))
    }

    pub fn delete_task(&self, id: DbId) -> bool {
        self.write().tasks.remove(id)
    }

    // ── Procurement orders ───────────────────────────────────────────

    pub fn create_order(
        &self,
        input: CreateProcurementOrder,
    ) -> Result<ProcurementOrder, CoreError> {
        let mut tables = self.write();
        if tables.orders.any(|o| o.order_number == input.order_number) {
            return Err(CoreError::Conflict(format!(
                "order number '{}' already exists",
                input.order_number
            )));
        }
        Ok(tables.orders.insert_with(|id| ProcurementOrder {
            id,
            project_id: input.project_id,
            vendor_name: input.vendor_name.clone(),
            order_number: input.order_number.clone(),
            description: input.description.clone(),
            amount: input.amount.clone(),
            status: input.status,
            order_date: input.order_date,
            expected_delivery: input.expected_delivery,
            created_at: Utc::now(),
        }))
    }

    pub fn order(&self, id: DbId) -> Option<ProcurementOrder> {
        self.read().orders.get(id)
    }

    pub fn orders(&self, project_id: Option<DbId>) -> Vec<ProcurementOrder> {
        match project_id {
            Some(pid) => self.read().orders.list_where(|o| o.project_id == Some(pid)),
            None => self.read().orders.list(),
        }
    }

    pub fn update_order(
        &self,
        id: DbId,
        patch: UpdateProcurementOrder,
    ) -> Option<ProcurementOrder> {
        self.write().orders.update_with(id, |o| patch.apply(o))
    }

    pub fn delete_order(&self, id: DbId) -> bool {
        self.write().orders.remove(id)
    }

    // ── Procurement requests ─────────────────────────────────────────

    pub fn create_request(
        &self,
        input: CreateProcurementRequest,
    ) -> Result<ProcurementRequest, CoreError> {
        let mut tables = self.write();
        if tables
            .requests
            .any(|r| r.request_number == input.request_number)
        {
            return Err(CoreError::Conflict(format!(
                "request number '{}' already exists",
                input.request_number
            )));
        }
        Ok(tables.requests.insert_with(|id| ProcurementRequest {
            id,
            project_id: input.project_id,
            request_number: input.request_number.clone(),
            item_name: input.item_name.clone(),
            category: input.category.clone(),
            quantity: input.quantity,
            estimated_cost: input.estimated_cost.clone(),
            urgency: input.urgency,
            justification: input.justification.clone(),
            specifications: input.specifications.clone(),
            preferred_vendors: input.preferred_vendors.clone(),
            status: input.status,
            requested_by: input.requested_by,
            approved_by: input.approved_by,
            required_date: input.required_date,
            created_at: Utc::now(),
        }))
    }

    pub fn request(&self, id: DbId) -> Option<ProcurementRequest> {
        self.read().requests.get(id)
    }

    pub fn requests(&self, project_id: Option<DbId>) -> Vec<ProcurementRequest> {
        match project_id {
            Some(pid) => self
                .read()
                .requests
                .list_where(|r| r.project_id == Some(pid)),
            None => self.read().requests.list(),
        }
    }

    pub fn update_request(
        &self,
        id: DbId,
        patch: UpdateProcurementRequest,
    ) -> Option<ProcurementRequest> {
        self.write().requests.update_with(id, |r| patch.apply(r))
    }

    pub fn delete_request(&self, id: DbId) -> bool {
        self.write().requests.remove(id)
    }

    // ── Project phases ───────────────────────────────────────────────

    pub fn create_phase(&self, input: CreateProjectPhase) -> ProjectPhase {
        self.write().phases.insert_with(|id| ProjectPhase {
            id,
            project_id: input.project_id,
            phase_name: input.phase_name.clone(),
            dependencies: input.dependencies.clone(),
            deliverables: input.deliverables.clone(),
            budget: input.budget.clone(),
            progress: input.progress,
            status: input.status.clone(),
            created_at: Utc::now(),
        })
    }

    pub fn phase(&self, id: DbId) -> Option<ProjectPhase> {
        self.read().phases.get(id)
    }

    pub fn phases(&self, project_id: Option<DbId>) -> Vec<ProjectPhase> {
        match project_id {
            Some(pid) => self.read().phases.list_where(|p| p.project_id == Some(pid)),
            None => self.read().phases.list(),
        }
    }

    pub fn update_phase(&self, id: DbId, patch: UpdateProjectPhase) -> Option<ProjectPhase> {
        self.write().phases.update_with(id, |p| patch.apply(p))
    }

    pub fn delete_phase(&self, id: DbId) -> bool {
        self.write().phases.remove(id)
    }

    // ── Engineering documents ────────────────────────────────────────

    pub fn create_document(&self, input: CreateEngineeringDocument) -> EngineeringDocument {
        self.write().documents.insert_with(|id| EngineeringDocument {
            id,
            project_id: input.project_id,
            title: input.title.clone(),
            document_type: input.document_type.clone(),
            version: input.version.clone(),
            file_path: input.file_path.clone(),
            status: input.status,
            created_by: input.created_by,
            created_at: Utc::now(),
        })
    }

    pub fn document(&self, id: DbId) -> Option<EngineeringDocument> {
        self.read().documents.get(id)
    }

    pub fn documents(&self, project_id: Option<DbId>) -> Vec<EngineeringDocument> {
        match project_id {
            Some(pid) => self
                .read()
                .documents
                .list_where(|d| d.project_id == Some(pid)),
            None => self.read().documents.list(),
        }
    }

    pub fn update_document(
        &self,
        id: DbId,
        patch: UpdateEngineeringDocument,
    ) -> Option<EngineeringDocument> {
        self.write().documents.update_with(id, |d| patch.apply(d))
    }

    pub fn delete_document(&self, id: DbId) -> bool {
        self.write().documents.remove(id)
    }

    // ── Imported files ───────────────────────────────────────────────

    pub fn create_imported_file(&self, input: CreateImportedFile) -> ImportedFile {
        self.write().imported_files.insert_with(|id| ImportedFile {
            id,
            file_name: input.file_name.clone(),
            file_type: input.file_type.clone(),
            file_size: input.file_size,
            status: ImportStatus::Processing,
            processed_data: None,
            error_message: None,
            uploaded_by: input.uploaded_by,
            created_at: Utc::now(),
        })
    }

    pub fn imported_file(&self, id: DbId) -> Option<ImportedFile> {
        self.read().imported_files.get(id)
    }

    pub fn imported_files(&self) -> Vec<ImportedFile> {
        self.read().imported_files.list()
    }

    pub fn update_imported_file(
        &self,
        id: DbId,
        patch: UpdateImportedFile,
    ) -> Option<ImportedFile> {
        self.write()
            .imported_files
            .update_with(id, |f| patch.apply(f))
    }

    // ── Notifications ────────────────────────────────────────────────

    pub fn create_notification(&self, input: CreateNotification) -> Notification {
        self.write().notifications.insert_with(|id| Notification {
            id,
            user_id: input.user_id,
            title: input.title.clone(),
            message: input.message.clone(),
            kind: input.kind.clone(),
            read: input.read,
            created_at: Utc::now(),
        })
    }

    pub fn notifications(&self, user_id: DbId) -> Vec<Notification> {
        self.read()
            .notifications
            .list_where(|n| n.user_id == Some(user_id))
    }

    /// Flip the `read` flag. Returns `false` if the notification is absent.
    pub fn mark_notification_read(&self, id: DbId) -> bool {
        self.write()
            .notifications
            .update_with(id, |n| n.read = true)
            .is_some()
    }

    // ── Dashboard ────────────────────────────────────────────────────

    /// Aggregate statistics over the whole store.
    ///
    /// Budgets that are absent or fail to parse count as zero; the
    /// completion rate is 0 when there are no projects.
    pub fn dashboard_stats(&self) -> DashboardStats {
        let tables = self.read();
        let projects = tables.projects.list();

        let active_projects = projects.iter().filter(|p| p.status.is_active()).count();

        let total: f64 = projects
            .iter()
            .map(|p| {
                p.budget
                    .as_deref()
                    .and_then(|b| b.parse::<f64>().ok())
                    .unwrap_or(0.0)
            })
            .sum();

        let completion_rate = if projects.is_empty() {
            0
        } else {
            let mean =
                projects.iter().map(|p| p.progress as f64).sum::<f64>() / projects.len() as f64;
            mean.round() as i64
        };

        DashboardStats {
            active_projects,
            // `+ 0.0` normalizes the `-0.0` that an empty f64 sum yields on
            // Rust >= 1.84, so an empty store formats as "$0.0M" not "$-0.0M".
            total_budget: format!("${:.1}M", (total + 0.0) / 1_000_000.0),
            completion_rate,
            team_members: tables.users.len(),
        }
    }
}
