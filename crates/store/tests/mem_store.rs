//! Unit tests for the in-memory access layer.

use assert_matches::assert_matches;
use pmis_core::error::CoreError;
use pmis_store::models::imported_file::{CreateImportedFile, ImportStatus, UpdateImportedFile};
use pmis_store::models::notification::CreateNotification;
use pmis_store::models::procurement_order::CreateProcurementOrder;
use pmis_store::models::procurement_request::CreateProcurementRequest;
use pmis_store::models::project::{CreateProject, ProjectStatus, UpdateProject};
use pmis_store::models::task::{CreateTask, TaskStatus};
use pmis_store::models::user::CreateUser;
use pmis_store::MemStore;

fn project_named(name: &str) -> CreateProject {
    serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
}

fn task_for(project_id: Option<i64>, title: &str) -> CreateTask {
    serde_json::from_value(serde_json::json!({
        "projectId": project_id,
        "title": title,
    }))
    .unwrap()
}

// ---------------------------------------------------------------------------
// Create / get round trips
// ---------------------------------------------------------------------------

#[test]
fn create_then_get_returns_stored_project() {
    let store = MemStore::new();
    let created = store.create_project(project_named("Bridge Retrofit"));

    let fetched = store.project(created.id).unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Bridge Retrofit");
    assert_eq!(fetched.status, ProjectStatus::Planning);
    assert_eq!(fetched.progress, 0);
    assert_eq!(fetched.category, "general");
    assert_eq!(fetched.created_at, created.created_at);
}

#[test]
fn get_missing_id_returns_none() {
    let store = MemStore::new();
    assert!(store.project(9999).is_none());
    assert!(store.task(9999).is_none());
    assert!(store.order(9999).is_none());
}

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

#[test]
fn ids_increase_monotonically_and_are_never_reused() {
    let store = MemStore::new();
    let first = store.create_project(project_named("A"));
    let second = store.create_project(project_named("B"));
    assert_eq!(second.id, first.id + 1);

    assert!(store.delete_project(second.id));
    let third = store.create_project(project_named("C"));
    assert_eq!(third.id, second.id + 1, "deleted ids must not be reused");
}

// ---------------------------------------------------------------------------
// Partial update semantics
// ---------------------------------------------------------------------------

#[test]
fn update_changes_only_supplied_fields() {
    let store = MemStore::new();
    let created = store.create_project(
        serde_json::from_value::<CreateProject>(serde_json::json!({
            "name": "Original",
            "description": "keep me",
            "budget": "500000",
            "progress": 25,
        }))
        .unwrap(),
    );

    let patch = UpdateProject {
        progress: Some(60),
        status: Some(ProjectStatus::InProgress),
        ..Default::default()
    };
    let updated = store.update_project(created.id, patch).unwrap();

    assert_eq!(updated.progress, 60);
    assert_eq!(updated.status, ProjectStatus::InProgress);
    assert_eq!(updated.name, "Original");
    assert_eq!(updated.description.as_deref(), Some("keep me"));
    assert_eq!(updated.budget.as_deref(), Some("500000"));
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn update_missing_id_returns_none() {
    let store = MemStore::new();
    assert!(store.update_project(404, UpdateProject::default()).is_none());
}

#[test]
fn delete_missing_id_returns_false() {
    let store = MemStore::new();
    assert!(!store.delete_project(404));
    assert!(!store.delete_task(404));
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[test]
fn tasks_filter_by_project_id() {
    let store = MemStore::new();
    let p1 = store.create_project(project_named("P1"));
    let p2 = store.create_project(project_named("P2"));

    store.create_task(task_for(Some(p1.id), "t1"));
    store.create_task(task_for(Some(p1.id), "t2"));
    store.create_task(task_for(Some(p2.id), "t3"));
    store.create_task(task_for(None, "unscoped"));

    let scoped = store.tasks(Some(p1.id));
    assert_eq!(scoped.len(), 2);
    assert!(scoped.iter().all(|t| t.project_id == Some(p1.id)));

    assert_eq!(store.tasks(None).len(), 4);
}

#[test]
fn list_preserves_insertion_order() {
    let store = MemStore::new();
    store.create_project(project_named("first"));
    store.create_project(project_named("second"));
    store.create_project(project_named("third"));

    let names: Vec<_> = store.projects().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

#[test]
fn duplicate_order_number_is_a_conflict() {
    let store = MemStore::new();
    let order = |number: &str| -> CreateProcurementOrder {
        serde_json::from_value(serde_json::json!({
            "vendorName": "Acme",
            "orderNumber": number,
            "amount": "1200.00",
        }))
        .unwrap()
    };

    store.create_order(order("PO-001")).unwrap();
    let err = store.create_order(order("PO-001")).unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));

    // The failed create must not have stored anything.
    assert_eq!(store.orders(None).len(), 1);
}

#[test]
fn duplicate_request_number_is_a_conflict() {
    let store = MemStore::new();
    let request = |number: &str| -> CreateProcurementRequest {
        serde_json::from_value(serde_json::json!({
            "requestNumber": number,
            "itemName": "Steel beams",
            "category": "materials",
            "quantity": 10,
        }))
        .unwrap()
    };

    store.create_request(request("PR-001")).unwrap();
    assert_matches!(
        store.create_request(request("PR-001")),
        Err(CoreError::Conflict(_))
    );
}

#[test]
fn duplicate_username_or_email_is_a_conflict() {
    let store = MemStore::new();
    let user = |username: &str, email: &str| -> CreateUser {
        serde_json::from_value(serde_json::json!({
            "username": username,
            "password": "secret",
            "email": email,
            "fullName": "Some One",
        }))
        .unwrap()
    };

    store.create_user(user("alice", "alice@example.com")).unwrap();
    assert_matches!(
        store.create_user(user("alice", "other@example.com")),
        Err(CoreError::Conflict(_))
    );
    assert_matches!(
        store.create_user(user("bob", "alice@example.com")),
        Err(CoreError::Conflict(_))
    );
    // "admin" is seeded.
    assert_matches!(
        store.create_user(user("admin", "fresh@example.com")),
        Err(CoreError::Conflict(_))
    );
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[test]
fn notifications_are_scoped_to_a_user() {
    let store = MemStore::new();
    let for_user = |user_id: i64| -> CreateNotification {
        serde_json::from_value(serde_json::json!({
            "userId": user_id,
            "title": "hello",
            "message": "world",
        }))
        .unwrap()
    };

    store.create_notification(for_user(1));
    store.create_notification(for_user(1));
    store.create_notification(for_user(2));

    assert_eq!(store.notifications(1).len(), 2);
    assert_eq!(store.notifications(2).len(), 1);
    assert!(store.notifications(3).is_empty());
}

#[test]
fn mark_notification_read_flips_the_flag() {
    let store = MemStore::new();
    let created = store.create_notification(
        serde_json::from_value(serde_json::json!({
            "userId": 1,
            "title": "t",
            "message": "m",
        }))
        .unwrap(),
    );
    assert!(!created.read);

    assert!(store.mark_notification_read(created.id));
    assert!(store.notifications(1)[0].read);

    assert!(!store.mark_notification_read(9999));
}

// ---------------------------------------------------------------------------
// Imported files
// ---------------------------------------------------------------------------

#[test]
fn imported_file_starts_processing_and_accepts_completion_patch() {
    let store = MemStore::new();
    let file = store.create_imported_file(CreateImportedFile {
        file_name: "vendors.csv".to_string(),
        file_type: "text/csv".to_string(),
        file_size: 2048,
        uploaded_by: Some(1),
    });
    assert_eq!(file.status, ImportStatus::Processing);
    assert!(file.processed_data.is_none());

    let updated = store
        .update_imported_file(
            file.id,
            UpdateImportedFile {
                status: Some(ImportStatus::Completed),
                processed_data: Some(serde_json::json!({ "records": 42 })),
                error_message: None,
            },
        )
        .unwrap();
    assert_eq!(updated.status, ImportStatus::Completed);
    assert_eq!(updated.processed_data.unwrap()["records"], 42);
    assert_eq!(updated.file_name, "vendors.csv");
}

// ---------------------------------------------------------------------------
// Dashboard stats
// ---------------------------------------------------------------------------

#[test]
fn dashboard_stats_on_empty_store() {
    let store = MemStore::new();
    let stats = store.dashboard_stats();

    assert_eq!(stats.active_projects, 0);
    assert_eq!(stats.total_budget, "$0.0M");
    assert_eq!(stats.completion_rate, 0);
    // The seeded admin user counts as a team member.
    assert_eq!(stats.team_members, 1);
}

#[test]
fn dashboard_stats_sums_budgets_in_millions() {
    let store = MemStore::new();
    for budget in ["2000000", "1000000"] {
        store.create_project(
            serde_json::from_value(serde_json::json!({
                "name": "P",
                "budget": budget,
            }))
            .unwrap(),
        );
    }
    assert_eq!(store.dashboard_stats().total_budget, "$3.0M");
}

#[test]
fn dashboard_stats_averages_progress() {
    let store = MemStore::new();
    for progress in [0, 50, 100] {
        store.create_project(
            serde_json::from_value(serde_json::json!({
                "name": "P",
                "progress": progress,
            }))
            .unwrap(),
        );
    }
    assert_eq!(store.dashboard_stats().completion_rate, 50);
}

#[test]
fn dashboard_stats_treats_unparsable_budget_as_zero() {
    let store = MemStore::new();
    store.create_project(
        serde_json::from_value(serde_json::json!({
            "name": "P",
            "budget": "not-a-number",
        }))
        .unwrap(),
    );
    store.create_project(
        serde_json::from_value(serde_json::json!({
            "name": "Q",
            "budget": "1500000",
        }))
        .unwrap(),
    );
    assert_eq!(store.dashboard_stats().total_budget, "$1.5M");
}

#[test]
fn dashboard_counts_only_planning_and_in_progress_as_active() {
    let store = MemStore::new();
    for status in ["planning", "in-progress", "review", "completed", "cancelled"] {
        store.create_project(
            serde_json::from_value(serde_json::json!({
                "name": "P",
                "status": status,
            }))
            .unwrap(),
        );
    }
    assert_eq!(store.dashboard_stats().active_projects, 2);
}

// ---------------------------------------------------------------------------
// Task status wire format
// ---------------------------------------------------------------------------

#[test]
fn task_status_rejects_unknown_values() {
    let result = serde_json::from_value::<CreateTask>(serde_json::json!({
        "title": "t",
        "status": "on-hold",
    }));
    assert!(result.is_err());

    let task: CreateTask = serde_json::from_value(serde_json::json!({
        "title": "t",
        "status": "in-progress",
    }))
    .unwrap();
    assert_eq!(task.status, TaskStatus::InProgress);
}
