//! Deferred processing of uploaded import files.
//!
//! An accepted upload is stored as `processing` and answered immediately;
//! the actual work runs in a spawned task driven by an [`ImportProcessor`].
//! The processor is injected through [`crate::state::AppState`], so tests
//! can substitute an implementation that succeeds or fails deterministically
//! instead of waiting on the wall clock.
//!
//! State machine: `processing -> completed` on success,
//! `processing -> failed` (with `errorMessage`) on processor error.
//! There is no retry and no cancellation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pmis_core::types::DbId;
use pmis_store::models::imported_file::{ImportStatus, ImportedFile, UpdateImportedFile};
use pmis_store::MemStore;
use rand::Rng;

/// Strategy for turning an uploaded file into `processedData`.
#[async_trait]
pub trait ImportProcessor: Send + Sync {
    /// Process one file. `Ok` carries the JSON stored as `processedData`;
    /// `Err` carries the message stored as `errorMessage`.
    async fn process(&self, file: &ImportedFile) -> Result<serde_json::Value, String>;
}

/// Production processor: waits out a fixed delay, then reports a randomized
/// record count. No real parsing takes place.
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ImportProcessor for SimulatedProcessor {
    async fn process(&self, _file: &ImportedFile) -> Result<serde_json::Value, String> {
        tokio::time::sleep(self.delay).await;
        let records: u32 = rand::rng().random_range(1..=100);
        Ok(serde_json::json!({
            "records": records,
            "processed": chrono::Utc::now().to_rfc3339(),
        }))
    }
}

/// Spawn the processing task for a freshly created import record.
pub fn spawn_processing(
    store: Arc<MemStore>,
    processor: Arc<dyn ImportProcessor>,
    file_id: DbId,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let Some(file) = store.imported_file(file_id) else {
            tracing::warn!(file_id, "Import record missing before processing started");
            return;
        };

        let patch = match processor.process(&file).await {
            Ok(data) => {
                tracing::info!(file_id, file_name = %file.file_name, "Import processing completed");
                UpdateImportedFile {
                    status: Some(ImportStatus::Completed),
                    processed_data: Some(data),
                    error_message: None,
                }
            }
            Err(message) => {
                tracing::warn!(file_id, file_name = %file.file_name, error = %message, "Import processing failed");
                UpdateImportedFile {
                    status: Some(ImportStatus::Failed),
                    processed_data: None,
                    error_message: Some(message),
                }
            }
        };

        if store.update_imported_file(file_id, patch).is_none() {
            tracing::warn!(file_id, "Import record missing at completion");
        }
    })
}
