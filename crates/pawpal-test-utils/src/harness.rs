// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for integration testing.
//!
//! `TestHarness` assembles temp SQLite storage, a mock backend and a
//! recording notifier so that higher layers can be driven end to end.

use std::sync::Arc;

use pawpal_config::model::{PawpalConfig, StorageConfig};
use pawpal_core::{PawpalError, StorageAdapter};
use pawpal_storage::SqliteStorage;

use crate::mock_backend::MockBackend;
use crate::mock_notifier::RecordingNotifier;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    responses: Vec<String>,
    failing_backend: bool,
    seed: Option<u64>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            responses: Vec::new(),
            failing_backend: false,
            seed: Some(7),
        }
    }

    /// Set mock backend replies.
    pub fn with_mock_responses(mut self, responses: Vec<String>) -> Self {
        self.responses = responses;
        self
    }

    /// Make the mock backend fail every call.
    pub fn with_failing_backend(mut self) -> Self {
        self.failing_backend = true;
        self
    }

    /// Seed used by the responder's template picker.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub async fn build(self) -> Result<TestHarness, PawpalError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| PawpalError::Storage { source: e.into() })?;
        let db_path = temp_dir.path().join("test.db");

        let storage_config = StorageConfig {
            database_path: db_path.to_string_lossy().to_string(),
            wal_mode: true,
        };
        let storage = SqliteStorage::new(storage_config.clone());
        storage.initialize().await?;
        let storage: Arc<dyn StorageAdapter> = Arc::new(storage);

        let backend = Arc::new(if self.failing_backend {
            MockBackend::failing("mock")
        } else {
            MockBackend::with_responses("mock", self.responses)
        });

        let mut config = PawpalConfig {
            storage: storage_config,
            ..PawpalConfig::default()
        };
        config.responder.seed = self.seed;

        Ok(TestHarness {
            storage,
            backend,
            notifier: Arc::new(RecordingNotifier::new()),
            config,
            _temp_dir: temp_dir,
        })
    }
}

/// A test environment with temp storage and mock adapters.
///
/// The temp directory lives as long as the harness.
pub struct TestHarness {
    pub storage: Arc<dyn StorageAdapter>,
    pub backend: Arc<MockBackend>,
    pub notifier: Arc<RecordingNotifier>,
    pub config: PawpalConfig,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawpal_core::{PetProfile, ResponseBackend};

    #[tokio::test]
    async fn harness_builds_with_working_storage() {
        let harness = TestHarness::builder().build().await.unwrap();
        let pet = PetProfile::new("Rex", "dog", true);
        harness.storage.upsert_pet(&pet).await.unwrap();
        assert_eq!(harness.storage.list_pets().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn harness_backend_uses_queued_replies() {
        let harness = TestHarness::builder()
            .with_mock_responses(vec!["woof".into()])
            .build()
            .await
            .unwrap();
        let reply = harness
            .backend
            .complete(pawpal_core::BackendRequest {
                system_prompt: String::new(),
                history: vec![],
                message: "hi".into(),
            })
            .await
            .unwrap();
        assert_eq!(reply, "woof");
    }
}
