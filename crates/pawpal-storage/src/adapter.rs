// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the StorageAdapter trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use pawpal_config::model::StorageConfig;
use pawpal_core::{
    AdapterType, ConversationTurn, FeedingTime, HealthStatus, Memory, PawpalError, PetId,
    PetProfile, PluginAdapter, StorageAdapter,
};

use crate::database::{Database, map_tr_err};
use crate::queries;

/// SQLite-backed storage adapter.
///
/// The database is opened on the first call to [`StorageAdapter::initialize`]
/// and every query is delegated to the typed modules in [`crate::queries`].
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    fn db(&self) -> Result<&Database, PawpalError> {
        self.db.get().ok_or_else(|| PawpalError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, PawpalError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), PawpalError> {
        if let Some(db) = self.db.get() {
            db.close().await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    async fn initialize(&self) -> Result<(), PawpalError> {
        let db = Database::open_with(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| PawpalError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), PawpalError> {
        self.db()?.close().await
    }

    // --- Pets ---

    async fn upsert_pet(&self, pet: &PetProfile) -> Result<(), PawpalError> {
        queries::pets::upsert_pet(self.db()?, pet).await
    }

    async fn get_pet(&self, id: &PetId) -> Result<Option<PetProfile>, PawpalError> {
        queries::pets::get_pet(self.db()?, id).await
    }

    async fn list_pets(&self) -> Result<Vec<PetProfile>, PawpalError> {
        queries::pets::list_pets(self.db()?).await
    }

    async fn delete_pet(&self, id: &PetId) -> Result<(), PawpalError> {
        queries::pets::delete_pet(self.db()?, id).await
    }

    // --- Conversation ---

    async fn append_turn(&self, pet: &PetId, turn: &ConversationTurn) -> Result<(), PawpalError> {
        queries::turns::append_turn(self.db()?, pet, turn).await
    }

    async fn list_turns(
        &self,
        pet: &PetId,
        limit: Option<i64>,
    ) -> Result<Vec<ConversationTurn>, PawpalError> {
        queries::turns::list_turns(self.db()?, pet, limit).await
    }

    // --- Memories ---

    async fn insert_memory(&self, memory: &Memory) -> Result<(), PawpalError> {
        queries::memories::insert_memory(self.db()?, memory).await
    }

    async fn list_memories(&self, pet: &PetId) -> Result<Vec<Memory>, PawpalError> {
        queries::memories::list_memories(self.db()?, pet).await
    }

    async fn delete_memory(&self, id: &str) -> Result<bool, PawpalError> {
        queries::memories::delete_memory(self.db()?, id).await
    }

    // --- Care state ---

    async fn save_care_state(&self, pet: &PetId, json: &str) -> Result<(), PawpalError> {
        queries::care::save_care_state(self.db()?, pet, json).await
    }

    async fn load_care_state(&self, pet: &PetId) -> Result<Option<String>, PawpalError> {
        queries::care::load_care_state(self.db()?, pet).await
    }

    async fn save_feeding_schedule(
        &self,
        pet: &PetId,
        times: &[FeedingTime],
    ) -> Result<(), PawpalError> {
        queries::care::save_feeding_schedule(self.db()?, pet, times).await
    }

    async fn load_feeding_schedule(&self, pet: &PetId) -> Result<Vec<FeedingTime>, PawpalError> {
        queries::care::load_feeding_schedule(self.db()?, pet).await
    }

    // --- Settings ---

    async fn get_setting(&self, key: &str) -> Result<Option<String>, PawpalError> {
        queries::settings::get_setting(self.db()?, key).await
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<(), PawpalError> {
        queries::settings::set_setting(self.db()?, key, value).await
    }

    async fn delete_setting(&self, key: &str) -> Result<(), PawpalError> {
        queries::settings::delete_setting(self.db()?, key).await
    }

    async fn clear_all(&self) -> Result<(), PawpalError> {
        queries::settings::clear_all(self.db()?).await
    }
}
