// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter trait for persistence backends (SQLite, etc.).

use async_trait::async_trait;

use crate::error::PawpalError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{ConversationTurn, FeedingTime, Memory, PetId, PetProfile};

/// Adapter for storage and persistence backends.
///
/// Holds pet profiles, per-pet conversation logs, memories, feeding
/// schedules, the serialized care state, and a small settings table.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the storage backend (migrations, connection, etc.).
    async fn initialize(&self) -> Result<(), PawpalError>;

    /// Closes the storage backend, flushing pending writes and releasing connections.
    async fn close(&self) -> Result<(), PawpalError>;

    // --- Pets ---

    /// Inserts or replaces a pet profile.
    async fn upsert_pet(&self, pet: &PetProfile) -> Result<(), PawpalError>;
    async fn get_pet(&self, id: &PetId) -> Result<Option<PetProfile>, PawpalError>;
    /// Lists pets, oldest first.
    async fn list_pets(&self) -> Result<Vec<PetProfile>, PawpalError>;
    /// Deletes a pet and everything attached to it.
    async fn delete_pet(&self, id: &PetId) -> Result<(), PawpalError>;

    // --- Conversation ---

    async fn append_turn(&self, pet: &PetId, turn: &ConversationTurn) -> Result<(), PawpalError>;
    /// Returns turns in creation order. With `limit`, only the newest `limit` turns.
    async fn list_turns(
        &self,
        pet: &PetId,
        limit: Option<i64>,
    ) -> Result<Vec<ConversationTurn>, PawpalError>;

    // --- Memories ---

    async fn insert_memory(&self, memory: &Memory) -> Result<(), PawpalError>;
    /// Lists memories newest first.
    async fn list_memories(&self, pet: &PetId) -> Result<Vec<Memory>, PawpalError>;
    /// Returns `true` if a memory was removed.
    async fn delete_memory(&self, id: &str) -> Result<bool, PawpalError>;

    // --- Care state ---

    /// Stores the serialized care snapshot for a pet.
    async fn save_care_state(&self, pet: &PetId, json: &str) -> Result<(), PawpalError>;
    async fn load_care_state(&self, pet: &PetId) -> Result<Option<String>, PawpalError>;

    async fn save_feeding_schedule(
        &self,
        pet: &PetId,
        times: &[FeedingTime],
    ) -> Result<(), PawpalError>;
    async fn load_feeding_schedule(&self, pet: &PetId) -> Result<Vec<FeedingTime>, PawpalError>;

    // --- Settings ---

    async fn get_setting(&self, key: &str) -> Result<Option<String>, PawpalError>;
    async fn set_setting(&self, key: &str, value: &str) -> Result<(), PawpalError>;
    async fn delete_setting(&self, key: &str) -> Result<(), PawpalError>;

    /// Removes every pet, turn, memory, schedule, care state and setting.
    async fn clear_all(&self) -> Result<(), PawpalError>;
}
