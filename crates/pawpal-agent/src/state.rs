// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application state: pets, the current pet, onboarding, and the journal.
//!
//! Everything lives in storage; `AppState` only carries the handle and the
//! setting keys, so it is cheap to clone and pass by reference.

use std::sync::Arc;

use pawpal_core::{Memory, PawpalError, PetId, PetProfile, StorageAdapter};
use tracing::{debug, info, warn};

const CURRENT_PET_KEY: &str = "current_pet";
const ONBOARDED_KEY: &str = "onboarding_complete";

#[derive(Clone)]
pub struct AppState {
    storage: Arc<dyn StorageAdapter>,
}

impl AppState {
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<dyn StorageAdapter> {
        &self.storage
    }

    /// Saves a new pet, makes it current, and marks onboarding as done.
    pub async fn create_pet(&self, pet: PetProfile) -> Result<PetProfile, PawpalError> {
        if pet.name.trim().is_empty() {
            return Err(PawpalError::InvalidInput("pet name must not be empty".into()));
        }
        self.storage.upsert_pet(&pet).await?;
        self.storage.set_setting(CURRENT_PET_KEY, pet.id.as_str()).await?;
        self.storage.set_setting(ONBOARDED_KEY, "true").await?;
        info!(pet_id = %pet.id, name = %pet.name, pawpal = pet.is_pawpal, "pet created");
        Ok(pet)
    }

    /// Saves edits to an existing pet.
    pub async fn update_pet(&self, pet: &PetProfile) -> Result<(), PawpalError> {
        if self.storage.get_pet(&pet.id).await?.is_none() {
            return Err(PawpalError::not_found("pet", pet.id.as_str()));
        }
        self.storage.upsert_pet(pet).await
    }

    pub async fn list_pets(&self) -> Result<Vec<PetProfile>, PawpalError> {
        self.storage.list_pets().await
    }

    /// The current pet, if one is selected and still exists.
    pub async fn current_pet(&self) -> Result<Option<PetProfile>, PawpalError> {
        let Some(id) = self.storage.get_setting(CURRENT_PET_KEY).await? else {
            return Ok(None);
        };
        let pet = self.storage.get_pet(&PetId(id.clone())).await?;
        if pet.is_none() {
            warn!(pet_id = %id, "current pet no longer exists, clearing selection");
            self.storage.delete_setting(CURRENT_PET_KEY).await?;
        }
        Ok(pet)
    }

    /// Like [`current_pet`](Self::current_pet) but an error when nothing is selected.
    pub async fn require_current_pet(&self) -> Result<PetProfile, PawpalError> {
        self.current_pet()
            .await?
            .ok_or_else(|| PawpalError::not_found("pet", "current"))
    }

    pub async fn switch_pet(&self, id: &PetId) -> Result<PetProfile, PawpalError> {
        let pet = self
            .storage
            .get_pet(id)
            .await?
            .ok_or_else(|| PawpalError::not_found("pet", id.as_str()))?;
        self.storage.set_setting(CURRENT_PET_KEY, id.as_str()).await?;
        debug!(pet_id = %id, "switched current pet");
        Ok(pet)
    }

    /// Deletes a pet with its history and memories.
    ///
    /// When the deleted pet was current, the oldest remaining pet becomes
    /// current, or the selection is cleared.
    pub async fn delete_pet(&self, id: &PetId) -> Result<(), PawpalError> {
        self.storage.delete_pet(id).await?;
        let current = self.storage.get_setting(CURRENT_PET_KEY).await?;
        if current.as_deref() == Some(id.as_str()) {
            match self.storage.list_pets().await?.first() {
                Some(next) => {
                    self.storage.set_setting(CURRENT_PET_KEY, next.id.as_str()).await?;
                    info!(pet_id = %next.id, "current pet deleted, switched to next");
                }
                None => self.storage.delete_setting(CURRENT_PET_KEY).await?,
            }
        }
        info!(pet_id = %id, "pet deleted");
        Ok(())
    }

    pub async fn is_onboarded(&self) -> Result<bool, PawpalError> {
        Ok(self.storage.get_setting(ONBOARDED_KEY).await?.as_deref() == Some("true"))
    }

    /// Adds a journal entry for `pet`.
    pub async fn add_memory(
        &self,
        pet: &PetId,
        text: &str,
        photo: Option<String>,
        video: Option<String>,
    ) -> Result<Memory, PawpalError> {
        let text = text.trim();
        if text.is_empty() && photo.is_none() && video.is_none() {
            return Err(PawpalError::InvalidInput("memory needs text or media".into()));
        }
        let memory = Memory {
            photo,
            video,
            ..Memory::new(pet.clone(), text)
        };
        self.storage.insert_memory(&memory).await?;
        debug!(memory_id = %memory.id, pet_id = %pet, "memory added");
        Ok(memory)
    }

    /// Newest first.
    pub async fn memories(&self, pet: &PetId) -> Result<Vec<Memory>, PawpalError> {
        self.storage.list_memories(pet).await
    }

    /// Removes exactly one memory.
    pub async fn delete_memory(&self, id: &str) -> Result<(), PawpalError> {
        if self.storage.delete_memory(id).await? {
            debug!(memory_id = id, "memory deleted");
            Ok(())
        } else {
            Err(PawpalError::not_found("memory", id))
        }
    }

    /// Wipes every pet, turn, memory, schedule, and setting.
    pub async fn clear_all(&self) -> Result<(), PawpalError> {
        self.storage.clear_all().await?;
        warn!("all data cleared");
        Ok(())
    }
}
