// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON backup of pets and their journal.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use pawpal_core::{Memory, PawpalError, PetProfile};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::state::AppState;

pub const BACKUP_VERSION: &str = "1.0";

/// The exported document. `pet` is the pet that was current at export time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backup {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "Utc::now")]
    pub export_date: DateTime<Utc>,
    #[serde(default)]
    pub pet: Option<PetProfile>,
    #[serde(default)]
    pub pets: Vec<PetProfile>,
    #[serde(default)]
    pub memories: Vec<Memory>,
}

fn default_version() -> String {
    BACKUP_VERSION.to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub pets: usize,
    pub memories: usize,
    pub skipped_memories: usize,
}

/// Collects every pet and memory into a pretty-printed JSON document.
pub async fn export(state: &AppState) -> Result<String, PawpalError> {
    let pets = state.list_pets().await?;
    let mut memories = Vec::new();
    for pet in &pets {
        memories.extend(state.memories(&pet.id).await?);
    }
    let backup = Backup {
        version: default_version(),
        export_date: Utc::now(),
        pet: state.current_pet().await?,
        pets,
        memories,
    };
    info!(
        pets = backup.pets.len(),
        memories = backup.memories.len(),
        "backup exported"
    );
    Ok(serde_json::to_string_pretty(&backup)?)
}

/// Restores a backup produced by [`export`].
///
/// Pets are upserted. Memories whose id already exists, or whose pet is
/// unknown, are skipped. The backup's `pet` becomes current.
pub async fn import(state: &AppState, json: &str) -> Result<ImportSummary, PawpalError> {
    let backup: Backup = serde_json::from_str(json)
        .map_err(|e| PawpalError::InvalidInput(format!("Import failed: Invalid JSON ({e})")))?;

    let storage = state.storage();
    let mut pets = backup.pets;
    if let Some(current) = &backup.pet
        && !pets.iter().any(|p| p.id == current.id)
    {
        pets.push(current.clone());
    }

    // Memory ids are unique across pets.
    let mut existing = HashSet::new();
    for stored in storage.list_pets().await? {
        existing.extend(storage.list_memories(&stored.id).await?.into_iter().map(|m| m.id));
    }

    let mut summary = ImportSummary::default();
    let mut known = HashSet::new();
    for pet in &pets {
        if pet.name.trim().is_empty() {
            warn!(pet_id = %pet.id, "skipping unnamed pet in backup");
            continue;
        }
        storage.upsert_pet(pet).await?;
        known.insert(pet.id.clone());
        summary.pets += 1;
    }

    for memory in &backup.memories {
        if !known.contains(&memory.pet_id) || !existing.insert(memory.id.clone()) {
            summary.skipped_memories += 1;
            continue;
        }
        storage.insert_memory(memory).await?;
        summary.memories += 1;
    }

    if let Some(current) = backup.pet.filter(|p| known.contains(&p.id)) {
        state.switch_pet(&current.id).await?;
    }

    info!(
        pets = summary.pets,
        memories = summary.memories,
        skipped = summary.skipped_memories,
        "backup imported"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawpal_test_utils::TestHarness;

    #[tokio::test]
    async fn invalid_json_is_rejected() {
        let h = TestHarness::builder().build().await.unwrap();
        let state = AppState::new(h.storage.clone());
        let err = import(&state, "not json").await.unwrap_err();
        match err {
            PawpalError::InvalidInput(msg) => assert!(msg.starts_with("Import failed: Invalid JSON")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn export_has_version_and_current_pet() {
        let h = TestHarness::builder().build().await.unwrap();
        let state = AppState::new(h.storage.clone());
        let pet = state.create_pet(PetProfile::new("Kiwi", "bird", true)).await.unwrap();

        let json = export(&state).await.unwrap();
        let backup: Backup = serde_json::from_str(&json).unwrap();
        assert_eq!(backup.version, "1.0");
        assert_eq!(backup.pet.map(|p| p.id), Some(pet.id));
        assert_eq!(backup.pets.len(), 1);
    }

    #[tokio::test]
    async fn reimport_skips_existing_memories() {
        let h = TestHarness::builder().build().await.unwrap();
        let state = AppState::new(h.storage.clone());
        let pet = state.create_pet(PetProfile::new("Kiwi", "bird", true)).await.unwrap();
        state.add_memory(&pet.id, "first song", None, None).await.unwrap();

        let json = export(&state).await.unwrap();
        let summary = import(&state, &json).await.unwrap();
        assert_eq!(summary.pets, 1);
        assert_eq!(summary.memories, 0);
        assert_eq!(summary.skipped_memories, 1);
        assert_eq!(state.memories(&pet.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn memory_id_taken_by_another_pet_is_skipped() {
        let h = TestHarness::builder().build().await.unwrap();
        let state = AppState::new(h.storage.clone());
        let kiwi = state.create_pet(PetProfile::new("Kiwi", "bird", true)).await.unwrap();
        state.add_memory(&kiwi.id, "first song", None, None).await.unwrap();
        let mango = state.create_pet(PetProfile::new("Mango", "bird", true)).await.unwrap();

        let mut backup: Backup = serde_json::from_str(&export(&state).await.unwrap()).unwrap();
        backup.memories[0].pet_id = mango.id.clone();
        backup.memories[0].text = "same id, other pet".into();
        let json = serde_json::to_string(&backup).unwrap();

        let summary = import(&state, &json).await.unwrap();
        assert_eq!(summary.pets, 2);
        assert_eq!(summary.memories, 0);
        assert_eq!(summary.skipped_memories, 1);
        assert_eq!(state.memories(&kiwi.id).await.unwrap()[0].text, "first song");
        assert!(state.memories(&mango.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn minimal_document_is_accepted() {
        let h = TestHarness::builder().build().await.unwrap();
        let state = AppState::new(h.storage.clone());
        let summary = import(&state, "{}").await.unwrap();
        assert_eq!(summary, ImportSummary::default());
    }
}
