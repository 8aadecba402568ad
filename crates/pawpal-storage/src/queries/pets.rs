// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pet profile CRUD operations.

use pawpal_core::{PawpalError, PetId, PetProfile};
use rusqlite::{Row, params};

use crate::database::{Database, map_tr_err, parse_timestamp};

const PET_COLUMNS: &str =
    "id, name, species, breed, traits, habits, is_pawpal, variant, created_at";

fn pet_from_row(row: &Row<'_>) -> Result<PetProfile, rusqlite::Error> {
    let created_at: String = row.get(8)?;
    Ok(PetProfile {
        id: PetId(row.get(0)?),
        name: row.get(1)?,
        species: row.get(2)?,
        breed: row.get(3)?,
        traits: row.get(4)?,
        habits: row.get(5)?,
        is_pawpal: row.get(6)?,
        variant: row.get(7)?,
        created_at: parse_timestamp(8, &created_at)?,
    })
}

/// Insert a pet, or replace every field of an existing one with the same id.
pub async fn upsert_pet(db: &Database, pet: &PetProfile) -> Result<(), PawpalError> {
    let pet = pet.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO pets (id, name, species, breed, traits, habits, is_pawpal, variant, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    species = excluded.species,
                    breed = excluded.breed,
                    traits = excluded.traits,
                    habits = excluded.habits,
                    is_pawpal = excluded.is_pawpal,
                    variant = excluded.variant",
                params![
                    pet.id.0,
                    pet.name,
                    pet.species,
                    pet.breed,
                    pet.traits,
                    pet.habits,
                    pet.is_pawpal,
                    pet.variant,
                    pet.created_at.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

pub async fn get_pet(db: &Database, id: &PetId) -> Result<Option<PetProfile>, PawpalError> {
    let id = id.0.clone();
    db.connection()
        .call(move |conn| -> Result<Option<PetProfile>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!("SELECT {PET_COLUMNS} FROM pets WHERE id = ?1"))?;
            let mut rows = stmt.query_map(params![id], pet_from_row)?;
            rows.next().transpose()
        })
        .await
        .map_err(map_tr_err)
}

/// All pets, oldest first.
pub async fn list_pets(db: &Database) -> Result<Vec<PetProfile>, PawpalError> {
    db.connection()
        .call(|conn| -> Result<Vec<PetProfile>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {PET_COLUMNS} FROM pets ORDER BY created_at ASC, rowid ASC"
            ))?;
            let rows = stmt.query_map([], pet_from_row)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a pet. Turns, memories, care state and schedule cascade.
pub async fn delete_pet(db: &Database, id: &PetId) -> Result<(), PawpalError> {
    let id_str = id.0.clone();
    let removed = db
        .connection()
        .call(move |conn| -> Result<usize, rusqlite::Error> {
            conn.execute("DELETE FROM pets WHERE id = ?1", params![id_str])
        })
        .await
        .map_err(map_tr_err)?;
    if removed == 0 {
        return Err(PawpalError::not_found("pet", id.as_str()));
    }
    Ok(())
}
