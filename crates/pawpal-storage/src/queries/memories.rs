// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memory journal operations.

use pawpal_core::{Memory, PawpalError, PetId};
use rusqlite::{Row, params};

use crate::database::{Database, map_tr_err, parse_timestamp};

fn memory_from_row(row: &Row<'_>) -> Result<Memory, rusqlite::Error> {
    let date: String = row.get(5)?;
    Ok(Memory {
        id: row.get(0)?,
        pet_id: PetId(row.get(1)?),
        text: row.get(2)?,
        photo: row.get(3)?,
        video: row.get(4)?,
        date: parse_timestamp(5, &date)?,
        is_chat_message: row.get(6)?,
    })
}

pub async fn insert_memory(db: &Database, memory: &Memory) -> Result<(), PawpalError> {
    let m = memory.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO memories (id, pet_id, text, photo, video, date, is_chat_message)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    m.id,
                    m.pet_id.0,
                    m.text,
                    m.photo,
                    m.video,
                    m.date.to_rfc3339(),
                    m.is_chat_message,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Memories for a pet, most recently added first.
pub async fn list_memories(db: &Database, pet: &PetId) -> Result<Vec<Memory>, PawpalError> {
    let pet_id = pet.0.clone();
    db.connection()
        .call(move |conn| -> Result<Vec<Memory>, rusqlite::Error> {
            let mut stmt = conn.prepare(
                "SELECT id, pet_id, text, photo, video, date, is_chat_message
                 FROM memories WHERE pet_id = ?1 ORDER BY seq DESC",
            )?;
            let rows = stmt.query_map(params![pet_id], memory_from_row)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

pub async fn delete_memory(db: &Database, id: &str) -> Result<bool, PawpalError> {
    let id = id.to_string();
    let removed = db
        .connection()
        .call(move |conn| -> Result<usize, rusqlite::Error> {
            conn.execute("DELETE FROM memories WHERE id = ?1", params![id])
        })
        .await
        .map_err(map_tr_err)?;
    Ok(removed > 0)
}
