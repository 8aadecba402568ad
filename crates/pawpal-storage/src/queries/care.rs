// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Care snapshot and feeding schedule persistence.

use chrono::Utc;
use pawpal_core::{FeedingTime, PawpalError, PetId};
use rusqlite::params;

use crate::database::{Database, map_tr_err};

pub async fn save_care_state(db: &Database, pet: &PetId, json: &str) -> Result<(), PawpalError> {
    let pet_id = pet.0.clone();
    let json = json.to_string();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO care_state (pet_id, snapshot, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(pet_id) DO UPDATE SET
                    snapshot = excluded.snapshot,
                    updated_at = excluded.updated_at",
                params![pet_id, json, Utc::now().to_rfc3339()],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

pub async fn load_care_state(db: &Database, pet: &PetId) -> Result<Option<String>, PawpalError> {
    let pet_id = pet.0.clone();
    db.connection()
        .call(move |conn| -> Result<Option<String>, rusqlite::Error> {
            let mut stmt = conn.prepare("SELECT snapshot FROM care_state WHERE pet_id = ?1")?;
            let mut rows = stmt.query_map(params![pet_id], |row| row.get(0))?;
            rows.next().transpose()
        })
        .await
        .map_err(map_tr_err)
}

/// Replaces the whole schedule for a pet in one transaction.
pub async fn save_feeding_schedule(
    db: &Database,
    pet: &PetId,
    times: &[FeedingTime],
) -> Result<(), PawpalError> {
    let pet_id = pet.0.clone();
    let times = times.to_vec();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM feeding_times WHERE pet_id = ?1", params![pet_id])?;
            for (position, time) in times.iter().enumerate() {
                tx.execute(
                    "INSERT INTO feeding_times (pet_id, position, hour, minute)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![pet_id, position as i64, time.hour, time.minute],
                )?;
            }
            tx.commit()
        })
        .await
        .map_err(map_tr_err)
}

pub async fn load_feeding_schedule(
    db: &Database,
    pet: &PetId,
) -> Result<Vec<FeedingTime>, PawpalError> {
    let pet_id = pet.0.clone();
    db.connection()
        .call(move |conn| -> Result<Vec<FeedingTime>, rusqlite::Error> {
            let mut stmt = conn.prepare(
                "SELECT hour, minute FROM feeding_times WHERE pet_id = ?1 ORDER BY position ASC",
            )?;
            let rows = stmt.query_map(params![pet_id], |row| {
                Ok(FeedingTime {
                    hour: row.get(0)?,
                    minute: row.get(1)?,
                })
            })?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::db_with_pet;

    #[tokio::test]
    async fn care_state_overwrites_previous_snapshot() {
        let (db, pet, _dir) = db_with_pet().await;
        assert!(load_care_state(&db, &pet.id).await.unwrap().is_none());
        save_care_state(&db, &pet.id, r#"{"hunger":30}"#).await.unwrap();
        save_care_state(&db, &pet.id, r#"{"hunger":55}"#).await.unwrap();
        assert_eq!(
            load_care_state(&db, &pet.id).await.unwrap().as_deref(),
            Some(r#"{"hunger":55}"#)
        );
    }

    #[tokio::test]
    async fn schedule_is_replaced_and_keeps_order() {
        let (db, pet, _dir) = db_with_pet().await;
        let eight = FeedingTime::new(8, 0).unwrap();
        let six = FeedingTime::new(18, 30).unwrap();
        save_feeding_schedule(&db, &pet.id, &[six, eight]).await.unwrap();
        assert_eq!(load_feeding_schedule(&db, &pet.id).await.unwrap(), vec![six, eight]);

        save_feeding_schedule(&db, &pet.id, &[eight]).await.unwrap();
        assert_eq!(load_feeding_schedule(&db, &pet.id).await.unwrap(), vec![eight]);
    }
}
