// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key/value settings and whole-database reset.

use pawpal_core::PawpalError;
use rusqlite::params;

use crate::database::{Database, map_tr_err};

pub async fn get_setting(db: &Database, key: &str) -> Result<Option<String>, PawpalError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<String>, rusqlite::Error> {
            let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
            let mut rows = stmt.query_map(params![key], |row| row.get(0))?;
            rows.next().transpose()
        })
        .await
        .map_err(map_tr_err)
}

pub async fn set_setting(db: &Database, key: &str, value: &str) -> Result<(), PawpalError> {
    let key = key.to_string();
    let value = value.to_string();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

pub async fn delete_setting(db: &Database, key: &str) -> Result<(), PawpalError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute("DELETE FROM settings WHERE key = ?1", params![key])?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Empties every table in one transaction.
pub async fn clear_all(db: &Database) -> Result<(), PawpalError> {
    db.connection()
        .call(|conn| -> Result<(), rusqlite::Error> {
            let tx = conn.transaction()?;
            tx.execute_batch(
                "DELETE FROM feeding_times;
                 DELETE FROM care_state;
                 DELETE FROM memories;
                 DELETE FROM turns;
                 DELETE FROM pets;
                 DELETE FROM settings;",
            )?;
            tx.commit()
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::{pets, test_support::db_with_pet};

    #[tokio::test]
    async fn settings_upsert_and_delete() {
        let (db, _pet, _dir) = db_with_pet().await;
        assert!(get_setting(&db, "current_pet").await.unwrap().is_none());
        set_setting(&db, "current_pet", "a").await.unwrap();
        set_setting(&db, "current_pet", "b").await.unwrap();
        assert_eq!(get_setting(&db, "current_pet").await.unwrap().as_deref(), Some("b"));
        delete_setting(&db, "current_pet").await.unwrap();
        assert!(get_setting(&db, "current_pet").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_all_empties_everything() {
        let (db, _pet, _dir) = db_with_pet().await;
        set_setting(&db, "onboarded", "true").await.unwrap();
        clear_all(&db).await.unwrap();
        assert!(pets::list_pets(&db).await.unwrap().is_empty());
        assert!(get_setting(&db, "onboarded").await.unwrap().is_none());
    }
}
