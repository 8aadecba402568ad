// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only conversation log.

use pawpal_core::{ConversationTurn, PawpalError, PetId, Speaker};
use rusqlite::{Row, params};

use crate::database::{Database, map_tr_err, parse_timestamp};

fn turn_from_row(row: &Row<'_>) -> Result<ConversationTurn, rusqlite::Error> {
    let speaker: String = row.get(1)?;
    let from = speaker.parse::<Speaker>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let timestamp: String = row.get(3)?;
    Ok(ConversationTurn {
        id: row.get(0)?,
        from,
        text: row.get(2)?,
        timestamp: parse_timestamp(3, &timestamp)?,
    })
}

pub async fn append_turn(
    db: &Database,
    pet: &PetId,
    turn: &ConversationTurn,
) -> Result<(), PawpalError> {
    let pet_id = pet.0.clone();
    let turn = turn.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO turns (id, pet_id, speaker, text, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    turn.id,
                    pet_id,
                    turn.from.to_string(),
                    turn.text,
                    turn.timestamp.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Turns for a pet in creation order. With `limit`, only the newest `limit`.
pub async fn list_turns(
    db: &Database,
    pet: &PetId,
    limit: Option<i64>,
) -> Result<Vec<ConversationTurn>, PawpalError> {
    let pet_id = pet.0.clone();
    db.connection()
        .call(move |conn| -> Result<Vec<ConversationTurn>, rusqlite::Error> {
            let mut turns = match limit {
                Some(lim) => {
                    let mut stmt = conn.prepare(
                        "SELECT id, speaker, text, timestamp FROM turns
                         WHERE pet_id = ?1 ORDER BY seq DESC LIMIT ?2",
                    )?;
                    let rows = stmt.query_map(params![pet_id, lim], turn_from_row)?;
                    rows.collect::<Result<Vec<_>, _>>()?
                }
                None => {
                    let mut stmt = conn.prepare(
                        "SELECT id, speaker, text, timestamp FROM turns
                         WHERE pet_id = ?1 ORDER BY seq DESC",
                    )?;
                    let rows = stmt.query_map(params![pet_id], turn_from_row)?;
                    rows.collect::<Result<Vec<_>, _>>()?
                }
            };
            turns.reverse();
            Ok(turns)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::db_with_pet;

    #[tokio::test]
    async fn turns_come_back_in_insertion_order() {
        let (db, pet, _dir) = db_with_pet().await;
        append_turn(&db, &pet.id, &ConversationTurn::new(Speaker::Pet, "Woof!"))
            .await
            .unwrap();
        append_turn(&db, &pet.id, &ConversationTurn::new(Speaker::User, "hi"))
            .await
            .unwrap();
        let turns = list_turns(&db, &pet.id, None).await.unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].from, Speaker::Pet);
        assert_eq!(turns[1].text, "hi");
    }

    #[tokio::test]
    async fn limit_keeps_the_newest_turns() {
        let (db, pet, _dir) = db_with_pet().await;
        for i in 0..5 {
            append_turn(&db, &pet.id, &ConversationTurn::new(Speaker::User, format!("m{i}")))
                .await
                .unwrap();
        }
        let turns = list_turns(&db, &pet.id, Some(2)).await.unwrap();
        let texts: Vec<_> = turns.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["m3", "m4"]);
    }

    #[tokio::test]
    async fn turn_for_unknown_pet_is_rejected() {
        let (db, _pet, _dir) = db_with_pet().await;
        let ghost = PetId("ghost".into());
        let result = append_turn(&db, &ghost, &ConversationTurn::new(Speaker::User, "hi")).await;
        assert!(result.is_err());
    }
}
