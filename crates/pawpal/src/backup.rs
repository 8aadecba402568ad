// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawpal export`, `pawpal import` and `pawpal reset` command implementations.

use std::path::Path;

use pawpal_agent::{PawpalApp, backup};
use pawpal_core::PawpalError;

/// Writes the JSON backup to `output`, or to stdout when `None`.
pub async fn run_export(app: &PawpalApp, output: Option<&Path>) -> Result<(), PawpalError> {
    let json = backup::export(app.state()).await?;
    match output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| PawpalError::Storage {
                source: Box::new(e),
            })?;
            eprintln!("Backup written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub async fn run_import(app: &PawpalApp, input: &Path) -> Result<(), PawpalError> {
    let json = std::fs::read_to_string(input).map_err(|e| PawpalError::Storage {
        source: Box::new(e),
    })?;
    let summary = backup::import(app.state(), &json).await?;
    println!(
        "Imported {} pet(s) and {} memories ({} already present).",
        summary.pets, summary.memories, summary.skipped_memories
    );
    Ok(())
}

/// Deletes every pet, conversation, memory, schedule and setting.
pub async fn run_reset(app: &PawpalApp, confirmed: bool) -> Result<(), PawpalError> {
    if !confirmed {
        return Err(PawpalError::InvalidInput(
            "reset deletes all data; pass --yes to confirm".into(),
        ));
    }
    app.state().clear_all().await?;
    println!("All PawPal data cleared.");
    Ok(())
}
