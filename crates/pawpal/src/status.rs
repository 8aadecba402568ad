// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawpal status` command implementation.
//!
//! Shows the current pet's stats, mood, achievements and feeding times.
//! `--json` emits the same data for scripting; `--plain` or a non-TTY
//! stdout disables colors.

use std::io::IsTerminal;

use colored::Colorize;
use pawpal_agent::{CareSession, PawpalApp};
use pawpal_core::PawpalError;
use pawpal_sim::{Achievements, StatBand};
use serde::Serialize;

/// Structured status output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub pet_id: String,
    pub name: String,
    pub species: String,
    pub persona: String,
    pub hunger: u8,
    pub happiness: u8,
    pub energy: u8,
    pub mood: String,
    pub achievements: Achievements,
    pub feeding_times: Vec<String>,
    pub memories: usize,
}

impl StatusResponse {
    pub fn from_session(care: &CareSession, memories: usize) -> Self {
        let pet = care.pet();
        let stats = care.stats();
        Self {
            pet_id: pet.id.to_string(),
            name: pet.display_name().to_string(),
            species: pet.display_species().to_string(),
            persona: pet.persona().to_string(),
            hunger: stats.hunger(),
            happiness: stats.happiness(),
            energy: stats.energy(),
            mood: stats.mood().to_string(),
            achievements: care.achievements().clone(),
            feeding_times: care.schedule().times().iter().map(|t| t.to_string()).collect(),
            memories,
        }
    }
}

pub async fn run_status(app: &PawpalApp, json: bool, plain: bool) -> Result<(), PawpalError> {
    let care = app.care().await?;
    let memories = app.state().memories(&care.pet().id).await?.len();
    let status = StatusResponse::from_session(&care, memories);

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print_status(&status, use_color);
    }
    Ok(())
}

/// Ten-cell bar for a 0..=100 stat.
pub fn bar(value: u8) -> String {
    let filled = usize::from(value.min(100)).div_ceil(10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

fn stat_line(label: &str, value: u8, use_color: bool) {
    let bar = bar(value);
    if use_color {
        let bar = match StatBand::for_value(i32::from(value)) {
            StatBand::Healthy => bar.green(),
            StatBand::Warning => bar.yellow(),
            StatBand::Critical => bar.red(),
        };
        println!("    {label:<10} {bar} {value:>3}%");
    } else {
        println!("    {label:<10} {bar} {value:>3}%");
    }
}

fn print_status(status: &StatusResponse, use_color: bool) {
    println!();
    if use_color {
        println!("  {} the {}", status.name.bold(), status.species);
    } else {
        println!("  {} the {}", status.name, status.species);
    }
    println!("  {}", "-".repeat(35));
    stat_line("Hunger", status.hunger, use_color);
    stat_line("Happiness", status.happiness, use_color);
    stat_line("Energy", status.energy, use_color);
    println!("    Mood:      {}", status.mood);
    println!();

    let a = &status.achievements;
    println!(
        "    Feeds {}  Plays {}  Treats {}  Baths {}  Sleeps {}  Walks {}",
        a.total_feeds, a.total_plays, a.total_treats, a.total_baths, a.total_sleeps, a.total_walks
    );
    if status.feeding_times.is_empty() {
        println!("    Feeding:   none scheduled");
    } else {
        println!("    Feeding:   {}", status.feeding_times.join(", "));
    }
    println!("    Memories:  {}", status.memories);
    println!();
}
