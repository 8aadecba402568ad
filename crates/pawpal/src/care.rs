// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawpal care` and `pawpal schedule` command implementations.

use colored::Colorize;
use pawpal_agent::{CareSession, PawpalApp};
use pawpal_core::{FeedingTime, PawpalError};
use pawpal_sim::{ActionOutcome, CareAction, MoodReport};

/// Runs one care action (or `mood`) for the current pet.
pub async fn run_care(app: &PawpalApp, action: &str) -> Result<(), PawpalError> {
    let mut care = app.care().await?;
    apply(&mut care, action).await?;
    Ok(())
}

/// Shared by the one-shot command and the shell. Returns `None` for `mood`.
pub async fn apply(
    care: &mut CareSession,
    action: &str,
) -> Result<Option<ActionOutcome>, PawpalError> {
    if action.trim().eq_ignore_ascii_case("mood") {
        print_mood(&care.mood_report());
        return Ok(None);
    }
    let action: CareAction = action.parse().map_err(PawpalError::InvalidInput)?;
    let outcome = care.perform(action).await?;
    print_outcome(&outcome);
    Ok(Some(outcome))
}

pub fn print_outcome(outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Performed(done) => {
            println!("{}", done.feedback.title.bold());
            println!("{}", done.feedback.message);
            if let Some(clip) = done.clip {
                println!("{}", format!("🎬 {clip}").dimmed());
            }
            println!(
                "{}",
                format!(
                    "hunger {}%  happiness {}%  energy {}%",
                    done.stats.hunger(),
                    done.stats.happiness(),
                    done.stats.energy()
                )
                .dimmed()
            );
        }
        ActionOutcome::Rejected(rejection) => {
            println!("{}: {}", rejection.title().yellow(), rejection.message);
        }
    }
}

pub fn print_mood(report: &MoodReport) {
    println!("{} {}", report.title.bold(), report.emoji);
    println!("{}", report.body);
}

pub async fn add_feeding_time(app: &PawpalApp, at: FeedingTime) -> Result<(), PawpalError> {
    let mut care = app.care().await?;
    if care.add_feeding_time(at).await? {
        println!("Feeding reminder set for {at}.");
    } else {
        println!("{at} is already scheduled.");
    }
    Ok(())
}

pub async fn list_feeding_times(app: &PawpalApp) -> Result<(), PawpalError> {
    let care = app.care().await?;
    let times = care.schedule().times();
    if times.is_empty() {
        println!("No feeding times scheduled for {}.", care.pet().display_name());
    }
    for (i, at) in times.iter().enumerate() {
        println!("{:>3}. {at}", i + 1);
    }
    Ok(())
}

/// `position` is 1-based, as listed.
pub async fn remove_feeding_time(app: &PawpalApp, position: usize) -> Result<(), PawpalError> {
    if position == 0 {
        return Err(PawpalError::InvalidInput("positions start at 1".into()));
    }
    let mut care = app.care().await?;
    let removed = care.remove_feeding_time(position - 1).await?;
    println!("Removed feeding reminder at {removed}.");
    Ok(())
}
