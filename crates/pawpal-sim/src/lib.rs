// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pet care simulation ("PawPal Time").
//!
//! Tracks hunger (fullness), happiness and energy, each clamped to
//! `0..=100`, mutated by guarded care actions. Successful actions bump a
//! monotonic counter and may emit a milestone at 10, 50 or 100.

pub mod achievements;
pub mod action;
pub mod breeds;
pub mod decay;
pub mod engine;
pub mod feedback;
pub mod media;
pub mod reminder;
pub mod schedule;
pub mod stats;

pub use achievements::{AchievementKind, Achievements, Milestone};
pub use action::{CareAction, Rejection, Trick};
pub use engine::{ActionOutcome, CareSnapshot, MoodReport, PetSimulation, Performed};
pub use reminder::PlayReminder;
pub use schedule::FeedingSchedule;
pub use stats::{Mood, SimulationStats, StatBand};
