// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-pet care simulation: stats plus counters, mutated by actions.

use chrono::{DateTime, Utc};
use pawpal_core::{PetProfile, RandomSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::achievements::{Achievements, Milestone};
use crate::action::{CareAction, Rejection};
use crate::breeds;
use crate::decay::{self, DecayRates};
use crate::feedback::{self, Feedback};
use crate::media;
use crate::stats::{SimulationStats, Stat};

/// Result of attempting a care action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Performed(Performed),
    /// The guard refused; nothing changed.
    Rejected(Rejection),
}

impl ActionOutcome {
    pub fn is_performed(&self) -> bool {
        matches!(self, ActionOutcome::Performed(_))
    }
}

/// A successful action with everything a front end needs to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Performed {
    pub action: CareAction,
    pub stats: SimulationStats,
    pub feedback: Feedback,
    pub milestone: Option<Milestone>,
    pub clip: Option<&'static str>,
}

/// Stats and counters for one pet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetSimulation {
    stats: SimulationStats,
    achievements: Achievements,
}

impl PetSimulation {
    pub fn new(stats: SimulationStats, achievements: Achievements) -> Self {
        Self {
            stats,
            achievements,
        }
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }

    /// Runs the guard, then applies deltas, bumps the counter, and builds feedback.
    pub fn perform(
        &mut self,
        action: CareAction,
        pet: &PetProfile,
        rng: &dyn RandomSource,
    ) -> ActionOutcome {
        if let Some(rejection) = action.check_guard(&self.stats, pet.display_name()) {
            debug!(%action, reason = %rejection.reason, "care action rejected");
            return ActionOutcome::Rejected(rejection);
        }

        self.stats.apply(action.delta());
        let milestone = self.achievements.increment(action.achievement());
        let clip = action
            .clip()
            .and_then(|c| media::clip_for(pet.variant.as_deref(), c));

        debug!(
            %action,
            hunger = self.stats.hunger(),
            happiness = self.stats.happiness(),
            energy = self.stats.energy(),
            milestone = milestone.map(|m| m.count),
            "care action performed"
        );

        ActionOutcome::Performed(Performed {
            action,
            stats: self.stats.clone(),
            feedback: feedback::for_action(action, pet, rng),
            milestone,
            clip,
        })
    }

    /// Applies hourly decay up to `now`. Returns whole hours applied.
    pub fn decay_to(&mut self, now: DateTime<Utc>) -> i64 {
        decay::apply(&mut self.stats, DecayRates::default(), now)
    }

    pub fn snapshot(&self) -> CareSnapshot {
        CareSnapshot {
            stats: self.stats.clone(),
            achievements: self.achievements.clone(),
            saved_at: Utc::now(),
        }
    }

    pub fn from_snapshot(snapshot: CareSnapshot) -> Self {
        Self {
            stats: snapshot.stats.normalized(),
            achievements: snapshot.achievements,
        }
    }

    /// Mood summary with stats and, when the breed is known, breed traits.
    pub fn mood_report(&self, pet: &PetProfile) -> MoodReport {
        let name = pet.display_name();
        let mood = self.stats.mood();
        let mut body = format!(
            "{name} is {}.\n\n{}\n\n📊 Stats:",
            mood.description(),
            mood.advice()
        );
        for stat in [Stat::Hunger, Stat::Happiness, Stat::Energy] {
            body.push_str(&format!(
                "\n{} {stat}: {}%",
                stat.emoji(),
                self.stats.get(stat)
            ));
        }
        if let Some(breed) = pet.breed.as_deref().and_then(breeds::by_id) {
            body.push_str(&format!(
                "\n\n💫 Breed Traits: {}\n⚡ Energy Level: {}",
                breed.traits.join(", "),
                breed.energy_level
            ));
        }
        MoodReport {
            title: format!("💭 {name}'s Mood"),
            emoji: mood.emoji(),
            body,
        }
    }
}

/// Read-only mood summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodReport {
    pub title: String,
    pub emoji: &'static str,
    pub body: String,
}

/// Persisted form of a [`PetSimulation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareSnapshot {
    #[serde(flatten)]
    pub stats: SimulationStats,
    #[serde(default)]
    pub achievements: Achievements,
    pub saved_at: DateTime<Utc>,
}

impl CareSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
