// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Monotonic care counters and milestone detection.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Counter values that trigger a celebration when reached.
pub const MILESTONES: [u32; 3] = [10, 50, 100];

/// Which counter an action increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AchievementKind {
    Feeds,
    Plays,
    Treats,
    Baths,
    Sleeps,
    Walks,
}

/// Per-pet counters. Only ever incremented, by exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievements {
    pub total_feeds: u32,
    pub total_plays: u32,
    pub total_treats: u32,
    pub total_baths: u32,
    pub total_sleeps: u32,
    pub total_walks: u32,
}

/// A one-time celebration emitted when a counter lands on a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub kind: AchievementKind,
    pub count: u32,
}

impl Milestone {
    pub fn title(&self) -> &'static str {
        "🏆 Achievement!"
    }

    pub fn message(&self) -> String {
        format!("{} {}! Amazing bond!", self.count, self.kind)
    }
}

impl Achievements {
    pub fn get(&self, kind: AchievementKind) -> u32 {
        match kind {
            AchievementKind::Feeds => self.total_feeds,
            AchievementKind::Plays => self.total_plays,
            AchievementKind::Treats => self.total_treats,
            AchievementKind::Baths => self.total_baths,
            AchievementKind::Sleeps => self.total_sleeps,
            AchievementKind::Walks => self.total_walks,
        }
    }

    fn slot(&mut self, kind: AchievementKind) -> &mut u32 {
        match kind {
            AchievementKind::Feeds => &mut self.total_feeds,
            AchievementKind::Plays => &mut self.total_plays,
            AchievementKind::Treats => &mut self.total_treats,
            AchievementKind::Baths => &mut self.total_baths,
            AchievementKind::Sleeps => &mut self.total_sleeps,
            AchievementKind::Walks => &mut self.total_walks,
        }
    }

    /// Increments a counter and reports a milestone if the new value is exactly one.
    pub fn increment(&mut self, kind: AchievementKind) -> Option<Milestone> {
        let slot = self.slot(kind);
        *slot = slot.saturating_add(1);
        let count = *slot;
        MILESTONES
            .contains(&count)
            .then_some(Milestone { kind, count })
    }

    pub fn total(&self) -> u32 {
        use strum::IntoEnumIterator;
        AchievementKind::iter().map(|k| self.get(k)).sum()
    }
}
