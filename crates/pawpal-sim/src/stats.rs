// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three care stats and the read-only views derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Upper bound for every stat.
pub const STAT_MAX: u8 = 100;

/// One of the three tracked stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Stat {
    /// Displayed as "Fullness": higher is better fed.
    #[strum(serialize = "Fullness")]
    Hunger,
    Happiness,
    Energy,
}

impl Stat {
    pub fn emoji(self) -> &'static str {
        match self {
            Stat::Hunger => "🍖",
            Stat::Happiness => "😊",
            Stat::Energy => "⚡",
        }
    }
}

/// Signed change applied to each stat by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatDelta {
    pub hunger: i16,
    pub happiness: i16,
    pub energy: i16,
}

impl StatDelta {
    pub const fn new(hunger: i16, happiness: i16, energy: i16) -> Self {
        Self {
            hunger,
            happiness,
            energy,
        }
    }
}

/// Per-pet stats. Every field stays within `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    hunger: u8,
    happiness: u8,
    energy: u8,
    pub last_update: DateTime<Utc>,
}

impl Default for SimulationStats {
    fn default() -> Self {
        Self {
            hunger: 30,
            happiness: 100,
            energy: 100,
            last_update: Utc::now(),
        }
    }
}

fn clamp_add(value: u8, delta: i16) -> u8 {
    (i16::from(value) + delta).clamp(0, i16::from(STAT_MAX)) as u8
}

impl SimulationStats {
    /// Builds stats from raw values, clamping each into range.
    pub fn new(hunger: i32, happiness: i32, energy: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, i32::from(STAT_MAX)) as u8;
        Self {
            hunger: clamp(hunger),
            happiness: clamp(happiness),
            energy: clamp(energy),
            last_update: Utc::now(),
        }
    }

    pub fn hunger(&self) -> u8 {
        self.hunger
    }

    pub fn happiness(&self) -> u8 {
        self.happiness
    }

    pub fn energy(&self) -> u8 {
        self.energy
    }

    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hunger => self.hunger,
            Stat::Happiness => self.happiness,
            Stat::Energy => self.energy,
        }
    }

    /// Applies a delta with clamp-on-write and stamps `last_update`.
    pub fn apply(&mut self, delta: StatDelta) {
        self.apply_at(delta, Utc::now());
    }

    pub(crate) fn apply_at(&mut self, delta: StatDelta, at: DateTime<Utc>) {
        self.hunger = clamp_add(self.hunger, delta.hunger);
        self.happiness = clamp_add(self.happiness, delta.happiness);
        self.energy = clamp_add(self.energy, delta.energy);
        self.last_update = at;
    }

    pub fn average(&self) -> f64 {
        (f64::from(self.hunger) + f64::from(self.happiness) + f64::from(self.energy)) / 3.0
    }

    pub fn mood(&self) -> Mood {
        Mood::from_average(self.average())
    }

    /// Clamps fields that arrived out of range through deserialization.
    pub(crate) fn normalized(mut self) -> Self {
        self.hunger = self.hunger.min(STAT_MAX);
        self.happiness = self.happiness.min(STAT_MAX);
        self.energy = self.energy.min(STAT_MAX);
        self
    }
}

/// Five-level mood derived from the stat average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum Mood {
    Poor,
    Low,
    Fair,
    Good,
    Excellent,
}

impl Mood {
    pub fn from_average(avg: f64) -> Self {
        if avg >= 80.0 {
            Mood::Excellent
        } else if avg >= 60.0 {
            Mood::Good
        } else if avg >= 40.0 {
            Mood::Fair
        } else if avg >= 20.0 {
            Mood::Low
        } else {
            Mood::Poor
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Excellent => "😊",
            Mood::Good => "🙂",
            Mood::Fair => "😐",
            Mood::Low => "😟",
            Mood::Poor => "😢",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mood::Excellent => "feeling amazing",
            Mood::Good => "doing well",
            Mood::Fair => "okay, but could use some attention",
            Mood::Low => "not doing great",
            Mood::Poor => "really needs your care",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Mood::Excellent => "Keep up the great care! 💕",
            Mood::Good => "Maybe some playtime would be nice!",
            Mood::Fair => "Some food and play would help!",
            Mood::Low => "Please feed and play with them soon!",
            Mood::Poor => "They need immediate attention!",
        }
    }
}

/// Color band for a stat bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatBand {
    Healthy,
    Warning,
    Critical,
}

impl StatBand {
    pub fn for_value(value: i32) -> Self {
        if value >= 70 {
            StatBand::Healthy
        } else if value >= 40 {
            StatBand::Warning
        } else {
            StatBand::Critical
        }
    }

    /// Hex color used by front ends.
    pub fn color(self) -> &'static str {
        match self {
            StatBand::Healthy => "#4CAF50",
            StatBand::Warning => "#FF9800",
            StatBand::Critical => "#F44336",
        }
    }
}

/// Bar fill percentage, clamped to `0..=100`.
pub fn bar_fill(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_fixed() {
        let s = SimulationStats::default();
        assert_eq!((s.hunger(), s.happiness(), s.energy()), (30, 100, 100));
    }

    #[test]
    fn apply_clamps_both_ends() {
        let mut s = SimulationStats::new(95, 5, 50);
        s.apply(StatDelta::new(25, -10, 0));
        assert_eq!((s.hunger(), s.happiness(), s.energy()), (100, 0, 50));
    }

    #[test]
    fn new_clamps_raw_values() {
        let s = SimulationStats::new(-4, 250, 100);
        assert_eq!((s.hunger(), s.happiness(), s.energy()), (0, 100, 100));
    }

    #[test]
    fn mood_boundaries() {
        assert_eq!(Mood::from_average(80.0), Mood::Excellent);
        assert_eq!(Mood::from_average(79.9), Mood::Good);
        assert_eq!(Mood::from_average(60.0), Mood::Good);
        assert_eq!(Mood::from_average(40.0), Mood::Fair);
        assert_eq!(Mood::from_average(20.0), Mood::Low);
        assert_eq!(Mood::from_average(19.99), Mood::Poor);
    }

    #[test]
    fn default_stats_read_as_good() {
        // (30 + 100 + 100) / 3 = 76.67
        assert_eq!(SimulationStats::default().mood(), Mood::Good);
    }

    #[test]
    fn band_and_fill() {
        assert_eq!(StatBand::for_value(70).color(), "#4CAF50");
        assert_eq!(StatBand::for_value(69).color(), "#FF9800");
        assert_eq!(StatBand::for_value(39).color(), "#F44336");
        assert_eq!(bar_fill(-5), 0);
        assert_eq!(bar_fill(130), 100);
        assert_eq!(bar_fill(42), 42);
    }

    #[test]
    fn hunger_displays_as_fullness() {
        assert_eq!(Stat::Hunger.to_string(), "Fullness");
        assert_eq!(Stat::Energy.to_string(), "Energy");
    }
}
