// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hourly stat decay for time spent away from the pet.

use chrono::{DateTime, Duration, Utc};

use crate::stats::{SimulationStats, StatDelta};

/// Points lost per whole elapsed hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayRates {
    pub hunger: u8,
    pub happiness: u8,
    pub energy: u8,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger: 5,
            happiness: 3,
            energy: 4,
        }
    }
}

fn loss(rate: u8, hours: i64) -> i16 {
    -(i64::from(rate).saturating_mul(hours).min(100) as i16)
}

/// Applies decay for every whole hour between `last_update` and `now`.
///
/// Partial hours carry over: `last_update` advances by the whole hours
/// consumed, not to `now`. Returns the number of hours applied.
pub fn apply(stats: &mut SimulationStats, rates: DecayRates, now: DateTime<Utc>) -> i64 {
    let hours = (now - stats.last_update).num_hours();
    if hours <= 0 {
        return 0;
    }
    let delta = StatDelta::new(
        loss(rates.hunger, hours),
        loss(rates.happiness, hours),
        loss(rates.energy, hours),
    );
    let advanced = stats.last_update + Duration::hours(hours);
    stats.apply_at(delta, advanced);
    tracing::debug!(hours, "applied stat decay");
    hours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_hours_only() {
        let mut s = SimulationStats::new(80, 80, 80);
        let start = s.last_update;
        let applied = apply(&mut s, DecayRates::default(), start + Duration::minutes(150));
        assert_eq!(applied, 2);
        assert_eq!((s.hunger(), s.happiness(), s.energy()), (70, 74, 72));
        assert_eq!(s.last_update, start + Duration::hours(2));
    }

    #[test]
    fn no_decay_within_the_hour() {
        let mut s = SimulationStats::new(50, 50, 50);
        let start = s.last_update;
        assert_eq!(apply(&mut s, DecayRates::default(), start + Duration::minutes(59)), 0);
        assert_eq!(s.hunger(), 50);
        assert_eq!(s.last_update, start);
    }

    #[test]
    fn long_absence_floors_at_zero() {
        let mut s = SimulationStats::new(100, 100, 100);
        let start = s.last_update;
        apply(&mut s, DecayRates::default(), start + Duration::days(30));
        assert_eq!((s.hunger(), s.happiness(), s.energy()), (0, 0, 0));
    }

    #[test]
    fn clock_going_backwards_is_ignored() {
        let mut s = SimulationStats::new(60, 60, 60);
        let start = s.last_update;
        assert_eq!(apply(&mut s, DecayRates::default(), start - Duration::hours(3)), 0);
        assert_eq!(s.energy(), 60);
    }
}
