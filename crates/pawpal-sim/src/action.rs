// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Care actions: guards, stat deltas, and the counter each one bumps.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::achievements::AchievementKind;
use crate::media::Clip;
use crate::stats::{SimulationStats, StatDelta};

/// A trick picked when playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Trick {
    PlayDead,
    /// Pounce for cats.
    #[strum(serialize = "roll-over", serialize = "pounce")]
    RollOver,
    /// Chase for cats.
    #[default]
    #[strum(serialize = "fetch", serialize = "chase")]
    Fetch,
}

impl Trick {
    /// Name shown to the player, which differs for cats.
    pub fn label(self, is_cat: bool) -> &'static str {
        match (self, is_cat) {
            (Trick::PlayDead, _) => "Play Dead",
            (Trick::RollOver, true) => "Pounce",
            (Trick::RollOver, false) => "Roll Over",
            (Trick::Fetch, true) => "Chase",
            (Trick::Fetch, false) => "Fetch",
        }
    }
}

/// A discrete player action on the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareAction {
    Feed,
    Play(Trick),
    Treat,
    Bath,
    Sleep,
    Walk,
}

impl CareAction {
    pub fn delta(self) -> StatDelta {
        match self {
            CareAction::Feed => StatDelta::new(25, 10, 0),
            CareAction::Play(_) => StatDelta::new(-10, 25, -15),
            CareAction::Treat => StatDelta::new(10, 20, 0),
            CareAction::Bath => StatDelta::new(0, 15, -5),
            CareAction::Sleep => StatDelta::new(0, 5, 50),
            CareAction::Walk => StatDelta::new(-15, 20, -10),
        }
    }

    pub fn achievement(self) -> AchievementKind {
        match self {
            CareAction::Feed => AchievementKind::Feeds,
            CareAction::Play(_) => AchievementKind::Plays,
            CareAction::Treat => AchievementKind::Treats,
            CareAction::Bath => AchievementKind::Baths,
            CareAction::Sleep => AchievementKind::Sleeps,
            CareAction::Walk => AchievementKind::Walks,
        }
    }

    /// Checks the guard; `Some` carries the rejection with the pet's name filled in.
    pub fn check_guard(self, stats: &SimulationStats, name: &str) -> Option<Rejection> {
        match self {
            CareAction::Feed if stats.hunger() >= 90 => Some(Rejection::too_full(
                format!("{name} is not hungry right now!"),
            )),
            CareAction::Treat if stats.hunger() >= 95 => Some(Rejection::too_full(
                format!("{name} is too full for treats right now!"),
            )),
            CareAction::Play(_) if stats.energy() < 20 => Some(Rejection::too_tired(format!(
                "{name} is too tired to play. Let them rest or take a walk!"
            ))),
            CareAction::Walk if stats.energy() < 15 => Some(Rejection::too_tired(format!(
                "{name} is too tired for a walk. Let them rest first!"
            ))),
            _ => None,
        }
    }

    /// Media clip that accompanies the action, if any.
    pub fn clip(self) -> Option<Clip> {
        match self {
            CareAction::Feed => Some(Clip::Feed),
            CareAction::Treat => Some(Clip::Treat),
            CareAction::Bath => Some(Clip::Bath),
            CareAction::Sleep => Some(Clip::Sleep),
            CareAction::Play(Trick::PlayDead) => Some(Clip::PlayDead),
            CareAction::Play(Trick::RollOver) => Some(Clip::PlayRollover),
            CareAction::Play(Trick::Fetch) => Some(Clip::PlayFetch),
            CareAction::Walk => None,
        }
    }
}

impl std::fmt::Display for CareAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CareAction::Feed => f.write_str("feed"),
            CareAction::Play(trick) => write!(f, "play {trick}"),
            CareAction::Treat => f.write_str("treat"),
            CareAction::Bath => f.write_str("bath"),
            CareAction::Sleep => f.write_str("sleep"),
            CareAction::Walk => f.write_str("walk"),
        }
    }
}

impl FromStr for CareAction {
    type Err = String;

    /// Accepts `feed`, `treat`, `bath`, `sleep`, `walk`, `play`, or `play <trick>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let mut parts = lower.split_whitespace();
        let verb = parts.next().ok_or_else(|| "empty action".to_string())?;
        let action = match verb {
            "feed" => CareAction::Feed,
            "treat" => CareAction::Treat,
            "bath" => CareAction::Bath,
            "sleep" => CareAction::Sleep,
            "walk" => CareAction::Walk,
            "play" => {
                let trick = match parts.next() {
                    Some(t) => Trick::from_str(t).map_err(|_| format!("unknown trick '{t}'"))?,
                    None => Trick::default(),
                };
                CareAction::Play(trick)
            }
            other => return Err(format!("unknown action '{other}'")),
        };
        Ok(action)
    }
}

/// Why a guard refused an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RejectionReason {
    #[strum(serialize = "Too Full")]
    TooFull,
    #[strum(serialize = "Too Tired")]
    TooTired,
}

/// A user-facing refusal. Stats and counters are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: RejectionReason,
    pub message: String,
}

impl Rejection {
    fn too_full(message: String) -> Self {
        Self {
            reason: RejectionReason::TooFull,
            message,
        }
    }

    fn too_tired(message: String) -> Self {
        Self {
            reason: RejectionReason::TooTired,
            message,
        }
    }

    pub fn title(&self) -> String {
        self.reason.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions_and_tricks() {
        assert_eq!("feed".parse::<CareAction>(), Ok(CareAction::Feed));
        assert_eq!("  Walk ".parse::<CareAction>(), Ok(CareAction::Walk));
        assert_eq!(
            "play".parse::<CareAction>(),
            Ok(CareAction::Play(Trick::Fetch))
        );
        assert_eq!(
            "play play-dead".parse::<CareAction>(),
            Ok(CareAction::Play(Trick::PlayDead))
        );
        assert_eq!(
            "play pounce".parse::<CareAction>(),
            Ok(CareAction::Play(Trick::RollOver))
        );
        assert!("play cartwheel".parse::<CareAction>().is_err());
        assert!("dance".parse::<CareAction>().is_err());
    }

    #[test]
    fn guards_use_documented_thresholds() {
        let full = SimulationStats::new(90, 50, 50);
        assert!(CareAction::Feed.check_guard(&full, "Rex").is_some());
        assert!(CareAction::Treat.check_guard(&full, "Rex").is_none());

        let stuffed = SimulationStats::new(95, 50, 50);
        let r = CareAction::Treat.check_guard(&stuffed, "Rex").unwrap();
        assert_eq!(r.title(), "Too Full");
        assert_eq!(r.message, "Rex is too full for treats right now!");

        let tired = SimulationStats::new(50, 50, 19);
        assert!(CareAction::Play(Trick::Fetch).check_guard(&tired, "Rex").is_some());
        assert!(CareAction::Walk.check_guard(&tired, "Rex").is_none());

        let exhausted = SimulationStats::new(50, 50, 14);
        let r = CareAction::Walk.check_guard(&exhausted, "Rex").unwrap();
        assert_eq!(r.reason, RejectionReason::TooTired);
    }

    #[test]
    fn bath_and_sleep_are_unguarded() {
        let worst = SimulationStats::new(100, 0, 0);
        assert!(CareAction::Bath.check_guard(&worst, "Rex").is_none());
        assert!(CareAction::Sleep.check_guard(&worst, "Rex").is_none());
    }

    #[test]
    fn trick_labels_switch_for_cats() {
        assert_eq!(Trick::RollOver.label(true), "Pounce");
        assert_eq!(Trick::Fetch.label(false), "Fetch");
        assert_eq!(Trick::PlayDead.label(true), "Play Dead");
    }
}
