// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Narrative feedback shown after a successful care action.

use pawpal_core::random::pick;
use pawpal_core::{PetProfile, RandomSource};

use crate::action::{CareAction, Trick};
use crate::breeds;

/// Title, narrative, and the acknowledgement button label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub title: String,
    pub message: String,
    pub acknowledgement: String,
}

impl Feedback {
    fn new(title: &str, message: String, acknowledgement: &str) -> Self {
        Self {
            title: title.to_string(),
            message,
            acknowledgement: acknowledgement.to_string(),
        }
    }
}

/// Builds the feedback for `action`, with cat-specific wording where it differs.
///
/// Only walks draw from `rng`.
pub fn for_action(action: CareAction, pet: &PetProfile, rng: &dyn RandomSource) -> Feedback {
    let name = pet.display_name();
    let cat = pet.is_cat();

    match action {
        CareAction::Feed => Feedback::new(
            "🍖 Yum Yum!",
            format!("{name} devours the food happily! Their belly is full and they're so happy! 😋"),
            "Aww, good pet! 🐾",
        ),
        CareAction::Treat => Feedback::new(
            "🦴 Treat Time!",
            if cat {
                format!("{name} munches happily on treats! Purring up a storm! 🐱✨")
            } else {
                format!("{name} munches happily on treats! The tail won't stop wagging! 🐕✨")
            },
            "Best treats ever! 💕",
        ),
        CareAction::Sleep => Feedback::new(
            "😴 Sweet Dreams!",
            format!("{name} had a wonderful nap and feels refreshed and energized! ✨🐾"),
            "Rest well! 💤",
        ),
        CareAction::Bath => {
            if cat {
                Feedback::new(
                    "🛁 Bath Time!",
                    format!("{name} is now squeaky clean! So fresh and fluffy! 🧼✨"),
                    "So clean! 🐱",
                )
            } else {
                Feedback::new(
                    "🛁 Bath Time!",
                    format!(
                        "{name} is now squeaky clean! Smells amazing with a shiny coat! 🧼✨"
                    ),
                    "So fresh! 🐾",
                )
            }
        }
        CareAction::Play(trick) => play_feedback(trick, name, cat),
        CareAction::Walk => {
            let preference = pet
                .breed
                .as_deref()
                .and_then(breeds::by_id)
                .map(|b| b.walk_preference)
                .unwrap_or(breeds::DEFAULT_WALK_PREFERENCE);
            let lines = [
                format!("*{}* So many new smells!", preference.to_lowercase()),
                "The fresh air feels great!".to_string(),
                "*prances happily* Best walk ever!".to_string(),
                "I love exploring with you!".to_string(),
            ];
            let line = pick(rng, &lines).cloned().unwrap_or_default();
            Feedback::new("🚶 Walk Time!", format!("{name}: {line}"), "Let's go! 🐾")
        }
    }
}

fn play_feedback(trick: Trick, name: &str, cat: bool) -> Feedback {
    match (trick, cat) {
        (Trick::PlayDead, _) => Feedback::new(
            "🎭 What an Actor!",
            format!("{name} plays dead so convincingly! 😂 What a comedian!"),
            "Bravo! 👏",
        ),
        (Trick::RollOver, true) => Feedback::new(
            "🐱 Perfect Pounce!",
            format!("{name} pounces with amazing agility! So fierce and fun! 😻"),
            "So talented! 🏆",
        ),
        (Trick::RollOver, false) => Feedback::new(
            "🛼 Perfect Roll!",
            format!("{name} does an amazing roll over! So graceful and fun! 🤸"),
            "So skillful! 🏆",
        ),
        (Trick::Fetch, true) => Feedback::new(
            "🐱 Epic Chase!",
            format!("{name} zooms around in an epic chase! So fast and playful! 😹"),
            "So speedy! 💨",
        ),
        (Trick::Fetch, false) => Feedback::new(
            "🎾 Great Catch!",
            format!("{name} chases and brings back the ball! So obedient and fun! 🐕"),
            "Best fetch ever! 💪",
        ),
    }
}
