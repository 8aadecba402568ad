// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! "Energy is full" play reminder, sent once per full-energy event.

use crate::stats::STAT_MAX;

/// Title and body of the play reminder.
pub fn play_notification(pet_name: &str) -> (String, String) {
    (
        format!("Time to play with {pet_name}!"),
        "Your pet's energy is full. Let's have some fun! 🎾🐾".to_string(),
    )
}

/// Tracks whether the reminder for the current full-energy event was sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayReminder {
    sent: bool,
}

impl PlayReminder {
    /// Observes the current energy and returns `true` when a reminder is due.
    ///
    /// Re-arms as soon as energy drops below full.
    pub fn observe(&mut self, energy: u8) -> bool {
        if energy >= STAT_MAX {
            if self.sent {
                return false;
            }
            self.sent = true;
            true
        } else {
            self.sent = false;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_full_event() {
        let mut r = PlayReminder::default();
        assert!(r.observe(100));
        assert!(!r.observe(100));
        assert!(!r.observe(100));
        assert!(!r.observe(85));
        assert!(r.observe(100));
    }

    #[test]
    fn never_fires_below_full() {
        let mut r = PlayReminder::default();
        assert!(!r.observe(99));
        assert!(!r.observe(0));
    }

    #[test]
    fn notification_text() {
        let (title, body) = play_notification("Rex");
        assert_eq!(title, "Time to play with Rex!");
        assert!(body.contains("energy is full"));
    }
}
