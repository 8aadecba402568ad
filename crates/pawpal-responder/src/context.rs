// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Everything a rule can look at while choosing a reply.

use chrono::NaiveDateTime;
use pawpal_core::{ConversationTurn, PetProfile, RandomSource};

pub struct Context<'a> {
    pub profile: &'a PetProfile,
    pub message: &'a str,
    /// Lowercased message; every pattern matches against this.
    pub lower: String,
    /// Prior turns, oldest first. Does not include `message`.
    pub history: &'a [ConversationTurn],
    /// Local wall-clock time used by the date and holiday rules.
    pub now: NaiveDateTime,
    /// Greetings are treated as greetings only below this many prior turns.
    pub greeting_limit: usize,
    rng: &'a dyn RandomSource,
}

pub const DEFAULT_GREETING_LIMIT: usize = 3;

impl<'a> Context<'a> {
    pub fn new(
        profile: &'a PetProfile,
        message: &'a str,
        history: &'a [ConversationTurn],
        now: NaiveDateTime,
        rng: &'a dyn RandomSource,
    ) -> Self {
        Self {
            profile,
            message,
            lower: message.to_lowercase(),
            history,
            now,
            greeting_limit: DEFAULT_GREETING_LIMIT,
            rng,
        }
    }

    pub fn with_greeting_limit(mut self, limit: usize) -> Self {
        self.greeting_limit = limit;
        self
    }

    pub fn is_early(&self) -> bool {
        self.history.len() < self.greeting_limit
    }

    pub fn traits(&self) -> Vec<&'a str> {
        self.profile.trait_list()
    }

    pub fn habits(&self) -> Vec<&'a str> {
        self.profile.habit_list()
    }

    pub fn first_trait(&self) -> Option<&'a str> {
        self.traits().first().copied()
    }

    pub fn first_habit(&self) -> Option<&'a str> {
        self.habits().first().copied()
    }

    /// Text of the most recent user turn, or of the last turn if none.
    pub fn last_user_text(&self) -> &'a str {
        self.history
            .iter()
            .rev()
            .find(|t| t.is_user())
            .or_else(|| self.history.last())
            .map(|t| t.text.as_str())
            .unwrap_or_default()
    }

    /// Picks one template uniformly.
    pub fn pick(&self, mut pool: Vec<String>) -> String {
        if pool.is_empty() {
            return String::new();
        }
        let idx = self.rng.next_index(pool.len()).min(pool.len() - 1);
        pool.swap_remove(idx)
    }
}
