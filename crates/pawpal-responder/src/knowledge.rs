// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Patterns shared by both personas: the knowledge-question gate and its
//! sub-topics, jokes and holiday keywords.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::Context;
use crate::rules::pattern;

static QUESTION_WORD: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\b(what|how|why|when|where|who|explain|tell me about)\b"));
static WEATHER: LazyLock<Regex> = LazyLock::new(|| pattern(r"weather|temperature|rain|sunny|snow"));
static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| pattern(r"time|date|today|day is it"));
static DEFINITION: LazyLock<Regex> = LazyLock::new(|| pattern(r"what is|what's|define|meaning of"));
static JOKE: LazyLock<Regex> = LazyLock::new(|| pattern(r"joke|make me laugh|funny"));
static HOLIDAY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"holiday|valentine|christmas|new year|easter|halloween|season"));

pub const JOKES: [&str; 5] = [
    "Why did the dog sit in the shade? Because it didn't want to be a hot dog! 🌭",
    "Why do cats always get their way? Because they are purr-suasive! 😸",
    "What do you call a hamster with a top hat? Fancy! 🎩",
    "Why did the rabbit eat lunch late? It had a bad hare day! 🐰",
    "Why did the guinea pig bring a suitcase? For its pig-nic! 🧺",
];

/// A question word together with a question mark.
pub fn is_knowledge_question(ctx: &Context<'_>) -> bool {
    QUESTION_WORD.is_match(&ctx.lower) && ctx.lower.contains('?')
}

pub fn asks_weather(ctx: &Context<'_>) -> bool {
    WEATHER.is_match(&ctx.lower)
}

pub fn asks_date_time(ctx: &Context<'_>) -> bool {
    DATE_TIME.is_match(&ctx.lower)
}

pub fn asks_definition(ctx: &Context<'_>) -> bool {
    DEFINITION.is_match(&ctx.lower)
}

pub fn asks_joke(ctx: &Context<'_>) -> bool {
    JOKE.is_match(&ctx.lower)
}

pub fn mentions_holiday(ctx: &Context<'_>) -> bool {
    HOLIDAY.is_match(&ctx.lower)
}

pub fn joke(ctx: &Context<'_>) -> String {
    ctx.pick(JOKES.iter().map(|j| j.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pawpal_core::{FixedRandom, PetProfile};

    fn check(message: &str, f: fn(&Context<'_>) -> bool) -> bool {
        let pet = PetProfile::new("Rex", "dog", true);
        let now = NaiveDate::from_ymd_opt(2026, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let rng = FixedRandom(0);
        f(&Context::new(&pet, message, &[], now, &rng))
    }

    #[test]
    fn knowledge_gate_needs_word_and_question_mark() {
        assert!(check("What is love?", is_knowledge_question));
        assert!(!check("what is love", is_knowledge_question));
        assert!(!check("somehow?", is_knowledge_question));
    }

    #[test]
    fn topic_detectors() {
        assert!(check("Will it RAIN?", asks_weather));
        assert!(check("what day is it", asks_date_time));
        assert!(check("tell me a joke", asks_joke));
        assert!(check("happy new year!", mentions_holiday));
    }
}
