// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the response chain.

use std::sync::Arc;

use chrono::NaiveDate;
use pawpal_core::{ConversationTurn, FixedRandom, PetProfile, SeededRandom, Speaker};
use pawpal_responder::{ReplySource, ResponseGenerator};
use pawpal_test_utils::MockBackend;
use proptest::prelude::*;

fn companion() -> PetProfile {
    let mut pet = PetProfile::new("Rex", "dog", true);
    pet.traits = "playful, loyal".into();
    pet.habits = "fetch".into();
    pet
}

fn memorial() -> PetProfile {
    let mut pet = PetProfile::new("Shadow", "cat", false);
    pet.traits = "calm".into();
    pet
}

fn history(n: usize) -> Vec<ConversationTurn> {
    (0..n)
        .map(|i| {
            let from = if i % 2 == 0 { Speaker::User } else { Speaker::Pet };
            ConversationTurn::new(from, format!("turn {i}"))
        })
        .collect()
}

fn local_only() -> ResponseGenerator {
    ResponseGenerator::new(Arc::new(FixedRandom(0)))
}

// ---- Remote chain ----

#[tokio::test]
async fn first_enabled_backend_answers() {
    let openai = Arc::new(MockBackend::with_responses("openai", vec!["from openai".into()]));
    let grok = Arc::new(MockBackend::with_responses("grok", vec!["from grok".into()]));
    let generator = local_only()
        .with_backend(openai.clone())
        .with_backend(grok.clone());

    let reply = generator.generate(&companion(), "hello", &[]).await;
    assert_eq!(reply.source, ReplySource::Remote("openai".into()));
    assert_eq!(reply.text, "from openai");
    assert_eq!(grok.calls(), 0);
}

#[tokio::test]
async fn failing_primary_falls_through_to_secondary() {
    let openai = Arc::new(MockBackend::failing("openai"));
    let grok = Arc::new(MockBackend::with_responses("grok", vec!["grok here".into()]));
    let generator = local_only()
        .with_backend(openai.clone())
        .with_backend(grok.clone());

    let reply = generator.generate(&companion(), "hello", &[]).await;
    assert_eq!(reply.source, ReplySource::Remote("grok".into()));
    assert_eq!(openai.calls(), 1);
    assert_eq!(grok.calls(), 1);
}

#[tokio::test]
async fn all_backends_failing_uses_local_rules() {
    let generator = local_only()
        .with_backend(Arc::new(MockBackend::failing("openai")))
        .with_backend(Arc::new(MockBackend::failing("grok")));

    let reply = generator.generate(&companion(), "5 + 3", &[]).await;
    assert_eq!(reply.source, ReplySource::Local("knowledge"));
    assert_eq!(reply.text, "5 + 3 = 8 💡");
}

#[tokio::test]
async fn disabled_backends_are_never_called() {
    let openai = Arc::new(MockBackend::disabled("openai"));
    let generator = local_only().with_backend(openai.clone());

    let reply = generator.generate(&memorial(), "I miss you", &[]).await;
    assert_eq!(reply.source, ReplySource::Local("missing"));
    assert_eq!(openai.calls(), 0);
}

#[tokio::test]
async fn backend_sees_prompt_and_trimmed_history() {
    let openai = Arc::new(MockBackend::new("openai"));
    let generator = local_only()
        .with_backend(openai.clone())
        .with_history_window(4);

    generator.generate(&companion(), "what now?", &history(9)).await;

    let requests = openai.requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.system_prompt.starts_with("You are Rex, a dog."));
    assert_eq!(request.message, "what now?");
    let texts: Vec<_> = request.history.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["turn 5", "turn 6", "turn 7", "turn 8"]);
}

// ---- Local rules ----

#[test]
fn division_by_zero_is_undefined() {
    let now = NaiveDate::from_ymd_opt(2026, 5, 5)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let reply = local_only().local_reply(&companion(), "10 / 0", &[], now);
    assert_eq!(reply.text, "10 / 0 = undefined (division by zero) 💡");
}

#[test]
fn greeting_depends_on_history_length() {
    let now = NaiveDate::from_ymd_opt(2026, 5, 5)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let generator = local_only();
    let early = generator.local_reply(&companion(), "hi!", &history(2), now);
    assert_eq!(early.source, ReplySource::Local("greeting"));
    let late = generator.local_reply(&companion(), "hi!", &history(3), now);
    assert_ne!(late.source, ReplySource::Local("greeting"));
}

#[test]
fn holiday_reply_follows_the_date() {
    let generator = local_only();
    let valentines = NaiveDate::from_ymd_opt(2026, 2, 14)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let reply = generator.local_reply(&memorial(), "happy valentine's", &[], valentines);
    assert!(reply.text.contains("beyond the rainbow bridge"));

    let halloween = NaiveDate::from_ymd_opt(2026, 10, 31)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let reply = generator.local_reply(&companion(), "halloween!", &[], halloween);
    assert_eq!(reply.text, "Happy Halloween! Boo! Did I scare you? 👻");
}

#[test]
fn personas_never_share_templates() {
    let now = NaiveDate::from_ymd_opt(2026, 7, 7)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();
    let generator = local_only();
    for message in ["I love you", "hello", "what's your favorite thing", "blah"] {
        let a = generator.local_reply(&companion(), message, &[], now);
        let b = generator.local_reply(&memorial(), message, &[], now);
        assert_ne!(a.text, b.text, "same reply for {message:?}");
    }
}

proptest! {
    #[test]
    fn local_reply_is_never_empty(
        message in ".{0,80}",
        turns in 0usize..6,
        pawpal in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut pet = PetProfile::new("", "", pawpal);
        pet.traits = " , ".into();
        let generator = ResponseGenerator::new(Arc::new(SeededRandom::new(seed)));
        let now = NaiveDate::from_ymd_opt(2026, 4, 12).unwrap().and_hms_opt(8, 0, 0).unwrap();
        let reply = generator.local_reply(&pet, &message, &history(turns), now);
        prop_assert!(!reply.text.trim().is_empty());
    }
}
