// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests of the application layer over temp SQLite storage.

use std::sync::Arc;

use pawpal_agent::{PawpalApp, backup};
use pawpal_core::{FeedingTime, PetProfile, ResponseBackend, StorageAdapter};
use pawpal_responder::ReplySource;
use pawpal_sim::{ActionOutcome, CareAction};
use pawpal_test_utils::TestHarness;

fn app(h: &TestHarness, backends: Vec<Arc<dyn ResponseBackend>>) -> PawpalApp {
    PawpalApp::new(h.config.clone(), h.storage.clone(), backends, h.notifier.clone())
}

#[tokio::test]
async fn chat_uses_backend_then_falls_back() {
    let h = TestHarness::builder()
        .with_mock_responses(vec!["Woof from the cloud".into()])
        .build()
        .await
        .unwrap();
    let backend: Arc<dyn ResponseBackend> = h.backend.clone();
    let app = app(&h, vec![backend]);
    app.state()
        .create_pet(PetProfile::new("Rex", "dog", true))
        .await
        .unwrap();

    let mut chat = app.chat().await.unwrap();
    let reply = chat.send("hello").await.unwrap();
    assert_eq!(reply.turn.text, "Woof from the cloud");
    assert_eq!(reply.source, Some(ReplySource::Remote("mock".into())));
}

#[tokio::test]
async fn failing_backend_degrades_to_local_rules() {
    let h = TestHarness::builder().with_failing_backend().build().await.unwrap();
    let backend: Arc<dyn ResponseBackend> = h.backend.clone();
    let app = app(&h, vec![backend]);
    app.state()
        .create_pet(PetProfile::new("Shadow", "cat", false))
        .await
        .unwrap();

    let mut chat = app.chat().await.unwrap();
    let reply = chat.send("9 * 9").await.unwrap();
    assert_eq!(reply.turn.text, "9 * 9 = 81 💫");
    assert_eq!(h.backend.calls(), 1);
}

#[tokio::test]
async fn sessions_need_a_current_pet() {
    let h = TestHarness::builder().build().await.unwrap();
    let app = app(&h, Vec::new());
    assert!(app.chat().await.is_err());
    assert!(app.care().await.is_err());
}

#[tokio::test]
async fn care_state_survives_a_restart() {
    let h = TestHarness::builder().build().await.unwrap();
    let pet = {
        let app = app(&h, Vec::new());
        let pet = app
            .state()
            .create_pet(PetProfile::new("Rex", "dog", true))
            .await
            .unwrap();
        let mut care = app.care().await.unwrap();
        let outcome = care.perform(CareAction::Walk).await.unwrap();
        assert!(matches!(outcome, ActionOutcome::Performed(_)));
        care.add_feeding_time(FeedingTime::new(7, 30).unwrap())
            .await
            .unwrap();
        pet
    };

    let app = app(&h, Vec::new());
    let care = app.care().await.unwrap();
    assert_eq!(care.pet().id, pet.id);
    assert_eq!(care.stats().hunger(), 15);
    assert_eq!(care.stats().energy(), 90);
    assert_eq!(care.achievements().total_walks, 1);
    assert_eq!(care.schedule().times(), &[FeedingTime::new(7, 30).unwrap()]);
}

#[tokio::test]
async fn export_then_import_restores_pet_and_memories() {
    let source = TestHarness::builder().build().await.unwrap();
    let app_a = app(&source, Vec::new());
    let pet = app_a
        .state()
        .create_pet(PetProfile::new("Biscuit", "dog", false))
        .await
        .unwrap();
    app_a
        .state()
        .add_memory(&pet.id, "beach day", None, None)
        .await
        .unwrap();
    let mut chat = app_a.chat().await.unwrap();
    let reply = chat.send("I miss you").await.unwrap();
    chat.promote(&reply.turn.id).await.unwrap();
    let json = backup::export(app_a.state()).await.unwrap();

    let target = TestHarness::builder().build().await.unwrap();
    let app_b = app(&target, Vec::new());
    let summary = backup::import(app_b.state(), &json).await.unwrap();
    assert_eq!(summary.pets, 1);
    assert_eq!(summary.memories, 2);

    let current = app_b.state().require_current_pet().await.unwrap();
    assert_eq!(current.name, "Biscuit");
    let memories = target.storage.list_memories(&pet.id).await.unwrap();
    assert_eq!(memories.len(), 2);
    assert!(memories.iter().any(|m| m.is_chat_message));
}

#[tokio::test]
async fn deleting_a_pet_removes_its_history() {
    let h = TestHarness::builder().build().await.unwrap();
    let app = app(&h, Vec::new());
    let pet = app
        .state()
        .create_pet(PetProfile::new("Rex", "dog", true))
        .await
        .unwrap();
    let mut chat = app.chat().await.unwrap();
    chat.send("hi").await.unwrap();

    app.state().delete_pet(&pet.id).await.unwrap();
    assert!(h.storage.list_turns(&pet.id, None).await.unwrap().is_empty());
    assert!(app.state().current_pet().await.unwrap().is_none());
}
