// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A conversation with one pet.
//!
//! The session owns the in-memory history and mirrors every turn to
//! storage. `send` takes `&mut self`, so one session never has two
//! requests in flight.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use pawpal_core::{ConversationTurn, Memory, PawpalError, PetProfile, Speaker, StorageAdapter};
use pawpal_responder::{ReplySource, ResponseGenerator, error_line, opening_line};
use tracing::{debug, error, info, warn};

/// What the pet said back, and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub turn: ConversationTurn,
    /// `None` when the error line was used.
    pub source: Option<ReplySource>,
}

pub struct ChatSession {
    pet: PetProfile,
    storage: Arc<dyn StorageAdapter>,
    generator: Arc<ResponseGenerator>,
    history: Vec<ConversationTurn>,
}

impl ChatSession {
    /// Loads the pet's history. A pet with no history gets the opening line.
    pub async fn open(
        pet: PetProfile,
        storage: Arc<dyn StorageAdapter>,
        generator: Arc<ResponseGenerator>,
    ) -> Result<Self, PawpalError> {
        let mut history = storage.list_turns(&pet.id, None).await?;
        if history.is_empty() {
            let greeting = ConversationTurn::new(Speaker::Pet, opening_line(&pet));
            storage.append_turn(&pet.id, &greeting).await?;
            history.push(greeting);
        }
        debug!(pet_id = %pet.id, turns = history.len(), "chat session opened");
        Ok(Self {
            pet,
            storage,
            generator,
            history,
        })
    }

    pub fn pet(&self) -> &PetProfile {
        &self.pet
    }

    /// All turns, oldest first.
    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    /// Sends a user message and returns the pet's reply.
    ///
    /// Only blank input is an error. Storage failures are logged and the
    /// conversation continues in memory; a failure while generating
    /// yields the persona's error line.
    pub async fn send(&mut self, message: &str) -> Result<ChatReply, PawpalError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(PawpalError::InvalidInput("message must not be empty".into()));
        }

        let user_turn = ConversationTurn::new(Speaker::User, message);
        self.persist(&user_turn).await;

        let generated = AssertUnwindSafe(self.generator.generate(&self.pet, message, &self.history))
            .catch_unwind()
            .await;
        self.history.push(user_turn);

        let (text, source) = match generated {
            Ok(reply) => (reply.text, Some(reply.source)),
            Err(_) => {
                error!(pet_id = %self.pet.id, "reply generation panicked");
                (error_line(self.pet.persona()).to_string(), None)
            }
        };

        let pet_turn = ConversationTurn::new(Speaker::Pet, text);
        self.persist(&pet_turn).await;
        self.history.push(pet_turn.clone());

        if let Some(source) = &source {
            debug!(pet_id = %self.pet.id, %source, "reply generated");
        }
        Ok(ChatReply {
            turn: pet_turn,
            source,
        })
    }

    /// Adds a system note (for example a care event) to the conversation.
    pub async fn note(&mut self, text: &str) {
        let turn = ConversationTurn::new(Speaker::System, text);
        self.persist(&turn).await;
        self.history.push(turn);
    }

    /// Saves a turn from this conversation to the journal.
    pub async fn promote(&self, turn_id: &str) -> Result<Memory, PawpalError> {
        let turn = self
            .history
            .iter()
            .find(|t| t.id == turn_id)
            .ok_or_else(|| PawpalError::not_found("turn", turn_id))?;
        let memory = Memory::from_turn(self.pet.id.clone(), turn);
        self.storage.insert_memory(&memory).await?;
        info!(pet_id = %self.pet.id, memory_id = %memory.id, "turn saved as memory");
        Ok(memory)
    }

    async fn persist(&self, turn: &ConversationTurn) {
        if let Err(e) = self.storage.append_turn(&self.pet.id, turn).await {
            warn!(pet_id = %self.pet.id, error = %e, "failed to persist conversation turn");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawpal_core::FixedRandom;
    use pawpal_test_utils::{MockBackend, TestHarness};

    async fn setup(pet: PetProfile, generator: ResponseGenerator) -> (TestHarness, ChatSession) {
        let harness = TestHarness::builder().build().await.unwrap();
        harness.storage.upsert_pet(&pet).await.unwrap();
        let session = ChatSession::open(pet, harness.storage.clone(), Arc::new(generator))
            .await
            .unwrap();
        (harness, session)
    }

    fn local() -> ResponseGenerator {
        ResponseGenerator::new(Arc::new(FixedRandom(0)))
    }

    #[tokio::test]
    async fn new_conversation_starts_with_opening_line() {
        let (_h, session) = setup(PetProfile::new("Bo", "dog", true), local()).await;
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].text, "Hey! I'm Bo! What's up? 😊");
        assert_eq!(session.history()[0].from, Speaker::Pet);
    }

    #[tokio::test]
    async fn send_persists_both_turns() {
        let pet = PetProfile::new("Bo", "dog", true);
        let (h, mut session) = setup(pet.clone(), local()).await;

        let reply = session.send("  7 * 6  ").await.unwrap();
        assert_eq!(reply.turn.text, "7 * 6 = 42 💡");
        assert_eq!(reply.source, Some(ReplySource::Local("knowledge")));

        let stored = h.storage.list_turns(&pet.id, None).await.unwrap();
        let texts: Vec<_> = stored.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Hey! I'm Bo! What's up? 😊", "7 * 6", "7 * 6 = 42 💡"]);
    }

    #[tokio::test]
    async fn reopening_keeps_history() {
        let pet = PetProfile::new("Bo", "dog", false);
        let (h, mut session) = setup(pet.clone(), local()).await;
        session.send("hello").await.unwrap();

        let reopened = ChatSession::open(pet, h.storage.clone(), Arc::new(local()))
            .await
            .unwrap();
        assert_eq!(reopened.history().len(), 3);
    }

    #[tokio::test]
    async fn remote_backend_receives_prior_turns_only() {
        let backend = Arc::new(MockBackend::with_responses("openai", vec!["Woof!".into()]));
        let generator = local().with_backend(backend.clone());
        let (_h, mut session) = setup(PetProfile::new("Bo", "dog", true), generator).await;

        let reply = session.send("hi").await.unwrap();
        assert_eq!(reply.turn.text, "Woof!");
        let requests = backend.requests().await;
        assert_eq!(requests[0].history.len(), 1);
        assert_eq!(requests[0].message, "hi");
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let (_h, mut session) = setup(PetProfile::new("Bo", "dog", true), local()).await;
        assert!(session.send("   ").await.is_err());
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test]
    async fn promote_turn_to_memory() {
        let pet = PetProfile::new("Bo", "dog", true);
        let (h, mut session) = setup(pet.clone(), local()).await;
        let reply = session.send("2 + 2").await.unwrap();

        let memory = session.promote(&reply.turn.id).await.unwrap();
        assert!(memory.is_chat_message);
        assert_eq!(memory.text, "2 + 2 = 4 💡");
        assert_eq!(h.storage.list_memories(&pet.id).await.unwrap().len(), 1);
        assert!(session.promote("nope").await.is_err());
    }
}
