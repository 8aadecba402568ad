// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application layer for PawPal.
//!
//! [`PawpalApp`] ties storage, the response generator and the notification
//! scheduler together and opens per-pet sessions:
//! - [`ChatSession`] for conversation, persisted turn by turn
//! - [`CareSession`] for the care simulation, shared with the
//!   [`heartbeat`] timers behind a mutex
//!
//! The simulation and the responder never call each other; this crate is
//! the only place both are used.

pub mod backup;
pub mod care;
pub mod heartbeat;
pub mod session;
pub mod shutdown;
pub mod state;

use std::sync::Arc;

use pawpal_config::PawpalConfig;
use pawpal_core::{
    NotificationScheduler, PawpalError, PetProfile, RandomSource, ResponseBackend, SeededRandom,
    StorageAdapter, ThreadRandom,
};
use pawpal_responder::ResponseGenerator;
use tracing::info;

pub use backup::{Backup, ImportSummary};
pub use care::{CareSession, SharedCare};
pub use heartbeat::spawn_care_timers;
pub use session::{ChatReply, ChatSession};
pub use shutdown::install_signal_handler;
pub use state::AppState;

/// Everything a front end needs to drive PawPal.
pub struct PawpalApp {
    state: AppState,
    generator: Arc<ResponseGenerator>,
    notifier: Arc<dyn NotificationScheduler>,
    rng: Arc<dyn RandomSource>,
    config: PawpalConfig,
}

impl PawpalApp {
    /// Wires the app. `backends` are tried in order before the local rules.
    pub fn new(
        config: PawpalConfig,
        storage: Arc<dyn StorageAdapter>,
        backends: Vec<Arc<dyn ResponseBackend>>,
        notifier: Arc<dyn NotificationScheduler>,
    ) -> Self {
        let rng: Arc<dyn RandomSource> = match config.responder.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        info!(
            backends = backends.iter().filter(|b| b.is_enabled()).count(),
            "pawpal app ready"
        );
        let generator = ResponseGenerator::from_config(&config.responder, backends);
        Self {
            state: AppState::new(storage),
            generator: Arc::new(generator),
            notifier,
            rng,
            config,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &PawpalConfig {
        &self.config
    }

    pub fn generator(&self) -> &Arc<ResponseGenerator> {
        &self.generator
    }

    /// Opens a conversation with the current pet.
    pub async fn chat(&self) -> Result<ChatSession, PawpalError> {
        let pet = self.state.require_current_pet().await?;
        self.chat_with(pet).await
    }

    pub async fn chat_with(&self, pet: PetProfile) -> Result<ChatSession, PawpalError> {
        ChatSession::open(pet, self.state.storage().clone(), self.generator.clone()).await
    }

    /// Loads the care session for the current pet.
    pub async fn care(&self) -> Result<CareSession, PawpalError> {
        let pet = self.state.require_current_pet().await?;
        self.care_for(pet).await
    }

    pub async fn care_for(&self, pet: PetProfile) -> Result<CareSession, PawpalError> {
        CareSession::load(
            pet,
            self.state.storage().clone(),
            self.notifier.clone(),
            self.rng.clone(),
            &self.config.simulation,
        )
        .await
    }
}
