// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The response chain: remote backends in order, then the local rule engine.

use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use pawpal_config::model::ResponderConfig;
use pawpal_core::{
    BackendRequest, ConversationTurn, Persona, PetProfile, RandomSource, ResponseBackend,
    SeededRandom, ThreadRandom,
};
use tracing::{debug, warn};

use crate::context::{Context, DEFAULT_GREETING_LIMIT};
use crate::prompt::system_prompt;
use crate::{companion, memorial};

/// Where a reply came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource {
    /// Remote backend, by name.
    Remote(String),
    /// Local rule, by name.
    Local(&'static str),
}

impl fmt::Display for ReplySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplySource::Remote(name) => write!(f, "remote:{name}"),
            ReplySource::Local(rule) => write!(f, "local:{rule}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub source: ReplySource,
    pub text: String,
}

pub struct ResponseGenerator {
    backends: Vec<Arc<dyn ResponseBackend>>,
    rng: Arc<dyn RandomSource>,
    history_window: usize,
    greeting_limit: usize,
}

impl ResponseGenerator {
    /// A generator with no remote backends.
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self {
            backends: Vec::new(),
            rng,
            history_window: 10,
            greeting_limit: DEFAULT_GREETING_LIMIT,
        }
    }

    /// Builds from config. Backends are tried in the order given.
    pub fn from_config(config: &ResponderConfig, backends: Vec<Arc<dyn ResponseBackend>>) -> Self {
        let rng: Arc<dyn RandomSource> = match config.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Self {
            backends,
            rng,
            history_window: config.history_window,
            greeting_limit: config.greeting_history_limit,
        }
    }

    /// Appends a backend to the end of the chain.
    pub fn with_backend(mut self, backend: Arc<dyn ResponseBackend>) -> Self {
        self.backends.push(backend);
        self
    }

    pub fn with_history_window(mut self, turns: usize) -> Self {
        self.history_window = turns;
        self
    }

    /// Produces a reply. Never fails and never returns empty text.
    ///
    /// `history` holds the prior turns, oldest first, not including `message`.
    pub async fn generate(
        &self,
        pet: &PetProfile,
        message: &str,
        history: &[ConversationTurn],
    ) -> Reply {
        let mut enabled = self.backends.iter().filter(|b| b.is_enabled()).peekable();
        if enabled.peek().is_some() {
            let start = history.len().saturating_sub(self.history_window);
            let request = BackendRequest {
                system_prompt: system_prompt(pet),
                history: history[start..].to_vec(),
                message: message.to_string(),
            };
            for backend in enabled {
                match backend.complete(request.clone()).await {
                    Ok(text) if !text.trim().is_empty() => {
                        debug!(backend = backend.name(), "reply from remote backend");
                        return Reply {
                            source: ReplySource::Remote(backend.name().to_string()),
                            text,
                        };
                    }
                    Ok(_) => warn!(backend = backend.name(), "remote backend returned empty text"),
                    Err(e) => warn!(
                        backend = backend.name(),
                        error = %e,
                        "remote backend failed, falling through"
                    ),
                }
            }
        }
        self.local_reply(pet, message, history, Local::now().naive_local())
    }

    /// Runs the persona rule set at a fixed wall-clock time.
    pub fn local_reply(
        &self,
        pet: &PetProfile,
        message: &str,
        history: &[ConversationTurn],
        now: NaiveDateTime,
    ) -> Reply {
        let ctx = Context::new(pet, message, history, now, self.rng.as_ref())
            .with_greeting_limit(self.greeting_limit);
        let reply = match pet.persona() {
            Persona::Companion => companion::rules().evaluate(&ctx),
            Persona::Memorial => memorial::rules().evaluate(&ctx),
        };
        debug!(rule = reply.rule, persona = %pet.persona(), "local reply");
        Reply {
            source: ReplySource::Local(reply.rule),
            text: reply.text,
        }
    }
}

/// First message shown when a conversation opens.
pub fn opening_line(pet: &PetProfile) -> String {
    match pet.persona() {
        Persona::Companion => format!("Hey! I'm {}! What's up? 😊", pet.display_name()),
        Persona::Memorial => "Hi... I'm so glad you're here 💙".to_string(),
    }
}

/// Shown in place of a reply when the exchange could not complete.
pub fn error_line(persona: Persona) -> &'static str {
    match persona {
        Persona::Companion => "Oops! Can you say that again?",
        Persona::Memorial => "I'm having trouble hearing you right now... I'm still here 💙",
    }
}
