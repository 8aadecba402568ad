// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply generation for PawPal pets.
//!
//! [`ResponseGenerator`] tries each enabled remote backend in order and
//! falls back to a persona-specific rule engine that works offline. The
//! companion persona is playful and helpful; the memorial persona speaks
//! gently as a pet that has passed on.

pub mod calendar;
pub mod companion;
pub mod context;
pub mod generator;
pub mod knowledge;
pub mod math;
pub mod memorial;
pub mod prompt;
pub mod rules;

pub use generator::{Reply, ReplySource, ResponseGenerator, error_line, opening_line};
pub use prompt::system_prompt;
pub use rules::LocalReply;
