// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote response backend trait (OpenAI, Grok, etc.).

use async_trait::async_trait;

use crate::error::PawpalError;
use crate::traits::adapter::PluginAdapter;
use crate::types::BackendRequest;

/// A remote chat backend that can produce a pet reply.
///
/// Implementations return an error for every failure mode, including a
/// missing API key or an empty reply; callers decide how to degrade.
#[async_trait]
pub trait ResponseBackend: PluginAdapter {
    /// Whether the backend is switched on in configuration.
    fn is_enabled(&self) -> bool;

    /// Sends the request and returns the reply text.
    async fn complete(&self, request: BackendRequest) -> Result<String, PawpalError>;
}
