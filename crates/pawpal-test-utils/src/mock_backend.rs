// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock remote backend for deterministic testing.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use pawpal_core::{
    AdapterType, BackendRequest, HealthStatus, PawpalError, PluginAdapter, ResponseBackend,
};

/// A backend that returns queued replies, or fails every call.
///
/// Replies are popped from a FIFO queue. When the queue is empty,
/// `"mock response"` is returned. Every request is recorded.
pub struct MockBackend {
    name: String,
    enabled: bool,
    failing: bool,
    responses: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<BackendRequest>>>,
    calls: AtomicUsize,
}

impl MockBackend {
    /// An enabled backend with an empty reply queue.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            failing: false,
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            calls: AtomicUsize::new(0),
        }
    }

    /// An enabled backend pre-loaded with replies.
    pub fn with_responses(name: &str, responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            ..Self::new(name)
        }
    }

    /// An enabled backend whose every call returns a backend error.
    pub fn failing(name: &str) -> Self {
        Self {
            failing: true,
            ..Self::new(name)
        }
    }

    /// A backend that reports itself as disabled.
    pub fn disabled(name: &str) -> Self {
        Self {
            enabled: false,
            ..Self::new(name)
        }
    }

    pub async fn add_response(&self, text: String) {
        self.responses.lock().await.push_back(text);
    }

    /// Number of `complete` calls made, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request seen, oldest first.
    pub async fn requests(&self) -> Vec<BackendRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl PluginAdapter for MockBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Backend
    }

    async fn health_check(&self) -> Result<HealthStatus, PawpalError> {
        if self.failing {
            Ok(HealthStatus::Unhealthy("configured to fail".into()))
        } else {
            Ok(HealthStatus::Healthy)
        }
    }

    async fn shutdown(&self) -> Result<(), PawpalError> {
        Ok(())
    }
}

#[async_trait]
impl ResponseBackend for MockBackend {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn complete(&self, request: BackendRequest) -> Result<String, PawpalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().await.push(request);
        if self.failing {
            return Err(PawpalError::backend(format!("{} is down", self.name)));
        }
        Ok(self
            .responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock response".to_string()))
    }
}
