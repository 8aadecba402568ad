// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification scheduler that records calls instead of delivering them.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use pawpal_core::{
    AdapterType, FeedingTime, HealthStatus, NotificationScheduler, PawpalError, PluginAdapter,
};

/// One recorded scheduler call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierEvent {
    CancelAll,
    Daily {
        at: FeedingTime,
        title: String,
        body: String,
    },
    Now {
        title: String,
        body: String,
    },
}

#[derive(Default, Clone)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<NotifierEvent>>>,
    fail_now: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose `notify_now` always fails without recording.
    pub fn failing() -> Self {
        Self {
            fail_now: true,
            ..Self::default()
        }
    }

    pub async fn events(&self) -> Vec<NotifierEvent> {
        self.events.lock().await.clone()
    }

    /// Only the immediate notifications.
    pub async fn sent_now(&self) -> Vec<(String, String)> {
        self.events
            .lock()
            .await
            .iter()
            .filter_map(|e| match e {
                NotifierEvent::Now { title, body } => Some((title.clone(), body.clone())),
                _ => None,
            })
            .collect()
    }

    pub async fn clear(&self) {
        self.events.lock().await.clear();
    }
}

#[async_trait]
impl PluginAdapter for RecordingNotifier {
    fn name(&self) -> &str {
        "recording-notifier"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notifier
    }

    async fn health_check(&self) -> Result<HealthStatus, PawpalError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), PawpalError> {
        Ok(())
    }
}

#[async_trait]
impl NotificationScheduler for RecordingNotifier {
    async fn cancel_all(&self) -> Result<(), PawpalError> {
        self.events.lock().await.push(NotifierEvent::CancelAll);
        Ok(())
    }

    async fn schedule_daily(
        &self,
        at: FeedingTime,
        title: &str,
        body: &str,
    ) -> Result<(), PawpalError> {
        self.events.lock().await.push(NotifierEvent::Daily {
            at,
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }

    async fn notify_now(&self, title: &str, body: &str) -> Result<(), PawpalError> {
        if self.fail_now {
            return Err(PawpalError::Internal("notification delivery failed".into()));
        }
        self.events.lock().await.push(NotifierEvent::Now {
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
