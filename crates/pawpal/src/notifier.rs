// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification scheduler for the terminal.
//!
//! Immediate notifications are printed and logged. Daily reminders are
//! kept in memory and reported at `info` when registered; there is no OS
//! notification center to hand them to.

use std::sync::Mutex;

use async_trait::async_trait;
use colored::Colorize;
use pawpal_core::{
    AdapterType, FeedingTime, HealthStatus, NotificationScheduler, PawpalError, PluginAdapter,
};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReminder {
    pub at: FeedingTime,
    pub title: String,
}

#[derive(Default)]
pub struct TerminalNotifier {
    daily: Mutex<Vec<DailyReminder>>,
    quiet: bool,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that only logs, for machine-readable output modes.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    pub fn daily(&self) -> Vec<DailyReminder> {
        self.daily
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    fn with_daily<T>(&self, f: impl FnOnce(&mut Vec<DailyReminder>) -> T) -> Result<T, PawpalError> {
        let mut guard = self
            .daily
            .lock()
            .map_err(|_| PawpalError::Internal("notifier state poisoned".into()))?;
        Ok(f(&mut guard))
    }
}

#[async_trait]
impl PluginAdapter for TerminalNotifier {
    fn name(&self) -> &str {
        "terminal-notifier"
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
impl NotificationScheduler for TerminalNotifier {
    async fn cancel_all(&self) -> Result<(), PawpalError> {
        let cancelled = self.with_daily(|d| {
            let n = d.len();
            d.clear();
            n
        })?;
        info!(cancelled, "scheduled notifications cancelled");
        Ok(())
    }

    async fn schedule_daily(
        &self,
        at: FeedingTime,
        title: &str,
        _body: &str,
    ) -> Result<(), PawpalError> {
        self.with_daily(|d| {
            d.push(DailyReminder {
                at,
                title: title.to_string(),
            })
        })?;
        info!(time = %at, title, "daily notification scheduled");
        Ok(())
    }

    async fn notify_now(&self, title: &str, body: &str) -> Result<(), PawpalError> {
        info!(title, body, "notification");
        if !self.quiet {
            println!("{} {}\n   {}", "🔔".yellow(), title.bold(), body);
        }
        Ok(())
    }
}
