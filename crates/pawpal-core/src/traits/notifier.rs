// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification scheduler trait for reminder delivery.

use async_trait::async_trait;

use crate::error::PawpalError;
use crate::traits::adapter::PluginAdapter;
use crate::types::FeedingTime;

/// Delivers local notifications on behalf of the simulation.
///
/// Actual delivery (OS notification center, terminal bell, log line) is
/// the implementation's concern.
#[async_trait]
pub trait NotificationScheduler: PluginAdapter {
    /// Cancels every previously scheduled notification.
    async fn cancel_all(&self) -> Result<(), PawpalError>;

    /// Registers a notification that repeats daily at the given time.
    async fn schedule_daily(
        &self,
        at: FeedingTime,
        title: &str,
        body: &str,
    ) -> Result<(), PawpalError>;

    /// Delivers a notification immediately.
    async fn notify_now(&self, title: &str, body: &str) -> Result<(), PawpalError>;
}
