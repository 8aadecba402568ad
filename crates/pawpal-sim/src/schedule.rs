// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feeding schedule and its registration with the notification scheduler.

use pawpal_core::{FeedingTime, NotificationScheduler, PawpalError};
use tracing::{debug, info};

/// Title and body of a feeding reminder.
pub fn feeding_notification(pet_name: &str) -> (String, String) {
    (
        format!("Time to feed {pet_name}!"),
        "Your pet is hungry. Don't forget to feed! 🐾🍖".to_string(),
    )
}

/// Ordered list of daily feeding times for one pet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedingSchedule {
    times: Vec<FeedingTime>,
}

impl FeedingSchedule {
    pub fn new(times: Vec<FeedingTime>) -> Self {
        Self { times }
    }

    pub fn times(&self) -> &[FeedingTime] {
        &self.times
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Appends a time. Returns `false` if the same time is already scheduled.
    pub fn add(&mut self, at: FeedingTime) -> bool {
        if self.times.contains(&at) {
            return false;
        }
        self.times.push(at);
        true
    }

    /// Removes the entry at `index` (as listed), if present.
    pub fn remove(&mut self, index: usize) -> Option<FeedingTime> {
        (index < self.times.len()).then(|| self.times.remove(index))
    }

    /// Replaces every scheduled notification with one daily reminder per entry.
    ///
    /// Returns the number of reminders registered.
    pub async fn register(
        &self,
        scheduler: &dyn NotificationScheduler,
        pet_name: &str,
    ) -> Result<usize, PawpalError> {
        scheduler.cancel_all().await?;
        let (title, body) = feeding_notification(pet_name);
        for at in &self.times {
            scheduler.schedule_daily(*at, &title, &body).await?;
            debug!(time = %at, pet = pet_name, "feeding reminder scheduled");
        }
        info!(count = self.times.len(), pet = pet_name, "feeding schedule registered");
        Ok(self.times.len())
    }
}
