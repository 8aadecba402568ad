// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Care session: the simulation for the current pet, bound to storage and
//! the notification scheduler.

use std::sync::Arc;

use chrono::Utc;
use pawpal_config::model::{LoadPolicy, SimulationConfig};
use pawpal_core::{
    FeedingTime, NotificationScheduler, PawpalError, PetProfile, RandomSource, StorageAdapter,
};
use pawpal_sim::reminder::play_notification;
use pawpal_sim::{
    Achievements, ActionOutcome, CareAction, CareSnapshot, FeedingSchedule, MoodReport,
    PetSimulation, PlayReminder, SimulationStats,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// A care session shared between user commands and the timers.
pub type SharedCare = Arc<Mutex<CareSession>>;

pub struct CareSession {
    pet: PetProfile,
    sim: PetSimulation,
    schedule: FeedingSchedule,
    reminder: PlayReminder,
    storage: Arc<dyn StorageAdapter>,
    notifier: Arc<dyn NotificationScheduler>,
    rng: Arc<dyn RandomSource>,
    dirty: bool,
}

impl CareSession {
    /// Loads persisted state according to `config.on_load`.
    ///
    /// A snapshot that fails to parse is treated as absent.
    pub async fn load(
        pet: PetProfile,
        storage: Arc<dyn StorageAdapter>,
        notifier: Arc<dyn NotificationScheduler>,
        rng: Arc<dyn RandomSource>,
        config: &SimulationConfig,
    ) -> Result<Self, PawpalError> {
        let snapshot = match storage.load_care_state(&pet.id).await? {
            Some(json) => match CareSnapshot::from_json(&json) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    warn!(pet_id = %pet.id, error = %e, "ignoring malformed care snapshot");
                    None
                }
            },
            None => None,
        };

        let mut dirty = false;
        let sim = match (snapshot, config.on_load) {
            (Some(snapshot), LoadPolicy::Restore) => {
                let mut sim = PetSimulation::from_snapshot(snapshot);
                if config.decay_enabled {
                    let hours = sim.decay_to(Utc::now());
                    if hours > 0 {
                        info!(pet_id = %pet.id, hours, "applied decay for time away");
                        dirty = true;
                    }
                }
                sim
            }
            (Some(_), LoadPolicy::Reset) => {
                warn!(pet_id = %pet.id, "discarding persisted care state on load");
                dirty = true;
                PetSimulation::default()
            }
            (None, _) => PetSimulation::default(),
        };

        let schedule = FeedingSchedule::new(storage.load_feeding_schedule(&pet.id).await?);
        debug!(
            pet_id = %pet.id,
            policy = %config.on_load,
            feeding_times = schedule.times().len(),
            "care session loaded"
        );

        Ok(Self {
            pet,
            sim,
            schedule,
            reminder: PlayReminder::default(),
            storage,
            notifier,
            rng,
            dirty,
        })
    }

    pub fn pet(&self) -> &PetProfile {
        &self.pet
    }

    pub fn stats(&self) -> &SimulationStats {
        self.sim.stats()
    }

    pub fn achievements(&self) -> &Achievements {
        self.sim.achievements()
    }

    pub fn schedule(&self) -> &FeedingSchedule {
        &self.schedule
    }

    pub fn mood_report(&self) -> MoodReport {
        self.sim.mood_report(&self.pet)
    }

    /// Whether there are changes not yet saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Runs a care action. A performed action is saved immediately and a
    /// milestone is announced through the notifier.
    ///
    /// Once the simulation has changed, the outcome is always returned: a
    /// failed save leaves the session dirty for the autosave timer, and a
    /// failed announcement is only logged.
    pub async fn perform(&mut self, action: CareAction) -> Result<ActionOutcome, PawpalError> {
        let outcome = self.sim.perform(action, &self.pet, self.rng.as_ref());
        if let ActionOutcome::Performed(performed) = &outcome {
            self.dirty = true;
            if let Err(e) = self.save().await {
                warn!(pet_id = %self.pet.id, error = %e, "failed to save care state, autosave will retry");
            }
            if let Some(milestone) = performed.milestone {
                info!(pet_id = %self.pet.id, count = milestone.count, kind = %milestone.kind, "milestone reached");
                if let Err(e) = self
                    .notifier
                    .notify_now(milestone.title(), &milestone.message())
                    .await
                {
                    warn!(pet_id = %self.pet.id, error = %e, "failed to announce milestone");
                }
            }
        }
        Ok(outcome)
    }

    /// Writes the current snapshot to storage.
    pub async fn save(&mut self) -> Result<(), PawpalError> {
        let json = self.sim.snapshot().to_json()?;
        self.storage.save_care_state(&self.pet.id, &json).await?;
        self.dirty = false;
        debug!(pet_id = %self.pet.id, "care state saved");
        Ok(())
    }

    /// Adds a daily feeding time, persists the schedule and re-registers it.
    ///
    /// Returns `false` if the time was already scheduled.
    pub async fn add_feeding_time(&mut self, at: FeedingTime) -> Result<bool, PawpalError> {
        if !self.schedule.add(at) {
            return Ok(false);
        }
        self.store_and_register_schedule().await?;
        Ok(true)
    }

    /// Removes the feeding time at `index` (as listed).
    pub async fn remove_feeding_time(
        &mut self,
        index: usize,
    ) -> Result<FeedingTime, PawpalError> {
        let removed = self.schedule.remove(index).ok_or_else(|| {
            PawpalError::not_found("feeding time", (index + 1).to_string())
        })?;
        self.store_and_register_schedule().await?;
        Ok(removed)
    }

    /// Cancels every notification and registers one per feeding time.
    pub async fn register_schedule(&self) -> Result<usize, PawpalError> {
        self.schedule
            .register(self.notifier.as_ref(), self.pet.display_name())
            .await
    }

    /// Sends the play reminder once each time energy becomes full.
    pub async fn check_energy(&mut self) -> Result<bool, PawpalError> {
        if !self.reminder.observe(self.sim.stats().energy()) {
            return Ok(false);
        }
        let (title, body) = play_notification(self.pet.display_name());
        self.notifier.notify_now(&title, &body).await?;
        debug!(pet_id = %self.pet.id, "play reminder sent");
        Ok(true)
    }

    async fn store_and_register_schedule(&self) -> Result<(), PawpalError> {
        self.storage
            .save_feeding_schedule(&self.pet.id, self.schedule.times())
            .await?;
        self.register_schedule().await?;
        Ok(())
    }

    pub fn into_shared(self) -> SharedCare {
        Arc::new(Mutex::new(self))
    }
}
