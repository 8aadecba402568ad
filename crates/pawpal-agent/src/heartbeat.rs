// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Background timers for a care session: periodic autosave and the
//! full-energy play reminder check.

use std::time::Duration;

use pawpal_config::model::SimulationConfig;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::care::SharedCare;

/// Spawns the care timers. The task saves once more when `cancel` fires.
pub fn spawn_care_timers(
    care: SharedCare,
    config: &SimulationConfig,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let autosave_every = Duration::from_secs(config.autosave_secs.max(1));
    let energy_every = Duration::from_secs(config.energy_check_secs.max(1));

    tokio::spawn(async move {
        let mut autosave = tokio::time::interval(autosave_every);
        let mut energy = tokio::time::interval(energy_every);
        // Skip the immediate first ticks.
        autosave.tick().await;
        energy.tick().await;

        info!(
            autosave_secs = autosave_every.as_secs(),
            energy_check_secs = energy_every.as_secs(),
            "care timers started"
        );

        loop {
            tokio::select! {
                _ = autosave.tick() => {
                    let mut session = care.lock().await;
                    if session.is_dirty() {
                        if let Err(e) = session.save().await {
                            warn!(error = %e, "autosave failed (non-fatal)");
                        }
                    } else {
                        debug!("autosave skipped: nothing changed");
                    }
                }
                _ = energy.tick() => {
                    if let Err(e) = care.lock().await.check_energy().await {
                        warn!(error = %e, "play reminder failed (non-fatal)");
                    }
                }
                _ = cancel.cancelled() => {
                    if let Err(e) = care.lock().await.save().await {
                        warn!(error = %e, "final care save failed");
                    }
                    info!("care timers shutting down");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pawpal_core::{FixedRandom, PetProfile, StorageAdapter};
    use pawpal_sim::CareSnapshot;
    use pawpal_test_utils::TestHarness;

    use super::*;
    use crate::care::CareSession;

    async fn shared(h: &TestHarness) -> (PetProfile, SharedCare) {
        let pet = PetProfile::new("Luna", "cat", true);
        h.storage.upsert_pet(&pet).await.unwrap();
        let care = CareSession::load(
            pet.clone(),
            h.storage.clone(),
            h.notifier.clone(),
            Arc::new(FixedRandom(0)),
            &SimulationConfig::default(),
        )
        .await
        .unwrap();
        (pet, care.into_shared())
    }

    #[tokio::test]
    async fn energy_check_sends_play_reminder() {
        let h = TestHarness::builder().build().await.unwrap();
        let (_pet, care) = shared(&h).await;
        let config = SimulationConfig {
            energy_check_secs: 1,
            ..SimulationConfig::default()
        };
        let cancel = CancellationToken::new();
        let handle = spawn_care_timers(care, &config, cancel.clone());

        tokio::time::sleep(Duration::from_millis(2500)).await;
        cancel.cancel();
        handle.await.unwrap();

        let sent = h.notifier.sent_now().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "Time to play with Luna!");
    }

    #[tokio::test]
    async fn cancel_saves_state() {
        let h = TestHarness::builder().build().await.unwrap();
        let (pet, care) = shared(&h).await;
        assert!(h.storage.load_care_state(&pet.id).await.unwrap().is_none());

        let cancel = CancellationToken::new();
        let handle = spawn_care_timers(care, &SimulationConfig::default(), cancel.clone());
        cancel.cancel();
        handle.await.unwrap();

        let json = h.storage.load_care_state(&pet.id).await.unwrap().unwrap();
        let snapshot = CareSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot.stats.hunger(), 30);
    }
}
