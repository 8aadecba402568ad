// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the PawPal engine.
//!
//! This crate provides the shared data model, the error type, the adapter
//! traits implemented by storage, remote backends and notifiers, and the
//! injectable random source used for template selection.

pub mod error;
pub mod random;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PawpalError;
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use types::{
    AdapterType, BackendRequest, ConversationTurn, FeedingTime, HealthStatus, Memory, Persona,
    PetId, PetProfile, Speaker,
};

pub use traits::{NotificationScheduler, PluginAdapter, ResponseBackend, StorageAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawpal_error_has_all_variants() {
        let _config = PawpalError::Config("test".into());
        let _storage = PawpalError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _backend = PawpalError::backend("test");
        let _not_found = PawpalError::not_found("pet", "p1");
        let _invalid = PawpalError::InvalidInput("test".into());
        let _timeout = PawpalError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = PawpalError::Internal("test".into());
    }

    #[test]
    fn not_found_message_names_kind() {
        let err = PawpalError::not_found("memory", "m-1");
        assert_eq!(err.to_string(), "memory not found: m-1");
    }

    #[test]
    fn adapter_type_round_trips_through_strings() {
        use std::str::FromStr;

        for variant in [AdapterType::Backend, AdapterType::Storage, AdapterType::Notifier] {
            let s = variant.to_string();
            let parsed = AdapterType::from_str(&s).expect("should parse back");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn health_status_variants() {
        let healthy = HealthStatus::Healthy;
        assert_ne!(HealthStatus::Degraded("slow".into()), healthy);
        assert_ne!(HealthStatus::Unhealthy("down".into()), healthy);
    }

    #[test]
    fn all_traits_are_exported() {
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_backend<T: ResponseBackend>() {}
        fn _assert_storage<T: StorageAdapter>() {}
        fn _assert_notifier<T: NotificationScheduler>() {}
    }
}
