// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod backend;
pub mod notifier;
pub mod storage;

pub use adapter::PluginAdapter;
pub use backend::ResponseBackend;
pub use notifier::NotificationScheduler;
pub use storage::StorageAdapter;
