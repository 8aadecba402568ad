// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for PawPal integration tests.
//!
//! Provides mock adapters and a temp-database harness for fast,
//! deterministic tests without network access.
//!
//! # Components
//!
//! - [`MockBackend`] - Remote backend stand-in with queued replies or forced failures
//! - [`RecordingNotifier`] - Notification scheduler that records every call
//! - [`TestHarness`] - Temp SQLite storage plus the mocks above

pub mod harness;
pub mod mock_backend;
pub mod mock_notifier;

pub use harness::TestHarness;
pub use mock_backend::MockBackend;
pub use mock_notifier::RecordingNotifier;
