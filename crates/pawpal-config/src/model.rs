// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the PawPal engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level PawPal configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PawpalConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Primary remote backend (OpenAI chat completions).
    #[serde(default)]
    pub openai: BackendConfig,

    /// Secondary remote backend (Grok, OpenAI-compatible API).
    #[serde(default)]
    pub grok: BackendConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Care simulation timers and load behavior.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Local response generator settings.
    #[serde(default)]
    pub responder: ResponderConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in the shell banner.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "pawpal".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Remote chat-completion backend configuration.
///
/// `model` and `base_url` fall back to per-provider defaults when unset.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Whether this backend is tried before the local responder.
    #[serde(default)]
    pub enabled: bool,

    /// API key. `None` falls back to the provider's environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name override.
    #[serde(default)]
    pub model: Option<String>,

    /// API base URL override (without the `/chat/completions` suffix).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Maximum tokens in the reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            model: None,
            base_url: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_max_tokens() -> u32 {
    200
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    30
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("pawpal").join("pawpal.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("pawpal.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// What the care session does with a persisted snapshot when it loads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Continue from the persisted stats and counters.
    #[default]
    Restore,
    /// Discard persisted stats and start from the fixed defaults.
    Reset,
}

/// Care simulation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Behavior when a persisted snapshot exists on load.
    #[serde(default)]
    pub on_load: LoadPolicy,

    /// Seconds between automatic snapshot saves.
    #[serde(default = "default_autosave_secs")]
    pub autosave_secs: u64,

    /// Seconds between energy-full reminder checks.
    #[serde(default = "default_energy_check_secs")]
    pub energy_check_secs: u64,

    /// Apply hourly stat decay for time elapsed since the last save.
    #[serde(default)]
    pub decay_enabled: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            on_load: LoadPolicy::default(),
            autosave_secs: default_autosave_secs(),
            energy_check_secs: default_energy_check_secs(),
            decay_enabled: false,
        }
    }
}

fn default_autosave_secs() -> u64 {
    30
}

fn default_energy_check_secs() -> u64 {
    30 * 60
}

/// Local response generator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResponderConfig {
    /// Number of prior turns forwarded to remote backends.
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Greetings are only answered as greetings below this history length.
    #[serde(default = "default_greeting_history_limit")]
    pub greeting_history_limit: usize,

    /// Fixed seed for template selection. Unset means OS randomness.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            history_window: default_history_window(),
            greeting_history_limit: default_greeting_history_limit(),
            seed: None,
        }
    }
}

fn default_history_window() -> usize {
    10
}

fn default_greeting_history_limit() -> usize {
    3
}
