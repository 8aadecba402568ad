// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./pawpal.toml` > `~/.config/pawpal/pawpal.toml` > `/etc/pawpal/pawpal.toml`
//! with environment variable overrides via `PAWPAL_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::PawpalConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pawpal/pawpal.toml` (system-wide)
/// 3. `~/.config/pawpal/pawpal.toml` (user XDG config)
/// 4. `./pawpal.toml` (local directory)
/// 5. `PAWPAL_*` environment variables
pub fn load_config() -> Result<PawpalConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<PawpalConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PawpalConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PawpalConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PawpalConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PawpalConfig::default()))
        .merge(Toml::file("/etc/pawpal/pawpal.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("pawpal/pawpal.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("pawpal.toml"))
        .merge(env_provider())
}

/// Environment provider with explicit section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that keys containing
/// underscores survive: `PAWPAL_OPENAI_API_KEY` maps to `openai.api_key`.
fn env_provider() -> Env {
    Env::prefixed("PAWPAL_").map(|key| {
        let mapped = map_env_key(key.as_str());
        mapped.into()
    })
}

const SECTIONS: &[&str] = &[
    "app",
    "openai",
    "grok",
    "storage",
    "simulation",
    "responder",
];

/// Maps a lowercased, prefix-stripped env var name onto a dotted config path.
fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
