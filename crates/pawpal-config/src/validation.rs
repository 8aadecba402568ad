// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::{BackendConfig, PawpalConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure rather than stopping at the first.
pub fn validate_config(config: &PawpalConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` must be one of: {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    validate_backend("openai", &config.openai, &mut errors);
    validate_backend("grok", &config.grok, &mut errors);

    if config.simulation.autosave_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "simulation.autosave_secs must be greater than 0".to_string(),
        });
    }
    if config.simulation.energy_check_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "simulation.energy_check_secs must be greater than 0".to_string(),
        });
    }

    if config.responder.history_window == 0 {
        errors.push(ConfigError::Validation {
            message: "responder.history_window must be greater than 0".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn validate_backend(section: &str, backend: &BackendConfig, errors: &mut Vec<ConfigError>) {
    if backend.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: format!("{section}.max_tokens must be greater than 0"),
        });
    }
    if !(0.0..=2.0).contains(&backend.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "{section}.temperature must be between 0.0 and 2.0, got {}",
                backend.temperature
            ),
        });
    }
    if backend.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: format!("{section}.timeout_secs must be greater than 0"),
        });
    }
    if let Some(url) = &backend.base_url
        && !(url.starts_with("http://") || url.starts_with("https://"))
    {
        errors.push(ConfigError::Validation {
            message: format!("{section}.base_url `{url}` must start with http:// or https://"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&PawpalConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = PawpalConfig::default();
        config.app.log_level = "loud".into();
        config.storage.database_path = "  ".into();
        config.grok.temperature = 3.5;
        config.simulation.autosave_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4, "got: {errors:?}");
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = PawpalConfig::default();
        config.openai.base_url = Some("ftp://example.com".into());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("openai.base_url"))
        ));
    }
}
