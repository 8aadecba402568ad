// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the PawPal configuration system.

use pawpal_config::diagnostic::ConfigError;
use pawpal_config::{LoadPolicy, load_and_validate_str, load_config, load_config_from_str};

/// Valid TOML with every section deserializes successfully.
#[test]
fn valid_toml_deserializes_into_pawpal_config() {
    let toml = r#"
[app]
name = "pawpal-dev"
log_level = "debug"

[openai]
enabled = true
api_key = "sk-test"
model = "gpt-4o-mini"

[grok]
enabled = true
base_url = "https://api.x.ai/v1"
max_tokens = 120
temperature = 0.2

[storage]
database_path = "/tmp/pawpal-test.db"
wal_mode = false

[simulation]
on_load = "reset"
autosave_secs = 10
energy_check_secs = 60
decay_enabled = true

[responder]
history_window = 6
greeting_history_limit = 2
seed = 42
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.name, "pawpal-dev");
    assert_eq!(config.app.log_level, "debug");
    assert!(config.openai.enabled);
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.openai.model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(config.openai.max_tokens, 200, "unset fields keep defaults");
    assert_eq!(config.grok.base_url.as_deref(), Some("https://api.x.ai/v1"));
    assert_eq!(config.grok.max_tokens, 120);
    assert_eq!(config.storage.database_path, "/tmp/pawpal-test.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.simulation.on_load, LoadPolicy::Reset);
    assert_eq!(config.simulation.autosave_secs, 10);
    assert!(config.simulation.decay_enabled);
    assert_eq!(config.responder.history_window, 6);
    assert_eq!(config.responder.seed, Some(42));
}

/// An empty document yields the compiled defaults.
#[test]
fn empty_toml_yields_defaults() {
    let config = load_and_validate_str("").expect("empty config should validate");
    assert_eq!(config.app.name, "pawpal");
    assert!(!config.openai.enabled);
    assert_eq!(config.simulation.on_load, LoadPolicy::Restore);
}

/// Unknown key produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_key_has_suggestion_and_valid_keys() {
    let toml = r#"
[openai]
enabeld = true
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "enabeld"
                && suggestion.as_deref() == Some("enabled")
                && valid_keys.contains("api_key")
        })
    });
    assert!(found, "expected UnknownKey for 'enabeld', got: {errors:?}");
}

/// Unknown top-level section is rejected too.
#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[simulaton]
autosave_secs = 5
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown section");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { suggestion, .. } if suggestion.as_deref() == Some("simulation")
    )));
}

/// Wrong value type is reported.
#[test]
fn invalid_type_is_reported() {
    let toml = r#"
[simulation]
autosave_secs = "soon"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("autosave_secs"),
        "got: {err_str}"
    );
}

/// Unknown load policy is reported as an invalid value.
#[test]
fn unknown_load_policy_is_invalid_value() {
    let toml = r#"
[simulation]
on_load = "rewind"
"#;

    let errors = load_and_validate_str(toml).expect_err("unknown variant should fail");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidValue { detail, .. } if detail.contains("rewind"))),
        "got: {errors:?}"
    );
}

/// Semantic validation runs after deserialization.
#[test]
fn validation_catches_bad_temperature() {
    let toml = r#"
[grok]
temperature = 9.0
"#;

    let errors = load_and_validate_str(toml).expect_err("temperature out of range");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("grok.temperature"))
    ));
}

/// Diagnostics render through miette.
#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "naem".to_string(),
        suggestion: Some("name".to_string()),
        valid_keys: "name, log_level".to_string(),
        span: None,
        src: None,
    };
    assert!(error.code().is_some());
    let help = error.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("did you mean `name`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render");
    assert!(buf.contains("naem"));
}

/// `PAWPAL_*` environment variables override file values.
#[test]
#[serial_test::serial]
fn env_vars_override_file_values() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "pawpal.toml",
            r#"
[openai]
enabled = false
model = "from-file"
"#,
        )?;
        jail.set_env("PAWPAL_OPENAI_ENABLED", "true");
        jail.set_env("PAWPAL_SIMULATION_ON_LOAD", "reset");

        let config = load_config()?;
        assert!(config.openai.enabled);
        assert_eq!(config.openai.model.as_deref(), Some("from-file"));
        assert_eq!(config.simulation.on_load, LoadPolicy::Reset);
        Ok(())
    });
}
