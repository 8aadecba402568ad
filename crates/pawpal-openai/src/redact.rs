// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret redaction for logged response bodies and error messages.

use std::sync::LazyLock;

use regex::Regex;

static REDACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // OpenAI keys: sk-..., sk-proj-...
        Regex::new(r"sk-[a-zA-Z0-9_\-]{20,}").unwrap(),
        // xAI keys
        Regex::new(r"xai-[a-zA-Z0-9]{20,}").unwrap(),
        Regex::new(r"Bearer\s+[a-zA-Z0-9._\-]{10,}").unwrap(),
    ]
});

const REDACTED: &str = "[REDACTED]";

/// Replaces known key formats and the given exact secrets with `[REDACTED]`.
pub fn redact(input: &str, secrets: &[&str]) -> String {
    let mut result = input.to_string();
    for pattern in REDACTION_PATTERNS.iter() {
        result = pattern.replace_all(&result, REDACTED).to_string();
    }

    // Longest first so a secret that contains another is replaced whole.
    let mut sorted: Vec<&&str> = secrets.iter().filter(|s| !s.is_empty()).collect();
    sorted.sort_by_key(|s| std::cmp::Reverse(s.len()));
    for secret in sorted {
        result = result.replace(*secret, REDACTED);
    }
    result
}
