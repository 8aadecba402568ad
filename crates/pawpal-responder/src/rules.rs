// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered rule engine.
//!
//! Rules are evaluated top to bottom and the first one whose predicate
//! holds and whose handler produces text wins. A handler may return
//! `None` to let evaluation continue (for instance a knowledge question
//! that none of its sub-topics recognise). Once an earlier rule answers,
//! later rules are unreachable, so ordering is part of the behavior.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::Context;

/// One `(name, predicate, handler)` entry.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Context<'_>) -> bool,
    pub respond: fn(&Context<'_>) -> Option<String>,
}

impl Rule {
    pub const fn new(
        name: &'static str,
        applies: fn(&Context<'_>) -> bool,
        respond: fn(&Context<'_>) -> Option<String>,
    ) -> Self {
        Self {
            name,
            applies,
            respond,
        }
    }
}

/// A reply together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalReply {
    pub rule: &'static str,
    pub text: String,
}

pub struct RuleSet {
    rules: Vec<Rule>,
    /// Catch-all, used when no rule answers.
    fallback: Rule,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>, fallback: Rule) -> Self {
        Self { rules, fallback }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|r| r.name)
    }

    pub fn evaluate(&self, ctx: &Context<'_>) -> LocalReply {
        for rule in &self.rules {
            if (rule.applies)(ctx)
                && let Some(text) = (rule.respond)(ctx)
                && !text.trim().is_empty()
            {
                return LocalReply {
                    rule: rule.name,
                    text,
                };
            }
        }
        LocalReply {
            rule: self.fallback.name,
            text: (self.fallback.respond)(ctx).unwrap_or_else(|| "I'm here 💙".to_string()),
        }
    }
}

/// Compiles a pattern that is known to be valid.
pub(crate) fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap()
}

/// Words that mark a message as "understood" for the unknown-input fallback.
pub(crate) static KNOWN_TOPIC: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"hi|hello|hey|how are|love|sad|happy|play|food|work|tired|sleep|joke|holiday|season|miss|remember|sorry|pain|rainbow",
    )
});

/// History is non-empty and the message mentions none of the known topics.
pub(crate) fn is_unrecognised(ctx: &Context<'_>) -> bool {
    !ctx.history.is_empty() && !KNOWN_TOPIC.is_match(&ctx.lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pawpal_core::{FixedRandom, PetProfile};

    fn never(_: &Context<'_>) -> bool {
        false
    }
    fn always(_: &Context<'_>) -> bool {
        true
    }
    fn decline(_: &Context<'_>) -> Option<String> {
        None
    }
    fn answer(_: &Context<'_>) -> Option<String> {
        Some("answer".into())
    }
    fn catch_all(_: &Context<'_>) -> Option<String> {
        Some("fallback".into())
    }

    fn evaluate(set: &RuleSet) -> LocalReply {
        let pet = PetProfile::new("Rex", "dog", true);
        let now = NaiveDate::from_ymd_opt(2026, 3, 3)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let rng = FixedRandom(0);
        let ctx = Context::new(&pet, "hello", &[], now, &rng);
        set.evaluate(&ctx)
    }

    #[test]
    fn first_matching_rule_wins() {
        let set = RuleSet::new(
            vec![
                Rule::new("skipped", never, answer),
                Rule::new("declines", always, decline),
                Rule::new("answers", always, answer),
            ],
            Rule::new("fallback", always, catch_all),
        );
        assert_eq!(evaluate(&set).rule, "answers");
    }

    #[test]
    fn fallback_when_nothing_answers() {
        let set = RuleSet::new(vec![Rule::new("declines", always, decline)], Rule::new("fallback", always, catch_all));
        let reply = evaluate(&set);
        assert_eq!((reply.rule, reply.text.as_str()), ("fallback", "fallback"));
        assert_eq!(set.names().collect::<Vec<_>>(), ["declines", "fallback"]);
    }
}
