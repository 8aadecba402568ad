// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `<number> <op> <number>` evaluation for the arithmetic rule.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::rules::pattern;

static EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"([0-9]+\.?[0-9]*)\s*([+\-*/×÷])\s*([0-9]+\.?[0-9]*)"));

/// A message that is nothing but an expression, e.g. "5 + 3" or "what is 6 * 7".
static BARE_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"^\s*(?:(?:what(?:'s|\s+is)|calculate)\s+)?[0-9]+\.?[0-9]*\s*[+\-*/×÷]\s*[0-9]+\.?[0-9]*\s*[?=!.]*\s*$",
    )
});

/// Mentions of math that deserve the "try 5 + 3" hint when no expression is present.
static MATH_WORDS: LazyLock<Regex> = LazyLock::new(|| pattern(r"calculate|math|equation|solve"));

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(f64),
    DivisionByZero,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub lhs: f64,
    pub op: char,
    pub rhs: f64,
    pub outcome: Outcome,
}

impl Evaluation {
    /// `"{a} {op} {b} = {result}"`, with `zero_div` standing in for the result
    /// when dividing by zero.
    pub fn render(&self, zero_div: &str) -> String {
        let result = match self.outcome {
            Outcome::Value(v) => Number(v).to_string(),
            Outcome::DivisionByZero => zero_div.to_string(),
        };
        format!("{} {} {} = {result}", Number(self.lhs), self.op, Number(self.rhs))
    }
}

/// Finds and evaluates the first expression in `text`.
pub fn evaluate(text: &str) -> Option<Evaluation> {
    let caps = EXPRESSION.captures(text)?;
    let lhs: f64 = caps[1].parse().ok()?;
    let op = caps[2].chars().next()?;
    let rhs: f64 = caps[3].parse().ok()?;
    let outcome = match op {
        '+' => Outcome::Value(lhs + rhs),
        '-' => Outcome::Value(lhs - rhs),
        '*' | '×' => Outcome::Value(lhs * rhs),
        '/' | '÷' if rhs == 0.0 => Outcome::DivisionByZero,
        '/' | '÷' => Outcome::Value(lhs / rhs),
        _ => return None,
    };
    Some(Evaluation {
        lhs,
        op,
        rhs,
        outcome,
    })
}

pub fn has_expression(text: &str) -> bool {
    EXPRESSION.is_match(text)
}

/// Whether the whole message is an expression rather than containing one.
pub fn is_bare_expression(text: &str) -> bool {
    BARE_EXPRESSION.is_match(text)
}

pub fn mentions_math(text: &str) -> bool {
    MATH_WORDS.is_match(text) || has_expression(text)
}

/// Prints integral values without a fractional part (`8`, not `8.0`).
struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        // -0 prints as 0
        if v == 0.0 {
            return f.write_str("0");
        }
        write!(f, "{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(text: &str) -> String {
        evaluate(text).unwrap().render("undefined")
    }

    #[test]
    fn basic_operators() {
        assert_eq!(rendered("5 + 3"), "5 + 3 = 8");
        assert_eq!(rendered("what is 10-4?"), "10 - 4 = 6");
        assert_eq!(rendered("6 × 7"), "6 × 7 = 42");
        assert_eq!(rendered("10 / 4"), "10 / 4 = 2.5");
        assert_eq!(rendered("9÷3"), "9 ÷ 3 = 3");
    }

    #[test]
    fn only_whole_message_counts_as_bare() {
        assert!(is_bare_expression("5 + 3"));
        assert!(is_bare_expression(" what is 6 * 7 "));
        assert!(is_bare_expression("what's 9÷3?"));
        assert!(is_bare_expression("calculate 2.5 - 1 ="));
        assert!(!is_bare_expression("i have 2-3 dogs"));
        assert!(!is_bare_expression("my birthday is 12/25"));
    }

    #[test]
    fn decimals_keep_their_digits() {
        assert_eq!(rendered("1.5 * 2"), "1.5 * 2 = 3");
        assert_eq!(rendered("0.1 + 0.2"), "0.1 + 0.2 = 0.30000000000000004");
    }

    #[test]
    fn division_by_zero_uses_sentinel() {
        assert_eq!(evaluate("10 / 0").unwrap().outcome, Outcome::DivisionByZero);
        assert_eq!(
            evaluate("10 / 0").unwrap().render("undefined (division by zero)"),
            "10 / 0 = undefined (division by zero)"
        );
    }

    #[test]
    fn no_expression_is_none() {
        assert!(evaluate("how are you").is_none());
        assert!(!has_expression("5 apples"));
        assert!(mentions_math("can you solve this"));
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(rendered("0 * 5"), "0 * 5 = 0");
        assert_eq!(rendered("3 - 3"), "3 - 3 = 0");
    }
}
