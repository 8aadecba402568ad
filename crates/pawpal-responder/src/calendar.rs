// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Date-driven helpers: holiday detection and the "today is" phrase.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occasion {
    Valentines,
    Christmas,
    NewYear,
    Halloween,
    /// Any day in April.
    Spring,
}

/// The fixed-date occasion falling on `date`, if any.
pub fn occasion(date: NaiveDate) -> Option<Occasion> {
    match (date.month(), date.day()) {
        (2, 14) => Some(Occasion::Valentines),
        (12, 25) => Some(Occasion::Christmas),
        (1, 1) => Some(Occasion::NewYear),
        (10, 31) => Some(Occasion::Halloween),
        (4, _) => Some(Occasion::Spring),
        _ => None,
    }
}

/// "Today is Friday, October 16, 2026. The time is 03:04 PM"
pub fn today_phrase(now: NaiveDateTime) -> String {
    format!(
        "Today is {}. The time is {}",
        now.format("%A, %B %-d, %Y"),
        now.format("%I:%M %p")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn fixed_dates() {
        assert_eq!(occasion(day(2, 14)), Some(Occasion::Valentines));
        assert_eq!(occasion(day(12, 25)), Some(Occasion::Christmas));
        assert_eq!(occasion(day(1, 1)), Some(Occasion::NewYear));
        assert_eq!(occasion(day(10, 31)), Some(Occasion::Halloween));
        assert_eq!(occasion(day(4, 30)), Some(Occasion::Spring));
        assert_eq!(occasion(day(7, 4)), None);
    }

    #[test]
    fn today_phrase_is_us_style() {
        let now = day(10, 16).and_hms_opt(15, 4, 0).unwrap();
        assert_eq!(
            today_phrase(now),
            "Today is Friday, October 16, 2026. The time is 03:04 PM"
        );
    }
}
