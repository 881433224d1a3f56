//! Ride date and time extraction.
//!
//! Results are partial, loosely structured strings such as `"5 March"`,
//! `"5 to 7 march"` or `"6:30 pm"`. Relative words (`today`, `tomorrow`)
//! resolve against the message's reference date and override any pattern
//! match.

pub mod patterns;

use chrono::{Days, NaiveDate};
use ridelog_core::Result;
use tracing::trace;

use patterns::{DATE_PATTERNS, FALLBACK_TIME_PATTERNS, Rule, TIME_PATTERNS, compile, first_match};

/// Relative day words and their offset from the reference date.
///
/// Applied in order, so a later entry overrides an earlier one.
pub const RELATIVE_DAYS: &[(&str, u64)] = &[("today", 0), ("tomorrow", 1)];

const REFERENCE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RideDateTime {
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Resolve a `YYYY-MM-DD` reference, falling back to `today` on anything else.
#[must_use]
pub fn reference_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    raw.and_then(|s| NaiveDate::parse_from_str(s, REFERENCE_FORMAT).ok())
        .unwrap_or(today)
}

/// Join date groups positionally; a lone day borrows the reference month.
#[must_use]
pub fn render_date(parts: &[String], implied_month: &str) -> Option<String> {
    match parts {
        [] => None,
        [day] => Some(format!("{day} {implied_month}")),
        [a, b] => Some(format!("{a} {b}")),
        [from, to, month] => Some(format!("{from} to {to} {month}")),
        _ => Some(parts.join(" ")),
    }
}

/// Colon-join hour and minute, then append the meridiem when present.
#[must_use]
pub fn render_time(parts: &[String]) -> Option<String> {
    let rendered = match parts {
        [] => return None,
        [single] => single.clone(),
        [hour, minute] => format!("{hour}:{minute}"),
        [hour, minute, meridiem] => format!("{hour}:{minute} {meridiem}"),
        [hour, minute, ..] => format!("{hour}:{minute}"),
    };
    Some(rendered.trim().to_string())
}

#[derive(Debug, Clone)]
pub struct DateTimeExtractor {
    dates: Vec<Rule>,
    times: Vec<Rule>,
    fallback_times: Vec<Rule>,
}

impl DateTimeExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dates: compile(DATE_PATTERNS)?,
            times: compile(TIME_PATTERNS)?,
            fallback_times: compile(FALLBACK_TIME_PATTERNS)?,
        })
    }

    /// Date and time for a message already known to be about a ride.
    #[must_use]
    pub fn extract(&self, text: &str, reference: NaiveDate) -> RideDateTime {
        let lowered = text.to_lowercase();
        let mut date = self.pattern_date(&lowered, reference);

        for (word, offset) in RELATIVE_DAYS {
            if lowered.contains(word) {
                date = reference
                    .checked_add_days(Days::new(*offset))
                    .map(|d| d.format(REFERENCE_FORMAT).to_string())
                    .or(date);
            }
        }

        RideDateTime {
            date,
            time: self.time(&lowered),
        }
    }

    fn pattern_date(&self, lowered: &str, reference: NaiveDate) -> Option<String> {
        let (rule, parts) = first_match(&self.dates, lowered)?;
        trace!(rule, ?parts, "date pattern matched");
        render_date(&parts, &reference.format("%B").to_string())
    }

    fn time(&self, lowered: &str) -> Option<String> {
        let (rule, parts) = first_match(&self.times, lowered)
            .or_else(|| first_match(&self.fallback_times, lowered))?;
        trace!(rule, ?parts, "time pattern matched");
        render_time(&parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("Invalid calendar date")
    }

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn extract(text: &str, reference: NaiveDate) -> RideDateTime {
        DateTimeExtractor::new()
            .expect("Failed to compile patterns")
            .extract(text, reference)
    }

    #[test]
    fn reference_date_is_strict_with_silent_fallback() {
        let today = day(2030, 1, 15);
        assert_eq!(reference_date(Some("2024-03-01"), today), day(2024, 3, 1));
        assert_eq!(reference_date(Some("03/01/2024"), today), today);
        assert_eq!(reference_date(Some("2024-02-30"), today), today);
        assert_eq!(reference_date(Some(""), today), today);
        assert_eq!(reference_date(None, today), today);
    }

    #[test]
    fn date_rendering_by_group_count() {
        let s = |v: &[&str]| v.iter().map(|p| (*p).to_string()).collect::<Vec<_>>();
        assert_eq!(render_date(&s(&["5"]), "March"), Some("5 March".into()));
        assert_eq!(render_date(&s(&["march", "5"]), "March"), Some("march 5".into()));
        assert_eq!(render_date(&s(&["5", "7", "mar"]), "March"), Some("5 to 7 mar".into()));
        assert_eq!(render_date(&s(&["1", "2", "3", "4"]), "March"), Some("1 2 3 4".into()));
        assert_eq!(render_date(&[], "March"), None);
    }

    #[test]
    fn time_rendering_by_group_count() {
        let s = |v: &[&str]| v.iter().map(|p| (*p).to_string()).collect::<Vec<_>>();
        assert_eq!(render_time(&s(&["6", "30", "pm"])), Some("6:30 pm".into()));
        assert_eq!(render_time(&s(&["14", "15"])), Some("14:15".into()));
        assert_eq!(render_time(&s(&["7", "pm"])), Some("7:pm".into()));
        assert_eq!(render_time(&s(&["evening"])), Some("evening".into()));
        assert_eq!(render_time(&[]), None);
    }

    #[test]
    fn tomorrow_overrides_pattern_date() {
        let got = extract("driving from SC to Pittsburgh tomorrow at 6:30pm", day(2024, 3, 1));
        assert_eq!(got.date.as_deref(), Some("2024-03-02"));
        assert_eq!(got.time.as_deref(), Some("6:30 pm"));
    }

    #[test]
    fn tomorrow_wins_over_today() {
        let got = extract("not today, tomorrow", day(2024, 12, 31));
        assert_eq!(got.date.as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn today_uses_reference() {
        let got = extract("Leaving TODAY evening", day(2024, 3, 1));
        assert_eq!(got.date.as_deref(), Some("2024-03-01"));
        assert_eq!(got.time.as_deref(), Some("evening"));
    }

    #[test]
    fn lone_day_gets_reference_month() {
        let got = extract("ride on 12th", day(2024, 7, 4));
        assert_eq!(got.date.as_deref(), Some("12 July"));
        assert_eq!(got.time, None);
    }

    #[test]
    fn nothing_found() {
        let got = extract("from sc to pgh, anyone?", day(2024, 3, 1));
        assert_eq!(got, RideDateTime::default());
    }
}
