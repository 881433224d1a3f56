//! Date and time pattern tables, highest priority first.
//!
//! Every pattern runs against lowercased text with punctuation intact. Only
//! the first table entry that matches anywhere is used.

use regex::{Captures, Regex};
use ridelog_core::Result;

/// A named pattern in a priority table.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    pub name: &'static str,
    pub pattern: &'static str,
}

macro_rules! months {
    (full) => {
        "january|february|march|april|may|june|july|august|september|october|november|december"
    };
    (short) => {
        "jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec"
    };
}

pub const DATE_PATTERNS: &[PatternDef] = &[
    PatternDef {
        name: "day_full_month",
        pattern: concat!(
            r"\b(?:on\s)?(\d{1,2})(?:st|nd|rd|th)(?:\s+of)?\s*(",
            months!(full),
            r")?\b"
        ),
    },
    PatternDef {
        name: "full_month_day",
        pattern: concat!(
            r"\b(?:on\s)?(",
            months!(full),
            r")\s*(\d{1,2})(?:st|nd|rd|th)?\b"
        ),
    },
    PatternDef {
        name: "day_short_month",
        pattern: concat!(
            r"\b(?:on\s)?(\d{1,2})(?:st|nd|rd|th)?\s*(",
            months!(short),
            r")?\b"
        ),
    },
    PatternDef {
        name: "short_month_day",
        pattern: concat!(
            r"\b(?:on\s)?(",
            months!(short),
            r")\s*(\d{1,2})(?:st|nd|rd|th)?\b"
        ),
    },
    PatternDef {
        name: "day_range_month",
        pattern: concat!(
            r"\b(\d{1,2})(?:st|nd|rd|th)?\s*(?:-|to)\s*(\d{1,2})(?:st|nd|rd|th)?\s*(",
            months!(full),
            "|",
            months!(short),
            r")?\b"
        ),
    },
    PatternDef {
        name: "bare_day",
        pattern: concat!(
            r"\b(\d{1,2})(?:st|nd|rd|th)?\s*(",
            months!(full),
            "|",
            months!(short),
            r")?\b"
        ),
    },
];

pub const TIME_PATTERNS: &[PatternDef] = &[
    PatternDef {
        name: "clock_meridiem",
        pattern: r"\b(\d{1,2}):(\d{2})\s*(am|pm)\b",
    },
    PatternDef {
        name: "clock_meridiem_loose",
        pattern: r"\b(\d{1,2})\s*[:.]\s*(\d{2})\s*(am|pm)\b",
    },
    PatternDef {
        name: "hour_meridiem",
        pattern: r"\b(\d{1,2})\s*(am|pm)\b",
    },
    PatternDef {
        name: "clock",
        pattern: r"\b(\d{1,2}):(\d{2})\b",
    },
    PatternDef {
        name: "day_part",
        pattern: r"\b(morning|afternoon|evening|tonight|night)\b",
    },
];

/// Second tier, tried only when nothing in `TIME_PATTERNS` matched.
pub const FALLBACK_TIME_PATTERNS: &[PatternDef] = &[
    PatternDef {
        name: "qualified_clock_meridiem",
        pattern: r"\b(?:at|before|around|by)?\s*(\d{1,2}):(\d{2})\s*(am|pm)\b",
    },
    PatternDef {
        name: "qualified_clock_meridiem_loose",
        pattern: r"\b(?:at|before|around|by)?\s*(\d{1,2})\s*[:.]\s*(\d{2})\s*(am|pm)\b",
    },
    PatternDef {
        name: "qualified_compact_clock",
        pattern: r"\b(?:at|before|around|by)?\s*(\d{1,2}):(\d{2})(am|pm)\b",
    },
    PatternDef {
        name: "qualified_hour_meridiem",
        pattern: r"\b(?:at|before|around|by)?\s*(\d{1,2})(am|pm)\b",
    },
    PatternDef {
        name: "qualified_dotted_clock",
        pattern: r"\b(?:at|before|around|by)?\s*(\d{1,2})[:.](\d{2})(?:\s*)?(am|pm)\b",
    },
];

/// A compiled table entry.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    regex: Regex,
}

impl Rule {
    /// Non-empty capture groups of the first match, in group order.
    #[must_use]
    pub fn captures(&self, text: &str) -> Option<Vec<String>> {
        self.regex.captures(text).map(|caps| groups(&caps))
    }
}

fn groups(caps: &Captures<'_>) -> Vec<String> {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Compile a table, keeping its order.
pub fn compile(table: &[PatternDef]) -> Result<Vec<Rule>> {
    table
        .iter()
        .map(|def| {
            Ok(Rule {
                name: def.name,
                regex: Regex::new(def.pattern)?,
            })
        })
        .collect()
}

/// First rule in the table that matches, with its captured groups.
#[must_use]
pub fn first_match(rules: &[Rule], text: &str) -> Option<(&'static str, Vec<String>)> {
    rules
        .iter()
        .find_map(|rule| rule.captures(text).map(|parts| (rule.name, parts)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn table(defs: &[PatternDef]) -> Vec<Rule> {
        compile(defs).expect("Failed to compile pattern table")
    }

    fn date(text: &str) -> Option<(&'static str, Vec<String>)> {
        first_match(&table(DATE_PATTERNS), text)
    }

    #[test]
    fn tables_compile() {
        assert_eq!(table(DATE_PATTERNS).len(), DATE_PATTERNS.len());
        assert_eq!(table(TIME_PATTERNS).len(), TIME_PATTERNS.len());
        assert_eq!(table(FALLBACK_TIME_PATTERNS).len(), FALLBACK_TIME_PATTERNS.len());
    }

    #[test]
    fn ordinal_day_with_full_month() {
        assert_eq!(
            date("leaving on 5th of march"),
            Some(("day_full_month", vec!["5".into(), "march".into()]))
        );
    }

    #[test]
    fn full_month_then_day() {
        assert_eq!(
            date("leaving march 5"),
            Some(("full_month_day", vec!["march".into(), "5".into()]))
        );
    }

    #[test]
    fn bare_number_matches_day_short_month_first() {
        assert_eq!(
            date("need 2 seats"),
            Some(("day_short_month", vec!["2".into()]))
        );
        assert_eq!(
            date("back on 12 dec"),
            Some(("day_short_month", vec!["12".into(), "dec".into()]))
        );
    }

    #[test]
    fn any_number_shadows_later_patterns() {
        assert_eq!(
            date("sometime around dec 12"),
            Some(("day_short_month", vec!["12".into()]))
        );
        assert_eq!(
            date("5-7 march"),
            Some(("day_short_month", vec!["5".into()]))
        );
    }

    #[test]
    fn no_date_cue() {
        assert_eq!(date("anyone going to pgh this weekend?"), None);
    }

    #[test]
    fn time_tiers() {
        let rules = table(TIME_PATTERNS);
        let hit = |t: &str| first_match(&rules, t).map(|(n, p)| (n.to_string(), p));

        assert_eq!(
            hit("at 6:30pm"),
            Some(("clock_meridiem".into(), vec!["6".into(), "30".into(), "pm".into()]))
        );
        assert_eq!(
            hit("at 6.30 pm"),
            Some(("clock_meridiem_loose".into(), vec!["6".into(), "30".into(), "pm".into()]))
        );
        assert_eq!(
            hit("by 7pm"),
            Some(("hour_meridiem".into(), vec!["7".into(), "pm".into()]))
        );
        assert_eq!(
            hit("leaving 14:15"),
            Some(("clock".into(), vec!["14".into(), "15".into()]))
        );
        assert_eq!(
            hit("friday evening"),
            Some(("day_part".into(), vec!["evening".into()]))
        );
        assert_eq!(hit("whenever works"), None);
    }

    #[test]
    fn fallback_tier_matches_compact_forms() {
        let rules = table(FALLBACK_TIME_PATTERNS);
        assert_eq!(
            first_match(&rules, "before 6.30pm").map(|(_, p)| p),
            Some(vec!["6".to_string(), "30".to_string(), "pm".to_string()])
        );
        assert_eq!(
            first_match(&rules, "around 6pm").map(|(_, p)| p),
            Some(vec!["6".to_string(), "pm".to_string()])
        );
    }
}
