//! Resolution of date phrases into a calendar date
//!
//! Phrases are searched for in priority order, not text order:
//!
//! 1. `yesterday` / `today` / `tomorrow`
//! 2. `last <weekday>`
//! 3. `D MON` (e.g. `3 mar`)
//! 4. `MONTHNAME D` (e.g. `march 3`)
//!
//! The first rule that matches anywhere in the text wins. Absolute dates use
//! the reference date's year. Only month tokens are word-bounded, so
//! `yesterdays` still reads as `yesterday` and `103 mar` as `3 mar`.

use crate::lexicon::{month_number, MONTH_NAMES};
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static RELATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(yesterday|today|tomorrow)").expect("relative date regex is valid")
});

static LAST_WEEKDAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)last (monday|tuesday|wednesday|thursday|friday|saturday|sunday)")
        .expect("weekday regex is valid")
});

static SHORT_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,2}) (jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)(?-u:\b)")
        .expect("short date regex is valid")
});

static LONG_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?-u:\b)(january|february|march|april|may|june|july|august|september|october|november|december) ([0-9]{1,2})(?-u:\b)",
    )
    .expect("long date regex is valid")
});

/// A date phrase recognized in an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePhrase {
    /// Day offset from the reference date (`yesterday` is -1)
    Relative(i64),

    /// `last <weekday>`
    LastWeekday(Weekday),

    /// Month (1-12) and day as written; not yet checked against the calendar
    Absolute {
        /// Month number, January is 1
        month: u32,
        /// Day of month as written (may be out of range)
        day: u32,
    },
}

/// Find the highest-priority date phrase in normalized text
pub fn find_date_phrase(normalized: &str) -> Option<DatePhrase> {
    if let Some(caps) = RELATIVE_RE.captures(normalized) {
        let offset = match caps[1].to_lowercase().as_str() {
            "yesterday" => -1,
            "tomorrow" => 1,
            _ => 0,
        };
        return Some(DatePhrase::Relative(offset));
    }

    if let Some(caps) = LAST_WEEKDAY_RE.captures(normalized) {
        if let Ok(weekday) = caps[1].parse::<Weekday>() {
            return Some(DatePhrase::LastWeekday(weekday));
        }
    }

    if let Some(caps) = SHORT_DATE_RE.captures(normalized) {
        if let (Ok(day), Some(month)) = (caps[1].parse::<u32>(), month_number(&caps[2])) {
            return Some(DatePhrase::Absolute { month, day });
        }
    }

    if let Some(caps) = LONG_DATE_RE.captures(normalized) {
        if let (Some(month), Ok(day)) = (month_number(&caps[1]), caps[2].parse::<u32>()) {
            return Some(DatePhrase::Absolute { month, day });
        }
    }

    None
}

impl DatePhrase {
    /// Resolve against a reference date
    ///
    /// An absolute date that does not exist in the reference year (`31 feb`,
    /// `0 mar`) resolves to the reference date itself.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            DatePhrase::Relative(offset) => today
                .checked_add_signed(TimeDelta::days(offset))
                .unwrap_or(today),
            DatePhrase::LastWeekday(target) => {
                let current = i64::from(today.weekday().num_days_from_sunday());
                let target = i64::from(target.num_days_from_sunday());
                let mut days_ago = current - target;
                if days_ago <= 0 {
                    days_ago += 7;
                }
                today
                    .checked_sub_signed(TimeDelta::days(days_ago))
                    .unwrap_or(today)
            }
            DatePhrase::Absolute { month, day } => {
                match NaiveDate::from_ymd_opt(today.year(), month, day) {
                    Some(date) => date,
                    None => {
                        debug!(month, day, "Unparseable absolute date, using reference date");
                        today
                    }
                }
            }
        }
    }
}

/// Resolve the period start of an entry, defaulting to the reference date
pub fn resolve_period_start(normalized: &str, today: NaiveDate) -> NaiveDate {
    match find_date_phrase(normalized) {
        Some(phrase) => {
            debug!(?phrase, "Date phrase found");
            phrase.resolve(today)
        }
        None => today,
    }
}

/// Format a date as `"<FullMonthName> <day>"`, e.g. `"March 5"`
pub fn format_month_day(date: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.day())
}
