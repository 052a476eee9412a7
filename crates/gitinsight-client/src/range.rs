// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! Quick time range presets
//!
//! Each preset maps to a half-open `[since, until)` window computed from a
//! reference instant. Days start at local midnight, weeks on Monday and
//! months on the first day, all in the offset of the reference instant.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, NaiveTime, SecondsFormat,
};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A dashboard time range preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    /// From today's midnight to tomorrow's
    Today,
    /// The whole of yesterday
    Yesterday,
    /// The current Monday-based week
    WeekThis,
    /// The week before the current one
    WeekLast,
    /// Two weeks before the current one
    WeekBeforeLast,
    /// The current calendar month
    MonthThis,
    /// The previous calendar month
    MonthLast,
    /// Two months before the current one
    MonthBeforeLast,
}

impl TimeRange {
    /// All presets in menu order
    pub const ALL: [TimeRange; 8] = [
        TimeRange::Today,
        TimeRange::Yesterday,
        TimeRange::WeekThis,
        TimeRange::WeekLast,
        TimeRange::WeekBeforeLast,
        TimeRange::MonthThis,
        TimeRange::MonthLast,
        TimeRange::MonthBeforeLast,
    ];

    /// Translation key of the preset's label
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            TimeRange::Today => "today",
            TimeRange::Yesterday => "yesterday",
            TimeRange::WeekThis => "weekThis",
            TimeRange::WeekLast => "weekLast",
            TimeRange::WeekBeforeLast => "weekBeforeLast",
            TimeRange::MonthThis => "monthThis",
            TimeRange::MonthLast => "monthLast",
            TimeRange::MonthBeforeLast => "monthBeforeLast",
        }
    }

    /// Start and end dates (end exclusive) of the preset relative to `today`
    #[must_use]
    pub fn dates(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let week = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
        let month = today - Days::new(u64::from(today.day0()));
        match self {
            TimeRange::Today => (today, today + Days::new(1)),
            TimeRange::Yesterday => (today - Days::new(1), today),
            TimeRange::WeekThis => (week, week + Days::new(7)),
            TimeRange::WeekLast => (week - Days::new(7), week),
            TimeRange::WeekBeforeLast => (week - Days::new(14), week - Days::new(7)),
            TimeRange::MonthThis => (month, month + Months::new(1)),
            TimeRange::MonthLast => (month - Months::new(1), month),
            TimeRange::MonthBeforeLast => (month - Months::new(2), month - Months::new(1)),
        }
    }

    /// The `(since, until)` pair as RFC 3339 strings in `now`'s offset
    #[must_use]
    pub fn bounds(self, now: DateTime<FixedOffset>) -> (String, String) {
        let offset = *now.offset();
        let (start, end) = self.dates(now.date_naive());
        (
            midnight(start, offset).to_rfc3339_opts(SecondsFormat::Secs, false),
            midnight(end, offset).to_rfc3339_opts(SecondsFormat::Secs, false),
        )
    }
}

fn midnight(date: NaiveDate, offset: FixedOffset) -> DateTime<FixedOffset> {
    let local = date.and_time(NaiveTime::MIN);
    DateTime::from_naive_utc_and_offset(local - offset, offset)
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_key())
    }
}

impl FromStr for TimeRange {
    type Err = ParseError;

    /// Accepts the label key in camelCase, kebab-case or snake_case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        TimeRange::ALL
            .into_iter()
            .find(|range| range.label_key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ParseError::UnknownTimeRange(s.to_string()))
    }
}
