// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! Aggregation period for commit statistics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Granularity of the per-period commit statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One bucket per calendar day
    #[default]
    Day,
    /// One bucket per week
    Week,
    /// One bucket per calendar month
    Month,
}

impl Period {
    /// All periods, finest first
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    /// The value sent in the `period` query parameter
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ParseError;

    /// Accepts `day`/`daily`, `week`/`weekly`, `month`/`monthly` in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(Period::Day),
            "week" | "weekly" => Ok(Period::Week),
            "month" | "monthly" => Ok(Period::Month),
            _ => Err(ParseError::UnknownPeriod(s.to_string())),
        }
    }
}
