// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! The filter DTO shared by every query and its query-string encoding

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::period::Period;
use crate::range::TimeRange;

/// Query string as ordered `(name, value)` pairs
pub type QueryPairs = Vec<(&'static str, String)>;

/// Filter applied to commit analytics queries
///
/// All fields are optional. Absent values are always sent as empty strings,
/// never omitted. Identifier lists are joined with commas on the wire, so
/// identifiers must not contain commas themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filter {
    /// Lower time bound, forwarded verbatim
    pub since: Option<String>,
    /// Upper time bound, forwarded verbatim
    pub until: Option<String>,
    /// Repository URLs
    pub repos: Vec<String>,
    /// Branch names
    pub branches: Vec<String>,
    /// Author nicknames
    pub authors: Vec<String>,
    /// Commit message classifier, e.g. `feat` or `fix`
    pub message_type: Option<String>,
    /// Merge classifier, e.g. `0`, `1` or `0,1`
    pub is_merge: Option<String>,
}

impl Filter {
    /// An empty filter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            since: None,
            until: None,
            repos: Vec::new(),
            branches: Vec::new(),
            authors: Vec::new(),
            message_type: None,
            is_merge: None,
        }
    }

    /// Set the lower time bound
    #[must_use]
    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Set the upper time bound
    #[must_use]
    pub fn with_until(mut self, until: impl Into<String>) -> Self {
        self.until = Some(until.into());
        self
    }

    /// Set the repository list
    #[must_use]
    pub fn with_repos<I, S>(mut self, repos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repos = repos.into_iter().map(Into::into).collect();
        self
    }

    /// Set the branch list
    #[must_use]
    pub fn with_branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branches = branches.into_iter().map(Into::into).collect();
        self
    }

    /// Set the author list
    #[must_use]
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the message type classifier
    #[must_use]
    pub fn with_message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = Some(message_type.into());
        self
    }

    /// Set the merge classifier
    #[must_use]
    pub fn with_is_merge(mut self, is_merge: impl Into<String>) -> Self {
        self.is_merge = Some(is_merge.into());
        self
    }

    /// Replace `since`/`until` with the bounds of a preset relative to `now`
    #[must_use]
    pub fn with_range(mut self, range: TimeRange, now: DateTime<FixedOffset>) -> Self {
        let (since, until) = range.bounds(now);
        self.since = Some(since);
        self.until = Some(until);
        self
    }

    /// Join identifiers with commas; an empty list gives an empty string
    #[must_use]
    pub fn join_ids(ids: &[String]) -> String {
        ids.join(",")
    }

    /// Parameters of the branch listing: `since`, `until`, `repos`
    #[must_use]
    pub fn branch_query(&self) -> QueryPairs {
        vec![
            ("since", text(self.since.as_ref())),
            ("until", text(self.until.as_ref())),
            ("repos", Self::join_ids(&self.repos)),
        ]
    }

    /// Parameters shared by contributors, ranking and the larger queries
    #[must_use]
    pub fn scope_query(&self) -> QueryPairs {
        let mut query = self.branch_query();
        query.push(("branches", Self::join_ids(&self.branches)));
        query.push(("authors", Self::join_ids(&self.authors)));
        query
    }

    /// Scope parameters followed by `offset` and `limit`
    #[must_use]
    pub fn commit_query(&self, offset: i64, limit: i64) -> QueryPairs {
        let mut query = self.scope_query();
        query.push(("offset", offset.to_string()));
        query.push(("limit", limit.to_string()));
        query
    }

    /// Scope parameters followed by `messageType` and `isMerge`
    #[must_use]
    pub fn heatmap_query(&self) -> QueryPairs {
        let mut query = self.scope_query();
        query.push(("messageType", text(self.message_type.as_ref())));
        query.push(("isMerge", text(self.is_merge.as_ref())));
        query
    }

    /// Heatmap parameters followed by `period`
    #[must_use]
    pub fn period_query(&self, period: Period) -> QueryPairs {
        let mut query = self.heatmap_query();
        query.push(("period", period.as_str().to_string()));
        query
    }
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}
