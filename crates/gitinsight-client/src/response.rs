// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! Typed view of the server's response wrapper
//!
//! The API wraps every payload as `{"code", "message", "meta", "data"}` and
//! reports application errors with HTTP 200 and a non-200 `code`. The client
//! returns bodies untouched; callers decode an [`Envelope`] when they want
//! to look inside.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Application-level success code
pub const SUCCESS_CODE: i64 = 200;

/// The `{code, message, meta, data}` wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Application status code, [`SUCCESS_CODE`] on success
    pub code: i64,
    /// Human readable status message
    #[serde(default)]
    pub message: String,
    /// Echo of the effective query window and paging
    #[serde(default)]
    pub meta: Option<Meta>,
    /// The payload, `null` on failure
    #[serde(default)]
    pub data: Value,
}

/// Query metadata echoed by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Effective lower bound (the server substitutes its default when empty)
    #[serde(default)]
    pub since: Option<String>,
    /// Effective upper bound
    #[serde(default)]
    pub until: Option<String>,
    /// Commit listing offset
    #[serde(default)]
    pub offset: Option<i64>,
    /// Commit listing limit
    #[serde(default)]
    pub limit: Option<i64>,
    /// Total matching commits
    #[serde(default)]
    pub total: Option<i64>,
}

impl Envelope {
    /// Decode an envelope from a raw response body
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not an object with a numeric `code`.
    pub fn from_value(body: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(body)
    }

    /// Whether the server reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}
