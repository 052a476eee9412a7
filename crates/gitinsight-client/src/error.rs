// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! Error types for gitinsight-client

use thiserror::Error;

/// Errors that can occur while querying the gitinsight API
///
/// Every failure is surfaced to the caller as-is; the client never retries
/// or substitutes a default body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or undecodable response body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// The HTTP status returned by the server
        status: reqwest::StatusCode,
        /// The full request URL, including the query string
        url: String,
    },

    /// The base URL and endpoint path do not form a valid URL
    #[error("Invalid request URL {url}: {source}")]
    InvalidUrl {
        /// The URL that failed to parse
        url: String,
        /// The underlying parse error
        source: url::ParseError,
    },

    /// The base URL resolved to same-origin, which has no host outside a browser
    #[error("No base URL configured for {path}; set BASE_URL when running outside a browser")]
    SameOriginUnavailable {
        /// The endpoint path that was requested
        path: String,
    },
}

/// Errors from parsing user-facing values such as periods and time ranges
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unknown statistics period
    #[error("Invalid period '{0}', must be one of: day, week, month")]
    UnknownPeriod(String),

    /// Unknown time range preset
    #[error("Unknown time range '{0}'")]
    UnknownTimeRange(String),
}
