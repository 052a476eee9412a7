// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! gitinsight-client: HTTP access layer for the gitinsight analytics API
//!
//! This library crate resolves the API base URL from the deployment profile
//! and exposes one async query per read-only endpoint. Each query takes a
//! [`Filter`], sends a single GET request and returns the decoded JSON body
//! unmodified.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use gitinsight_client::{ApiClient, ApiConfig, Filter};
//!
//! # async fn run() -> Result<(), gitinsight_client::ApiError> {
//! let client = ApiClient::new(&ApiConfig::from_env());
//! let filter = Filter::new().with_repos(["https://github.com/robotism/gitinsight"]);
//!
//! let commits = client.get_commit_logs(&filter, 0, 20).await?;
//! let ranking = client.get_ranking(Some(&filter)).await?;
//! println!("{commits}\n{ranking}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod period;
pub mod range;
pub mod response;

pub use api::ApiClient;
pub use config::{ApiConfig, resolve_base_url};
pub use error::{ApiError, ParseError};
pub use filter::Filter;
pub use period::Period;
pub use range::TimeRange;
pub use response::Envelope;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::ApiClient;
    pub use crate::config::ApiConfig;
    pub use crate::error::ApiError;
    pub use crate::filter::Filter;
    pub use crate::period::Period;
    pub use crate::range::TimeRange;
}
