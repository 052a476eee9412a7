// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! The HTTP access layer
//!
//! One GET request per call, no caching, no retries. Bodies are returned
//! exactly as decoded from the server.

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::filter::{Filter, QueryPairs};
use crate::period::Period;

/// Endpoint paths of the gitinsight API
pub mod paths {
    /// Paged commit log listing
    pub const COMMITS: &str = "/v1/commits";
    /// Contributor listing
    pub const CONTRIBUTORS: &str = "/v1/contributors";
    /// Branch listing
    pub const BRANCHES: &str = "/v1/branches";
    /// Contributor ranking
    pub const RANKING: &str = "/v1/ranking";
    /// Commit calendar heatmap
    pub const HEATMAP: &str = "/v1/heatmap";
    /// Per-period commit statistics
    pub const PERIOD: &str = "/v1/period";
}

static EMPTY_FILTER: Filter = Filter::new();

/// Client for the gitinsight REST API
///
/// The base URL is resolved once at construction. Cloning is cheap and
/// clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given deployment configuration
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client from `NODE_ENV` and `BASE_URL`
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(&ApiConfig::from_env())
    }

    /// Create a client that sends requests through `http`
    #[must_use]
    pub fn with_http_client(config: &ApiConfig, http: reqwest::Client) -> Self {
        Self {
            base_url: config.resolve_base_url(),
            http,
        }
    }

    /// The resolved base URL (empty for same-origin)
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL of an endpoint
    ///
    /// Base URLs without a scheme, like the `localhost:8080` development
    /// default, are addressed over plain HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SameOriginUnavailable`] when the base URL is empty
    /// and [`ApiError::InvalidUrl`] when the result does not parse.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(ApiError::SameOriginUnavailable {
                path: path.to_string(),
            });
        }
        let raw = if base.contains("://") {
            format!("{base}{path}")
        } else {
            format!("http://{base}{path}")
        };
        Url::parse(&raw).map_err(|source| ApiError::InvalidUrl { url: raw, source })
    }

    async fn get(&self, path: &str, query: &QueryPairs) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, ?query, "GET");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        debug!(path, %status, "response");

        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: response.url().to_string(),
            });
        }
        Ok(response.json().await?)
    }

    /// List commit logs, paged by `offset` and `limit`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status or a body
    /// that is not JSON.
    pub async fn get_commit_logs(
        &self,
        filter: &Filter,
        offset: i64,
        limit: i64,
    ) -> Result<Value, ApiError> {
        self.get(paths::COMMITS, &filter.commit_query(offset, limit))
            .await
    }

    /// List contributors
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_commit_logs`].
    pub async fn get_contributors(&self, filter: Option<&Filter>) -> Result<Value, ApiError> {
        let filter = filter.unwrap_or(&EMPTY_FILTER);
        self.get(paths::CONTRIBUTORS, &filter.scope_query()).await
    }

    /// List repository branches
    ///
    /// Only `since`, `until` and `repos` are sent.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_commit_logs`].
    pub async fn get_repo_branches(&self, filter: Option<&Filter>) -> Result<Value, ApiError> {
        let filter = filter.unwrap_or(&EMPTY_FILTER);
        self.get(paths::BRANCHES, &filter.branch_query()).await
    }

    /// Get the contributor ranking
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_commit_logs`].
    pub async fn get_ranking(&self, filter: Option<&Filter>) -> Result<Value, ApiError> {
        let filter = filter.unwrap_or(&EMPTY_FILTER);
        self.get(paths::RANKING, &filter.scope_query()).await
    }

    /// Get the commit calendar heatmap
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_commit_logs`].
    pub async fn get_commit_heatmap(&self, filter: Option<&Filter>) -> Result<Value, ApiError> {
        let filter = filter.unwrap_or(&EMPTY_FILTER);
        self.get(paths::HEATMAP, &filter.heatmap_query()).await
    }

    /// Get commit statistics bucketed by `period`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_commit_logs`].
    pub async fn get_commit_period(
        &self,
        filter: Option<&Filter>,
        period: Period,
    ) -> Result<Value, ApiError> {
        let filter = filter.unwrap_or(&EMPTY_FILTER);
        self.get(paths::PERIOD, &filter.period_query(period)).await
    }
}
