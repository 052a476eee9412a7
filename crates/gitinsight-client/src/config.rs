// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! Base URL resolution from the deployment profile

use std::env;

/// Environment variable holding the deployment profile
pub const PROFILE_ENV: &str = "NODE_ENV";

/// Environment variable holding the API base URL
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Profiles that are treated as production deployments
pub const PRODUCTION_PROFILES: [&str; 3] = ["production", "prod", "release"];

/// Base URL used outside production when none is configured
pub const DEV_BASE_URL: &str = "localhost:8080";

/// Deployment configuration consumed by [`crate::ApiClient`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Deployment profile, e.g. `production` or `development`
    pub profile: Option<String>,
    /// Configured API base URL
    pub base_url: Option<String>,
}

impl ApiConfig {
    /// Create a configuration from explicit values
    #[must_use]
    pub fn new(profile: Option<String>, base_url: Option<String>) -> Self {
        Self { profile, base_url }
    }

    /// Read the profile and base URL from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            profile: env::var(PROFILE_ENV).ok(),
            base_url: env::var(BASE_URL_ENV).ok(),
        }
    }

    /// Whether the profile names a production-like deployment
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.profile.as_deref().is_some_and(is_production_profile)
    }

    /// Resolve the base URL for this configuration
    ///
    /// See [`resolve_base_url`].
    #[must_use]
    pub fn resolve_base_url(&self) -> String {
        resolve_base_url(self.profile.as_deref(), self.base_url.as_deref())
    }
}

/// Check a profile string against [`PRODUCTION_PROFILES`] (exact match)
#[must_use]
pub fn is_production_profile(profile: &str) -> bool {
    PRODUCTION_PROFILES.contains(&profile)
}

/// Resolve the API base URL
///
/// A configured, non-empty `base_url` always wins. Otherwise production
/// profiles resolve to the empty string (same-origin requests) and every
/// other profile, including none at all, resolves to [`DEV_BASE_URL`].
#[must_use]
pub fn resolve_base_url(profile: Option<&str>, base_url: Option<&str>) -> String {
    let fallback = if profile.is_some_and(is_production_profile) {
        ""
    } else {
        DEV_BASE_URL
    };
    base_url
        .filter(|url| !url.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
