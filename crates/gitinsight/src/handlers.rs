//! Command handlers for the gitinsight CLI
//!
//! This module bridges parsed subcommands to API client calls and renders
//! the results as localized, human-readable output.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset};
use gitinsight_client::{ApiClient, ApiError, Envelope};
use gitinsight_i18n::{Locale, links, translate};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Command;

// ============================================================================
// Output Types
// ============================================================================

/// Result of running a command
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// A response body from the API, titled by a translation key
    Report {
        /// Translation key of the heading
        heading_key: &'static str,
        /// The body exactly as returned by the server
        body: Value,
    },
    /// The navigation overview
    Navigation,
}

impl Output {
    /// Render the output for `locale`
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized back to JSON.
    pub fn render(&self, locale: Locale) -> Result<String, serde_json::Error> {
        match self {
            Output::Report { heading_key, body } => Ok(format!(
                "# {}\n{}",
                translate(locale, heading_key),
                serde_json::to_string_pretty(body)?
            )),
            Output::Navigation => Ok(render_navigation(locale)),
        }
    }
}

// ============================================================================
// Handler Functions
// ============================================================================

/// Run `command` against the API
///
/// `now` anchors any time range preset in the command's filter.
///
/// # Errors
///
/// Returns the client's error unchanged when the request fails.
pub async fn execute(
    client: &ApiClient,
    command: &Command,
    now: DateTime<FixedOffset>,
) -> Result<Output, ApiError> {
    let (heading_key, body) = match command {
        Command::Commits {
            filter,
            offset,
            limit,
        } => {
            let filter = filter.to_filter(now);
            let body = client.get_commit_logs(&filter, *offset, *limit).await?;
            ("commitLogs", body)
        }
        Command::Contributors { filter } => {
            let body = client.get_contributors(Some(&filter.to_filter(now))).await?;
            ("contributors", body)
        }
        Command::Branches { filter } => {
            let body = client.get_repo_branches(Some(&filter.to_filter(now))).await?;
            ("branches", body)
        }
        Command::Ranking { filter } => {
            let body = client.get_ranking(Some(&filter.to_filter(now))).await?;
            ("ranking", body)
        }
        Command::Heatmap {
            filter,
            classifiers,
        } => {
            let filter = classifiers.apply(filter.to_filter(now));
            let body = client.get_commit_heatmap(Some(&filter)).await?;
            ("commitHeatmap", body)
        }
        Command::Period {
            filter,
            classifiers,
            period,
        } => {
            let filter = classifiers.apply(filter.to_filter(now));
            let body = client.get_commit_period(Some(&filter), *period).await?;
            ("commitPeriod", body)
        }
        Command::Links => return Ok(Output::Navigation),
    };

    check_envelope(&body);
    Ok(Output::Report { heading_key, body })
}

/// Log a warning when the body is an envelope reporting failure
///
/// Returns the envelope when one could be decoded.
pub fn check_envelope(body: &Value) -> Option<Envelope> {
    match Envelope::from_value(body) {
        Ok(envelope) => {
            if !envelope.is_success() {
                warn!(
                    code = envelope.code,
                    message = %envelope.message,
                    "Server reported an error"
                );
            }
            Some(envelope)
        }
        Err(e) => {
            debug!("Response is not an envelope: {}", e);
            None
        }
    }
}

/// Render the navigation links as `label  path  (icon)` lines
#[must_use]
pub fn render_navigation(locale: Locale) -> String {
    let mut out = String::new();
    for link in links() {
        let _ = writeln!(
            out,
            "{:<16}{:<20}({})",
            link.label(locale),
            link.path(locale),
            link.icon
        );
    }
    out
}
