//! Configuration for the gitinsight command-line dashboard
//!
//! This module defines the command-line surface: global options for the API
//! location, UI language and logging, and one subcommand per dashboard view.

use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};
use gitinsight_client::config::{BASE_URL_ENV, PROFILE_ENV};
use gitinsight_client::{ApiConfig, Filter, ParseError, Period, TimeRange};
use gitinsight_i18n::{Locale, LocaleError};

/// Default page size of the commit listing
pub const DEFAULT_COMMIT_LIMIT: i64 = 50;

/// gitinsight - commit analytics from the command line
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gitinsight")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// View to query (defaults to the navigation overview)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// API base URL, e.g. `https://insight.example.com`
    ///
    /// Defaults to localhost:8080 outside production profiles.
    #[arg(short, long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Deployment profile (`production`, `prod` and `release` are production)
    #[arg(short, long, global = true, env = PROFILE_ENV)]
    pub profile: Option<String>,

    /// UI language for headings and labels (`en` or `zh`)
    #[arg(short, long, global = true, env = "GITINSIGHT_LANG", default_value = "en", value_parser = parse_locale)]
    pub lang: Locale,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every request URL and response status to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,
}

/// Dashboard views
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List commit logs, newest first
    Commits {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of commits to skip
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Maximum number of commits to return
        #[arg(long, default_value_t = DEFAULT_COMMIT_LIMIT, allow_negative_numbers = true)]
        limit: i64,
    },

    /// List contributors
    Contributors {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List branches of the selected repositories
    ///
    /// Only --since, --until, --range and --repos apply.
    Branches {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Rank contributors by effective lines changed
    Ranking {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Commit calendar heatmap
    Heatmap {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        classifiers: ClassifierArgs,
    },

    /// Commit statistics per day, week or month
    Period {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        classifiers: ClassifierArgs,

        /// Bucket size: day, week or month
        #[arg(long, default_value = "day", value_parser = parse_period)]
        period: Period,
    },

    /// Show the navigation links
    Links,
}

/// Filter options shared by every query view
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Lower time bound, passed to the server verbatim
    #[arg(long)]
    pub since: Option<String>,

    /// Upper time bound, passed to the server verbatim
    #[arg(long)]
    pub until: Option<String>,

    /// Time range preset, overrides --since and --until
    ///
    /// One of: today, yesterday, week-this, week-last, week-before-last,
    /// month-this, month-last, month-before-last.
    #[arg(long, value_parser = parse_range)]
    pub range: Option<TimeRange>,

    /// Repository URLs, comma separated
    #[arg(long, value_delimiter = ',')]
    pub repos: Vec<String>,

    /// Branch names, comma separated
    #[arg(long, value_delimiter = ',')]
    pub branches: Vec<String>,

    /// Author nicknames, comma separated
    #[arg(long, value_delimiter = ',')]
    pub authors: Vec<String>,
}

/// Commit classifiers used by the heatmap and period views
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifierArgs {
    /// Message types to include, e.g. `feat,fix`
    #[arg(long)]
    pub message_type: Option<String>,

    /// Merge selection: `0` (default on the server), `1` or `0,1`
    #[arg(long)]
    pub is_merge: Option<String>,
}

impl FilterArgs {
    /// Build the request filter, resolving any range preset against `now`
    #[must_use]
    pub fn to_filter(&self, now: DateTime<FixedOffset>) -> Filter {
        let filter = Filter {
            since: self.since.clone(),
            until: self.until.clone(),
            repos: self.repos.clone(),
            branches: self.branches.clone(),
            authors: self.authors.clone(),
            ..Filter::default()
        };
        match self.range {
            Some(range) => filter.with_range(range, now),
            None => filter,
        }
    }
}

impl ClassifierArgs {
    /// Copy the classifiers onto `filter`
    #[must_use]
    pub fn apply(&self, mut filter: Filter) -> Filter {
        filter.message_type = self.message_type.clone();
        filter.is_merge = self.is_merge.clone();
        filter
    }
}

impl Config {
    /// The deployment configuration handed to the API client
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.profile.clone(), self.base_url.clone())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

fn parse_locale(value: &str) -> Result<Locale, LocaleError> {
    value.parse()
}

fn parse_range(value: &str) -> Result<TimeRange, ParseError> {
    value.parse()
}

fn parse_period(value: &str) -> Result<Period, ParseError> {
    value.parse()
}
