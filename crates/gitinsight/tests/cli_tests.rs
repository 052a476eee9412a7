// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! CLI parsing tests
//!
//! These tests verify global flags, environment fallbacks and the filter
//! options of each subcommand.


use clap::Parser;
use gitinsight::config::{ClassifierArgs, Command, Config, DEFAULT_COMMIT_LIMIT, FilterArgs};
use gitinsight_client::{Period, TimeRange};
use gitinsight_i18n::Locale;
use similar_asserts::assert_eq;
use test_utils::EnvScope;
use tracing::Level;

fn parse(args: &[&str]) -> Config {
    let mut argv = vec!["gitinsight"];
    argv.extend_from_slice(args);
    Config::try_parse_from(argv).expect("parse should succeed")
}

// ============================================================================
// Global flag tests
// ============================================================================

#[test]
fn test_no_args_defaults() {
    let _env = EnvScope::clean();
    let config = parse(&[]);
    assert!(config.command.is_none());
    assert_eq!(config.base_url, None);
    assert_eq!(config.profile, None);
    assert_eq!(config.lang, Locale::En);
    assert_eq!(config.log_level(), Level::INFO);
}

#[test]
fn test_short_and_long_flags_equivalent() {
    let _env = EnvScope::clean();
    let short = parse(&["-b", "https://api.example.com", "-p", "prod", "-l", "zh", "-v"]);
    let long = parse(&[
        "--base-url",
        "https://api.example.com",
        "--profile",
        "prod",
        "--lang",
        "zh",
        "--verbose",
    ]);
    assert_eq!(short.base_url, long.base_url);
    assert_eq!(short.profile, long.profile);
    assert_eq!(short.lang, long.lang);
    assert_eq!(short.log_level(), long.log_level());
}

#[test]
fn test_global_flags_after_subcommand() {
    let _env = EnvScope::clean();
    let config = parse(&["ranking", "--lang", "zh-CN", "-q"]);
    assert_eq!(config.lang, Locale::Zh);
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_unsupported_lang_rejected() {
    let _env = EnvScope::clean();
    let result = Config::try_parse_from(["gitinsight", "--lang", "fr"]);
    assert!(result.is_err());
}

#[test]
fn test_verbose_wins_over_quiet() {
    let _env = EnvScope::clean();
    let config = parse(&["-vq"]);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_verbose_flag_value_syntax_not_supported() {
    let _env = EnvScope::clean();
    let result = Config::try_parse_from(["gitinsight", "--verbose=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

// ============================================================================
// Environment fallback tests
// ============================================================================

#[test]
fn test_env_supplies_base_url_and_profile() {
    let mut env = EnvScope::clean();
    env.set("BASE_URL", "https://env.example.com");
    env.set("NODE_ENV", "production");

    let config = parse(&["branches"]);
    assert_eq!(config.base_url.as_deref(), Some("https://env.example.com"));
    assert_eq!(config.profile.as_deref(), Some("production"));
    assert_eq!(
        config.api_config().resolve_base_url(),
        "https://env.example.com"
    );
}

#[test]
fn test_flag_overrides_env() {
    let mut env = EnvScope::clean();
    env.set("BASE_URL", "https://env.example.com");

    let config = parse(&["--base-url", "http://flag.example.com"]);
    assert_eq!(config.base_url.as_deref(), Some("http://flag.example.com"));
}

#[test]
fn test_production_env_without_base_url_is_same_origin() {
    let mut env = EnvScope::clean();
    env.set("NODE_ENV", "release");

    let config = parse(&[]);
    assert_eq!(config.api_config().resolve_base_url(), "");
}

#[test]
fn test_lang_from_env() {
    let mut env = EnvScope::clean();
    env.set("GITINSIGHT_LANG", "zh");

    let config = parse(&[]);
    assert_eq!(config.lang, Locale::Zh);
}

// ============================================================================
// Subcommand tests
// ============================================================================

#[test]
fn test_commits_defaults() {
    let _env = EnvScope::clean();
    let config = parse(&["commits"]);
    assert_eq!(
        config.command,
        Some(Command::Commits {
            filter: FilterArgs::default(),
            offset: 0,
            limit: DEFAULT_COMMIT_LIMIT,
        })
    );
}

#[test]
fn test_commits_paging_and_lists() {
    let _env = EnvScope::clean();
    let config = parse(&[
        "commits",
        "--offset",
        "20",
        "--limit",
        "10",
        "--repos",
        "a,b,c",
        "--authors",
        "alice",
        "--authors",
        "bob",
    ]);
    let Some(Command::Commits {
        filter,
        offset,
        limit,
    }) = config.command
    else {
        panic!("expected commits command");
    };
    assert_eq!(offset, 20);
    assert_eq!(limit, 10);
    assert_eq!(filter.repos, vec!["a", "b", "c"]);
    assert_eq!(filter.authors, vec!["alice", "bob"]);
    assert!(filter.branches.is_empty());
}

#[test]
fn test_range_parses_kebab_case() {
    let _env = EnvScope::clean();
    let config = parse(&["ranking", "--range", "week-last"]);
    let Some(Command::Ranking { filter }) = config.command else {
        panic!("expected ranking command");
    };
    assert_eq!(filter.range, Some(TimeRange::WeekLast));
}

#[test]
fn test_unknown_range_rejected() {
    let _env = EnvScope::clean();
    let result = Config::try_parse_from(["gitinsight", "ranking", "--range", "decade"]);
    assert!(result.is_err());
}

#[test]
fn test_heatmap_classifiers() {
    let _env = EnvScope::clean();
    let config = parse(&["heatmap", "--message-type", "fix", "--is-merge", "0,1"]);
    let Some(Command::Heatmap { classifiers, .. }) = config.command else {
        panic!("expected heatmap command");
    };
    assert_eq!(
        classifiers,
        ClassifierArgs {
            message_type: Some("fix".to_string()),
            is_merge: Some("0,1".to_string()),
        }
    );
}

#[test]
fn test_period_accepts_alias() {
    let _env = EnvScope::clean();
    let config = parse(&["period", "--period", "Monthly"]);
    let Some(Command::Period { period, .. }) = config.command else {
        panic!("expected period command");
    };
    assert_eq!(period, Period::Month);
}

#[test]
fn test_period_defaults_to_day() {
    let _env = EnvScope::clean();
    let config = parse(&["period"]);
    assert!(matches!(
        config.command,
        Some(Command::Period {
            period: Period::Day,
            ..
        })
    ));
}

#[test]
fn test_links_subcommand() {
    let _env = EnvScope::clean();
    assert_eq!(parse(&["links"]).command, Some(Command::Links));
}

// ============================================================================
// Property tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_repos_flag_roundtrips_to_query(
            repos in proptest::collection::vec("[a-z0-9][a-z0-9./:-]{0,15}", 1..6)
        ) {
            let _env = EnvScope::clean();
            let joined = repos.join(",");
            let config = Config::try_parse_from(["gitinsight", "contributors", "--repos", joined.as_str()])
                .expect("parse should succeed");
            let Some(Command::Contributors { filter }) = config.command else {
                panic!("expected contributors command");
            };
            prop_assert_eq!(&filter.repos, &repos);

            let query = filter.to_filter(chrono::Utc::now().fixed_offset()).scope_query();
            prop_assert_eq!(&query[2], &("repos", joined));
        }
    }
}
