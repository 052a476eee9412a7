// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! End-to-end tests: parsed CLI arguments through the handlers to a mock API


use chrono::{DateTime, FixedOffset, TimeZone};
use clap::Parser;
use gitinsight::config::Config;
use gitinsight::handlers::{self, Output};
use gitinsight_client::{ApiClient, ApiError};
use gitinsight_i18n::Locale;
use serde_json::{Value, json};
use similar_asserts::assert_eq;
use test_utils::EnvScope;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wednesday 2026-01-14 15:00 UTC
fn fixed_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2026, 1, 14, 15, 0, 0)
        .unwrap()
}

/// Parse CLI args aimed at `server` and run the resulting command
async fn run(server: &MockServer, args: &[&str]) -> Result<Output, ApiError> {
    let config = {
        let _env = EnvScope::clean();
        let uri = server.uri();
        let mut argv = vec!["gitinsight", "--base-url", uri.as_str()];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).expect("parse should succeed")
    };
    let client = ApiClient::new(&config.api_config());
    let command = config.command.expect("command given");
    handlers::execute(&client, &command, fixed_now()).await
}

fn ok_body(data: Value) -> Value {
    json!({"code": 200, "message": "success", "data": data})
}

#[tokio::test]
async fn test_commits_command_forwards_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/commits"))
        .and(query_param("offset", "20"))
        .and(query_param("limit", "10"))
        .and(query_param("repos", "a,b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        &server,
        &["commits", "--offset", "20", "--limit", "10", "--repos", "a,b"],
    )
    .await
    .expect("commits");

    assert_eq!(
        output,
        Output::Report {
            heading_key: "commitLogs",
            body: ok_body(json!([])),
        }
    );
}

#[tokio::test]
async fn test_range_preset_resolves_against_now() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ranking"))
        .and(query_param("since", "2026-01-05T00:00:00+00:00"))
        .and(query_param("until", "2026-01-12T00:00:00+00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    run(&server, &["ranking", "--range", "week-last"])
        .await
        .expect("ranking");
}

#[tokio::test]
async fn test_period_command_sends_classifiers_and_period() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/period"))
        .and(query_param("period", "week"))
        .and(query_param("messageType", "feat"))
        .and(query_param("isMerge", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        &server,
        &["period", "--period", "weekly", "--message-type", "feat"],
    )
    .await
    .expect("period");

    let text = output.render(Locale::En).expect("render");
    assert!(text.starts_with("# Commit Statistics\n"));
}

#[tokio::test]
async fn test_application_error_is_still_a_report() {
    let server = MockServer::start().await;
    let body = json!({"code": 500, "message": "no such table", "data": null});
    Mock::given(method("GET"))
        .and(path("/v1/heatmap"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let output = run(&server, &["heatmap"]).await.expect("heatmap");
    assert_eq!(
        output,
        Output::Report {
            heading_key: "commitHeatmap",
            body,
        }
    );
}

#[tokio::test]
async fn test_http_failure_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/contributors"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = run(&server, &["contributors"])
        .await
        .expect_err("500 must fail");
    assert!(matches!(err, ApiError::Status { .. }));
}

#[tokio::test]
async fn test_links_makes_no_request() {
    let server = MockServer::start().await;

    let output = run(&server, &["links"]).await.expect("links");
    assert_eq!(output, Output::Navigation);
    assert!(output.render(Locale::Zh).expect("render").contains("首页"));
    assert_eq!(server.received_requests().await.map(|r| r.len()), Some(0));
}
