//! Integration tests for `alphasoc alerts`.
//!
//! These drive the compiled binary against a wiremock server and check
//! output, the reported cursor, and structured exit codes.

mod common;

use common::{alphasoc_cmd, alphasoc_cmd_with_host};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dns_page(follow: &str, more: bool) -> serde_json::Value {
    json!({
        "follow": follow,
        "more": more,
        "alerts": [{
            "eventType": "dns",
            "event": {"ts": "2024-03-01T10:00:00Z", "srcIP": "10.0.0.5", "query": "c2.example", "qtype": "A"},
            "threats": ["c2"],
            "wisdom": {"flags": ["young_domain"]}
        }],
        "threats": {"c2": {"title": "C2 communication", "severity": 5, "policy": false}}
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_and_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/alerts"))
        .and(query_param_is_missing("follow"))
        .and(header("Authorization", "Basic dGVzdC1rZXk6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dns_page("abc", false)))
        .expect(1)
        .mount(&server)
        .await;

    let (mut cmd, _config) = alphasoc_cmd_with_host(&server.uri());
    let output = cmd.args(["-o", "json", "alerts"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["follow"], "abc");
    assert_eq!(page["alerts"][0]["event"]["query"], "c2.example");
    assert!(String::from_utf8_lossy(&output.stderr).contains("follow: abc"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_follow_flag_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/alerts"))
        .and(query_param("follow", "resume-here"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dns_page("next", false)))
        .expect(1)
        .mount(&server)
        .await;

    let (mut cmd, _config) = alphasoc_cmd_with_host(&server.uri());
    cmd.args(["alerts", "--follow", "resume-here"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("c2.example (A)"))
        .stdout(predicate::str::contains("C2 communication"))
        .stderr(predicate::str::contains("follow: next"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_all_pages_as_ndjson() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/alerts"))
        .and(query_param_is_missing("follow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dns_page("p2", true)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/alerts"))
        .and(query_param("follow", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dns_page("p3", false)))
        .expect(1)
        .mount(&server)
        .await;

    let (mut cmd, _config) = alphasoc_cmd_with_host(&server.uri());
    let output = cmd.args(["-o", "ndjson", "alerts", "--all"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["threatDetails"][0]["title"], "C2 communication");
    assert!(String::from_utf8_lossy(&output.stderr).contains("follow: p3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_api_key_exits_2_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dns_page("abc", false)))
        .expect(0)
        .mount(&server)
        .await;

    let (mut cmd, _config) = alphasoc_cmd_with_host(&server.uri());
    cmd.env_remove("ALPHASOC_API_KEY")
        .arg("alerts")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("API key"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized_exits_2() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/alerts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "invalid api key"})))
        .mount(&server)
        .await;

    let (mut cmd, _config) = alphasoc_cmd_with_host(&server.uri());
    cmd.arg("alerts")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid api key"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rate_limited_exits_7() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/alerts"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let (mut cmd, _config) = alphasoc_cmd_with_host(&server.uri());
    cmd.arg("alerts").assert().code(7);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bad_event_payload_exits_4() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "follow": "x",
            "more": false,
            "alerts": [{"eventType": "ip", "event": {"destPort": "not-a-port"}}]
        })))
        .mount(&server)
        .await;

    let (mut cmd, _config) = alphasoc_cmd_with_host(&server.uri());
    cmd.arg("alerts").assert().code(4);
}

#[test]
fn test_connection_refused_exits_3() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let (mut cmd, _config) = alphasoc_cmd_with_host(&format!("http://127.0.0.1:{port}"));
    cmd.arg("alerts").assert().code(3);
}

#[test]
fn test_invalid_host_exits_1() {
    let (mut cmd, _config) = alphasoc_cmd();
    cmd.args(["--host", "ftp://alerts.example", "alerts"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}

#[test]
fn test_zero_max_pages_is_rejected() {
    let (mut cmd, _config) = alphasoc_cmd();
    cmd.args(["alerts", "--all", "--max-pages", "0"])
        .assert()
        .failure();
}
