//! Black-box integration tests for the challenge HTTP surface, driven over a
//! real loopback socket rather than calling handler functions directly.

use std::time::Duration;

use cmd_safety_gate::challenge::{open_probed, Kind};

mod common;

#[tokio::test]
async fn math_challenge_page_embeds_the_expected_sum() {
    common::logging::init_test_logging();
    let (probe_tx, probe_rx) = tokio::sync::oneshot::channel();
    let handle = tokio::spawn(open_probed(
        Kind::Math { lhs: 3, rhs: 4 },
        "rm -rf /".to_string(),
        vec![],
        Duration::from_millis(300),
        false,
        Some(probe_tx),
    ));

    let addr = probe_rx.await.expect("session reports its bound address");
    let client = reqwest::Client::new();
    let body = client.get(format!("http://{addr}/")).send().await.unwrap().text().await.unwrap();

    assert!(body.contains("3"));
    assert!(body.contains('4'));
    assert!(body.contains("EXPECTED = 7"));

    handle.abort();
}

#[tokio::test]
async fn word_challenge_page_embeds_the_target_word() {
    let (probe_tx, probe_rx) = tokio::sync::oneshot::channel();
    let handle = tokio::spawn(open_probed(
        Kind::Word { target: "DESTROY" },
        "rm -rf /".to_string(),
        vec![],
        Duration::from_millis(300),
        false,
        Some(probe_tx),
    ));

    let addr = probe_rx.await.expect("session reports its bound address");
    let client = reqwest::Client::new();
    let body = client.get(format!("http://{addr}/")).send().await.unwrap().text().await.unwrap();

    assert!(body.contains("DESTROY"));

    handle.abort();
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (probe_tx, probe_rx) = tokio::sync::oneshot::channel();
    let handle = tokio::spawn(open_probed(
        Kind::Confirm,
        "rm -rf /".to_string(),
        vec![],
        Duration::from_millis(300),
        false,
        Some(probe_tx),
    ));

    let addr = probe_rx.await.expect("session reports its bound address");
    let client = reqwest::Client::new();
    let response = client.get(format!("http://{addr}/does-not-exist")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    handle.abort();
}

#[tokio::test]
async fn a_second_resolution_attempt_after_approval_is_a_no_op() {
    let (probe_tx, probe_rx) = tokio::sync::oneshot::channel();
    let handle = tokio::spawn(open_probed(
        Kind::Confirm,
        "rm -rf /".to_string(),
        vec![],
        Duration::from_secs(5),
        false,
        Some(probe_tx),
    ));

    let addr = probe_rx.await.expect("session reports its bound address");
    let client = reqwest::Client::new();

    let first = client.post(format!("http://{addr}/approve")).send().await.unwrap();
    assert!(first.status().is_success());

    // The session already resolved; a second hit must not panic the server.
    let second = client.get(format!("http://{addr}/deny")).send().await.unwrap();
    assert!(second.status().is_success());

    let resolution = handle.await.expect("session task completes");
    assert!(resolution.approved, "first resolution (approve) should win");
}
