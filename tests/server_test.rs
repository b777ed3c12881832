//! Tests for the stateless HTTP front end.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use crackers::{CrackersConfig, Phase, View, router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    send_with(CrackersConfig::default(), request).await
}

async fn send_with(config: CrackersConfig, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router(config)
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes()
        .to_vec();
    (status, body)
}

fn post_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn post(uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    send(post_request(uri, body)).await
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    send(Request::builder().uri(uri).body(Body::empty()).expect("request")).await
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_card_endpoint() {
    let (status, body) = get("/cards/3?max_n=4").await;
    assert_eq!(status, StatusCode::OK);
    let card: Vec<u64> = serde_json::from_slice(&body).unwrap();
    assert_eq!(card, vec![4, 5, 6, 7, 12, 13, 14, 15]);
}

#[tokio::test]
async fn test_card_endpoint_rejects_disallowed_range() {
    let (status, _) = get("/cards/1?max_n=12").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_full_round_trip_over_http() {
    let (status, body) = post("/range", json!({ "max_n": 4 })).await;
    assert_eq!(status, StatusCode::OK);
    let mut view: View = serde_json::from_slice(&body).unwrap();
    assert_eq!(view.phase, Phase::Welcome);
    assert!(view.message.contains("between 1 and 15"));

    // 11 = 0b1011
    for trigger in ["start", "yes", "yes", "no", "yes"] {
        let (status, body) = post("/dispatch", json!({ "state": view.state, "trigger": trigger })).await;
        assert_eq!(status, StatusCode::OK, "trigger {}", trigger);
        view = serde_json::from_slice(&body).unwrap();
    }

    assert_eq!(view.phase, Phase::Reveal);
    assert_eq!(view.guess, Some(11));
    assert!(view.card.is_empty());
    assert_eq!(view.message, "Is 11 your number?");
}

#[tokio::test]
async fn test_dispatch_shows_current_card() {
    let (_, body) = post("/dispatch", json!({ "trigger": "start" })).await;
    let view: View = serde_json::from_slice(&body).unwrap();
    assert_eq!(view.state.stage(), 1);
    assert_eq!(view.card.len(), 32);
    assert_eq!(view.card[0], 1);
    assert_eq!(view.message, "Is your number on this card?");
}

#[tokio::test]
async fn test_invalid_trigger_is_conflict() {
    let (status, body) = post("/dispatch", json!({ "trigger": "yes" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("welcome"));
}

#[tokio::test]
async fn test_corrupt_state_is_bad_request() {
    let state = json!({ "stage": 0, "guess": 9, "bound": 6 });
    let (status, _) = post("/dispatch", json!({ "state": state, "trigger": "start" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_range_locked_after_start() {
    let (_, body) = post("/dispatch", json!({ "trigger": "start" })).await;
    let view: View = serde_json::from_slice(&body).unwrap();

    let (status, _) = post("/range", json!({ "state": view.state, "max_n": 5 })).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_reset_restart_uses_configured_default_range() {
    let config = CrackersConfig::from_toml(
        "default_max_n = 4\nallowed_max_n = [4, 5, 6]\nrestart_policy = \"reset\"",
    )
    .unwrap();

    let (_, body) = send_with(
        config.clone(),
        post_request("/range", json!({ "max_n": 5 })),
    )
    .await;
    let view: View = serde_json::from_slice(&body).unwrap();
    assert_eq!(view.state.bound().bits(), 5);

    let (_, body) = send_with(
        config.clone(),
        post_request("/dispatch", json!({ "state": view.state, "trigger": "start" })),
    )
    .await;
    let view: View = serde_json::from_slice(&body).unwrap();

    let (status, body) = send_with(
        config,
        post_request("/dispatch", json!({ "state": view.state, "trigger": "restart" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let view: View = serde_json::from_slice(&body).unwrap();
    assert_eq!(view.phase, Phase::Welcome);
    assert_eq!(view.state.bound().bits(), 4);
}
