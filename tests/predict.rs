//! End-to-end tests for the prediction endpoint.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_valid_json_returns_placeholder_prediction() {
    let (addr, shutdown) = common::start_default_service().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/predict", addr))
        .json(&json!({"x": 1}))
        .send()
        .await
        .expect("Service unreachable");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"prediction": 0.5}));

    shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_body_returns_400_with_error_key() {
    let (addr, shutdown) = common::start_default_service().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/predict", addr))
        .body("definitely not json")
        .send()
        .await
        .expect("Service unreachable");

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert!(
        body.get("error").and_then(Value::as_str).is_some(),
        "400 body should carry an error message, got {body}"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_empty_body_returns_400() {
    let (addr, shutdown) = common::start_default_service().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/predict", addr))
        .send()
        .await
        .expect("Service unreachable");

    assert_eq!(res.status(), 400);

    shutdown.trigger();
}

#[tokio::test]
async fn test_prediction_constant_across_payloads() {
    let (addr, shutdown) = common::start_default_service().await;
    let client = common::client();
    let url = format!("http://{}/predict", addr);

    let mut bodies = Vec::new();
    for payload in [json!({"a": 1}), json!({"b": 2}), json!([1, 2, 3]), json!(null)] {
        let res = client.post(&url).json(&payload).send().await.unwrap();
        assert_eq!(res.status(), 200);
        bodies.push(res.json::<Value>().await.unwrap());
    }

    for body in &bodies {
        assert_eq!(body, &json!({"prediction": 0.5}));
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_health_endpoint() {
    let (addr, shutdown) = common::start_default_service().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok"}));

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_path_returns_json_404() {
    let (addr, shutdown) = common::start_default_service().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/nope", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert!(body.get("error").is_some());

    shutdown.trigger();
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (addr, shutdown) = common::start_default_service().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/predict", addr))
        .json(&json!({"x": 1}))
        .send()
        .await
        .unwrap();

    let request_id = res
        .headers()
        .get("x-request-id")
        .expect("response should carry x-request-id");
    assert!(!request_id.is_empty());

    shutdown.trigger();
}
