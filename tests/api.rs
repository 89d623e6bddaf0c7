//! API endpoint integration tests

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use solace_gateway::DbPool;
use solace_gateway::api::{ApiState, analyze, entries, health};
use tower::ServiceExt;

mod common;
use common::setup_test_db;

/// Build a test API router
fn build_test_router(db: DbPool) -> Router {
    let state = Arc::new(ApiState::new(db));

    Router::new()
        .merge(health::router())
        .merge(health::ready_router(state.clone()))
        .merge(analyze::router(state.clone()))
        .merge(entries::router(state))
}

/// POST a JSON body to a path
async fn post_json(app: Router, path: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// GET a path and parse the JSON body
async fn get_json(app: Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_test_router(setup_test_db());

    let (status, json) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint() {
    let app = build_test_router(setup_test_db());

    let (status, json) = get_json(app, "/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_analyze_work_anger() {
    let app = build_test_router(setup_test_db());

    let (status, json) = post_json(
        app,
        "/api/analyze",
        r#"{"text": "My boss gave me an impossible deadline and I'm furious!", "emotion": "anger"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["emotion"], "anger");
    assert_eq!(json["intensity"], "high_intensity");
    assert_eq!(json["context"], "work");
    assert_eq!(json["sub_context"], "work_stress");

    let reply = json["empathetic_response"].as_str().unwrap();
    assert!(reply.ends_with('?'), "got: {reply}");
    assert!(!reply.contains("{context}"));
}

#[tokio::test]
async fn test_analyze_rejects_empty_text() {
    let app = build_test_router(setup_test_db());

    let (status, json) = post_json(app.clone(), "/api/analyze", r#"{"text": ""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let (status, _) = post_json(app, "/api/analyze", r#"{"text": "   "}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_defaults_emotion_to_neutral() {
    let app = build_test_router(setup_test_db());

    let (status, json) =
        post_json(app, "/api/analyze", r#"{"text": "we went to the market"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["emotion"], "neutral");
    assert!(json["sub_context"].is_null());
}

#[tokio::test]
async fn test_entries_returns_persisted_exchange() {
    let app = build_test_router(setup_test_db());

    let (status, _) = post_json(
        app.clone(),
        "/api/analyze",
        r#"{"text": "I am scared about my exam tomorrow", "emotion": "fear"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = get_json(app, "/api/entries").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);

    let entries = json["entries"].as_array().unwrap();
    let speakers: Vec<&str> = entries
        .iter()
        .map(|e| e["speaker"].as_str().unwrap())
        .collect();
    assert!(speakers.contains(&"user"));
    assert!(speakers.contains(&"assistant"));

    for entry in entries {
        assert_eq!(entry["emotion"], "fear");
        assert_eq!(entry["topic"], "school");
    }
}

#[tokio::test]
async fn test_entries_respects_limit() {
    let app = build_test_router(setup_test_db());

    for _ in 0..3 {
        let (status, _) = post_json(
            app.clone(),
            "/api/analyze",
            r#"{"text": "Today was fine.", "emotion": "neutral"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = get_json(app, "/api/entries?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
}
