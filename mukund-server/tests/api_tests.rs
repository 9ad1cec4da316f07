mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use mukund_core::SharedEvaluator;
use mukund_server::loader::load_evaluator;
use mukund_server::web::{create_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn router(dir: &tempfile::TempDir) -> (Router, AppState) {
    let manifest = common::write_dataset(dir.path());
    let state = AppState {
        evaluator: Arc::new(SharedEvaluator::new(load_evaluator(&manifest).unwrap())),
        manifest: Some(manifest),
    };
    (create_router(state.clone()), state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_get_fix() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = router(&dir);

    let (status, body) = send(app, get("/api/v1/fix?lat=8.3&lon=79.21")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classification"]["status"], "safe_eez");
    assert_eq!(body["classification"]["safe"], true);
    assert_eq!(body["nearest_harbor"]["name"], "A");
    assert_eq!(body["nearest_border"]["position"]["latitude"], 9.0);
    assert_eq!(body["nearest_border"]["position"]["longitude"], 80.0);
    let bearing = body["nearest_border"]["bearing_deg"].as_f64().unwrap();
    assert!((0.0..90.0).contains(&bearing));
}

#[tokio::test]
async fn test_legacy_form_route() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = router(&dir);

    let request = Request::builder()
        .method("POST")
        .uri("/route11")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("latt=6.0&longi=80.0"))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["safe_water"], false);
    assert_eq!(body["status"], "Warning: You are in a danger zone.");
    assert_eq!(
        body["distance_to_nearest"],
        body["fix"]["nearest_border"]["distance_km"]
    );
}

#[tokio::test]
async fn test_legacy_form_rejects_text() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = router(&dir);

    let request = Request::builder()
        .method("POST")
        .uri("/route11")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("latt=north&longi=80.0"))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_invalid_coordinate() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = router(&dir);

    let (status, body) = send(app, get("/api/v1/fix?lat=95&lon=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_coordinate");
}

#[tokio::test]
async fn test_fix_on_harbor_is_degenerate() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = router(&dir);

    let (status, body) = send(app, get("/api/v1/fix?lat=8.1&lon=79.2")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "degenerate_bearing");
}

#[tokio::test]
async fn test_list_zones() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = router(&dir);

    let (status, body) = send(app, get("/api/v1/zones")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["border_zone"], "eez");
    assert_eq!(body["harbors"], 2);
    assert_eq!(body["zones"].as_array().unwrap().len(), 4);
    assert_eq!(body["zones"][2]["kind"], "danger");
    assert_eq!(body["zones"][0]["vertices"], 4);
}

#[tokio::test]
async fn test_reload_swaps_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = router(&dir);
    let before = state.evaluator.current();

    std::fs::write(
        dir.path().join("harbour.csv"),
        format!("{}C,8.3,79.3\n", common::HARBORS),
    )
    .unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/reload")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["generation"], 1);
    assert_eq!(body["harbors"], 3);

    assert_eq!(before.harbors().len(), 2);
    assert_eq!(state.evaluator.current().harbors().len(), 3);
}

#[tokio::test]
async fn test_concurrent_reloads_report_their_own_generation() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = router(&dir);

    let reload = || {
        Request::builder()
            .method("POST")
            .uri("/api/v1/reload")
            .body(Body::empty())
            .unwrap()
    };
    let (first, second) = tokio::join!(send(app.clone(), reload()), send(app, reload()));
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);

    let mut generations = vec![first.1["generation"].as_u64(), second.1["generation"].as_u64()];
    generations.sort_unstable();
    assert_eq!(generations, vec![Some(1), Some(2)]);
    assert_eq!(state.evaluator.generation(), 2);
}

#[tokio::test]
async fn test_reload_failure_keeps_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = router(&dir);

    std::fs::write(dir.path().join("eez.json"), "{ broken").unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/reload")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "reload_failed");
    assert_eq!(state.evaluator.generation(), 0);
    assert_eq!(state.evaluator.current().index().zones().len(), 4);
}

#[tokio::test]
async fn test_reload_without_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let (_, state) = router(&dir);
    let app = create_router(AppState {
        evaluator: state.evaluator.clone(),
        manifest: None,
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/reload")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app, request).await;
    assert_eq!(status, StatusCode::CONFLICT);
}
