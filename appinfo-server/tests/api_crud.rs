//! End-to-end CRUD flow over the HTTP surface
//!
//! Drives the real router against a real database.
//! Run with: DATABASE_URL=postgres://... cargo test -p appinfo-server -- --ignored

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use appinfo_server::db::{create_pool, migrations};
use appinfo_server::http::server::{build_router, AppState};

async fn test_app() -> Router {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    build_router(AppState { pool })
}

fn payload(app_name: &str, sonar_key: &str) -> Value {
    json!({
        "app_name": app_name,
        "created_on": "2024-01-01T00:00:00",
        "last_deployed_on": "2024-01-02T00:00:00",
        "sonar_key": sonar_key,
        "code_quality": "A",
        "code_coverage": "90%",
        "is_active": true
    })
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Find the id assigned to `app_name` via the list endpoint.
async fn find_id(app: &Router, app_name: &str) -> i64 {
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/app"))
        .await
        .expect("list request");
    assert_eq!(response.status(), StatusCode::OK);

    let apps = body_json(response).await;
    apps.as_array()
        .expect("list is an array")
        .iter()
        .find(|a| a["app_name"] == app_name)
        .and_then(|a| a["id"].as_i64())
        .expect("created app appears in list")
}

#[tokio::test]
#[ignore = "requires database"]
async fn full_crud_flow() {
    let app = test_app().await;
    let pid = std::process::id();
    let name = format!("svc-crud-{}", pid);
    let key = format!("sk-crud-{}", pid);

    // Create
    let response = app
        .clone()
        .oneshot(json_request("POST", "/app", &payload(&name, &key)))
        .await
        .expect("create request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let id = find_id(&app, &name).await;

    // Read back: every field round-trips, plus the assigned id
    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/app/{}", id)))
        .await
        .expect("get request");
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["id"].as_i64(), Some(id));
    assert_eq!(fetched["app_name"], name);
    assert_eq!(fetched["created_on"], "2024-01-01T00:00:00");
    assert_eq!(fetched["last_deployed_on"], "2024-01-02T00:00:00");
    assert_eq!(fetched["sonar_key"], key);
    assert_eq!(fetched["code_quality"], "A");
    assert_eq!(fetched["code_coverage"], "90%");
    assert_eq!(fetched["is_active"], true);

    // Update: full payload required, only sonar_key/code_quality persisted
    let mut update = payload("renamed-ignored", &format!("{}-v2", key));
    update["code_quality"] = json!("B");
    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/app/{}", id), &update))
        .await
        .expect("update request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/app/{}", id)))
        .await
        .expect("get request");
    let updated = body_json(response).await;
    assert_eq!(updated["sonar_key"], format!("{}-v2", key));
    assert_eq!(updated["code_quality"], "B");
    assert_eq!(updated["app_name"], name);

    // Delete, then the record is gone
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/app/{}", id)))
        .await
        .expect("delete request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/app/{}", id)))
        .await
        .expect("get request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Second delete is still 204
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/app/{}", id)))
        .await
        .expect("delete request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_app_name_is_conflict() {
    let app = test_app().await;
    let pid = std::process::id();
    let name = format!("svc-conflict-{}", pid);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/app",
            &payload(&name, &format!("sk-conflict-a-{}", pid)),
        ))
        .await
        .expect("create request");
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same app_name, different sonar_key
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/app",
            &payload(&name, &format!("sk-conflict-b-{}", pid)),
        ))
        .await
        .expect("create request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Cleanup
    let id = find_id(&app, &name).await;
    app.clone()
        .oneshot(empty_request("DELETE", &format!("/app/{}", id)))
        .await
        .expect("delete request");
}

#[tokio::test]
#[ignore = "requires database"]
async fn missing_field_is_bad_request() {
    let app = test_app().await;

    let mut body = payload("svc-incomplete", "sk-incomplete");
    body.as_object_mut()
        .expect("payload is an object")
        .remove("code_coverage");

    let response = app
        .clone()
        .oneshot(json_request("POST", "/app", &body))
        .await
        .expect("create request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn get_missing_id_is_not_found() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/app/2147483647"))
        .await
        .expect("get request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
