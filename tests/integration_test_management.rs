mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{parse_body, TestApp};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_management_crud_lifecycle() {
    let app = TestApp::new().await;

    let payload = json!({
        "full_name": "Jane Smith",
        "position": "Head of Department",
        "email": "jane@test.local",
        "phone": "+1 555 0100",
        "office_hours": "Every Monday from 09:00 to 12:00",
    });

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/managements")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = parse_body(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["full_name"], "Jane Smith");
    assert_eq!(created["office_hours"], "Every Monday from 09:00 to 12:00");

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri(format!("/api/v1/managements/{}", id))
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = parse_body(response).await;
    assert_eq!(fetched["email"], "jane@test.local");

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("PUT")
            .uri(format!("/api/v1/managements/{}", id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "position": "Deputy Director",
                "office_hours": "",
            }).to_string()))
            .unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = parse_body(response).await;
    assert_eq!(updated["position"], "Deputy Director");
    assert!(updated["office_hours"].is_null());
    assert_eq!(updated["full_name"], "Jane Smith");

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri("/api/v1/managements")
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    let listed = parse_body(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/managements/{}", id))
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri(format!("/api/v1/managements/{}", id))
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_management_requires_core_fields() {
    let app = TestApp::new().await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/managements")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "full_name": "   ",
                "position": "Head of Department",
                "email": "jane@test.local",
            }).to_string()))
            .unwrap()
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new().await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["status"], "ok");
}
