//! Handler tests for the Alerts domain
//!
//! These tests exercise the HTTP surface against in-memory stores:
//! request deserialization, status codes, wire casing and error bodies.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_alerts::*;
use domain_users::models::User;
use domain_users::repository::InMemoryUserRepository;
use http_body_util::BodyExt;
use mqtt_publisher::InMemoryPublisher;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn test_app() -> (Router, User, InMemoryPublisher) {
    let users = InMemoryUserRepository::new();
    let user = users.insert(User::new("alice")).await;

    let publisher = InMemoryPublisher::new();
    let service = AlertService::new(InMemoryAlertRepository::new(), users, publisher.clone());

    (handlers::router(service), user, publisher)
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_test_endpoint_returns_200() {
    let (app, _, _) = test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/test")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_alert_handler_returns_201() {
    let (app, user, _) = test_app().await;

    let request = post_json(
        "/create",
        json!({
            "userId": user.id,
            "type": "EMERGENCY",
            "description": "smoke detected in kitchen"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["type"], "EMERGENCY");
    assert_eq!(body["userId"], user.id.to_string());
    assert_eq!(body["userName"], "alice");
    assert_eq!(body["description"], "smoke detected in kitchen");
    assert!(body.get("id").is_some());
}

#[tokio::test]
async fn test_create_alert_handler_rejects_unknown_user() {
    let (app, _, _) = test_app().await;

    let request = post_json(
        "/create",
        json!({
            "userId": uuid::Uuid::new_v4(),
            "type": "INFO",
            "description": "nobody owns this"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_alert_handler_validates_description() {
    let (app, user, _) = test_app().await;

    let request = post_json(
        "/create",
        json!({
            "userId": user.id,
            "type": "WARNING",
            "description": ""
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_alert_handler_rejects_unknown_type() {
    let (app, user, _) = test_app().await;

    let request = post_json(
        "/create",
        json!({
            "userId": user.id,
            "type": "CATASTROPHIC",
            "description": "not a valid severity"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_alert_handler_returns_200() {
    let (app, user, _) = test_app().await;

    let create = post_json(
        "/create",
        json!({
            "userId": user.id,
            "type": "INFO",
            "description": "fetch me"
        }),
    );
    let created: AlertResponse = {
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response.into_body()).await
    };

    let request = Request::builder()
        .method("GET")
        .uri(format!("/id/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: AlertResponse = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_alert_handler_returns_404_for_missing() {
    let (app, _, _) = test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/id/{}", uuid::Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_alert_handler_returns_400_for_bad_uuid() {
    let (app, _, _) = test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/id/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_alerts_handler_returns_all() {
    let (app, user, _) = test_app().await;

    for description in ["first", "second"] {
        let request = post_json(
            "/create",
            json!({
                "userId": user.id,
                "type": "INFO",
                "description": description
            }),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let request = Request::builder()
        .method("GET")
        .uri("/all")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let alerts: Vec<AlertResponse> = json_body(response.into_body()).await;
    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().all(|a| a.user_name == "alice"));
}

#[tokio::test]
async fn test_delete_alert_handler_returns_204_then_404() {
    let (app, user, _) = test_app().await;

    let create = post_json(
        "/create",
        json!({
            "userId": user.id,
            "type": "WARNING",
            "description": "short-lived"
        }),
    );
    let created: AlertResponse = {
        let response = app.clone().oneshot(create).await.unwrap();
        json_body(response.into_body()).await
    };

    let delete = |id| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/{}", id))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete(created.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(delete(created.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_send_message_handler_publishes() {
    let (app, _, publisher) = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/send/message?topic=alerts/alice&message=fire")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let published = publisher.published().await;
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].topic, "alerts/alice");
    assert_eq!(published[0].payload, b"fire");
}

#[tokio::test]
async fn test_send_message_handler_returns_502_when_broker_down() {
    let users = InMemoryUserRepository::new();
    let service = AlertService::new(
        InMemoryAlertRepository::new(),
        users,
        InMemoryPublisher::disconnected(),
    );
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/send/message?topic=alerts/alice&message=fire")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_send_message_handler_requires_params() {
    let (app, _, _) = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/send/message")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
