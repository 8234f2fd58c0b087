use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadGatewayResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use domain_users::repository::UserRepository;
use mqtt_publisher::NotificationPublisher;

use crate::error::AlertResult;
use crate::models::{AlertResponse, AlertType, CreateAlert, SendMessageParams};
use crate::repository::AlertRepository;
use crate::service::AlertService;

const TAG: &str = "alerts";

/// OpenAPI documentation for the Alerts API
#[derive(OpenApi)]
#[openapi(
    paths(
        test_endpoint,
        get_alert,
        list_alerts,
        create_alert,
        delete_alert,
        send_message,
    ),
    components(
        schemas(AlertResponse, CreateAlert, AlertType),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadGatewayResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Alert management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the alert router with all HTTP endpoints
pub fn router<A, U, P>(service: AlertService<A, U, P>) -> Router
where
    A: AlertRepository + 'static,
    U: UserRepository + 'static,
    P: NotificationPublisher + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/test", get(test_endpoint))
        .route("/id/{id}", get(get_alert))
        .route("/all", get(list_alerts))
        .route("/create", post(create_alert))
        .route("/{id}", delete(delete_alert))
        .route("/send/message", post(send_message))
        .with_state(shared_service)
}

/// Plain-text liveness probe for the alert surface
#[utoipa::path(
    get,
    path = "/test",
    tag = TAG,
    responses(
        (status = 200, description = "Service is reachable", body = String)
    )
)]
async fn test_endpoint() -> &'static str {
    "Notification service is up"
}

/// Get an alert by ID
#[utoipa::path(
    get,
    path = "/id/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Alert ID")
    ),
    responses(
        (status = 200, description = "Alert found", body = AlertResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_alert<A, U, P>(
    State(service): State<Arc<AlertService<A, U, P>>>,
    UuidPath(id): UuidPath,
) -> AlertResult<Json<AlertResponse>>
where
    A: AlertRepository,
    U: UserRepository,
    P: NotificationPublisher,
{
    let alert = service.get_alert(id).await?;
    Ok(Json(alert))
}

/// List all alerts, newest first
#[utoipa::path(
    get,
    path = "/all",
    tag = TAG,
    responses(
        (status = 200, description = "List of alerts", body = Vec<AlertResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_alerts<A, U, P>(
    State(service): State<Arc<AlertService<A, U, P>>>,
) -> AlertResult<Json<Vec<AlertResponse>>>
where
    A: AlertRepository,
    U: UserRepository,
    P: NotificationPublisher,
{
    let alerts = service.list_alerts().await?;
    Ok(Json(alerts))
}

/// Create a new alert
#[utoipa::path(
    post,
    path = "/create",
    tag = TAG,
    request_body = CreateAlert,
    responses(
        (status = 201, description = "Alert created successfully", body = AlertResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_alert<A, U, P>(
    State(service): State<Arc<AlertService<A, U, P>>>,
    ValidatedJson(input): ValidatedJson<CreateAlert>,
) -> AlertResult<impl IntoResponse>
where
    A: AlertRepository,
    U: UserRepository,
    P: NotificationPublisher,
{
    let alert = service.create_alert(input).await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

/// Delete an alert
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Alert ID")
    ),
    responses(
        (status = 204, description = "Alert deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_alert<A, U, P>(
    State(service): State<Arc<AlertService<A, U, P>>>,
    UuidPath(id): UuidPath,
) -> AlertResult<impl IntoResponse>
where
    A: AlertRepository,
    U: UserRepository,
    P: NotificationPublisher,
{
    service.delete_alert(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Publish a raw message to a broker topic
#[utoipa::path(
    post,
    path = "/send/message",
    tag = TAG,
    params(SendMessageParams),
    responses(
        (status = 200, description = "Message published", body = String),
        (status = 400, response = BadRequestValidationResponse),
        (status = 502, response = BadGatewayResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn send_message<A, U, P>(
    State(service): State<Arc<AlertService<A, U, P>>>,
    Query(params): Query<SendMessageParams>,
) -> AlertResult<String>
where
    A: AlertRepository,
    U: UserRepository,
    P: NotificationPublisher,
{
    service.send_notification(&params.topic, &params.message).await?;
    Ok(format!("Message published to {}", params.topic))
}
