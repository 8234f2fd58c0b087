//! Application-specific readiness checks for database and broker.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use mqtt_publisher::NotificationPublisher;

/// Readiness check endpoint that verifies the database pool and the MQTT
/// broker connection.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "database",
            Box::pin(async {
                state
                    .db
                    .ping()
                    .await
                    .map_err(|e| format!("Database ping failed: {}", e))
            }),
        ),
        (
            "broker",
            Box::pin(async {
                if state.publisher.is_connected() {
                    Ok(())
                } else {
                    Err("MQTT broker disconnected".to_string())
                }
            }),
        ),
    ];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
