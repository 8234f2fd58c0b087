use axum::Router;
use domain_alerts::{AlertService, PgAlertRepository, handlers};
use domain_users::postgres::PgUserRepository;

pub mod health;

/// Creates the API routes.
///
/// Takes a reference to AppState and initializes the alert service with the
/// Postgres repositories and the shared MQTT publisher. Returns a stateless
/// Router (sub-routers have their state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    let service = AlertService::new(
        PgAlertRepository::new(state.db.clone()),
        PgUserRepository::new(state.db.clone()),
        state.publisher.clone(),
    );

    Router::new().nest("/notify/v1", handlers::router(service))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`. The /ready endpoint checks the database pool
/// and the broker connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
