//! Application state management.

use mqtt_publisher::MqttPublisher;
use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// Cloned per handler; all fields are cheap handle clones.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: DatabaseConnection,
    /// MQTT broker publisher (shares the client and status channel)
    pub publisher: MqttPublisher,
}
