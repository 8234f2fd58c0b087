use crate::{env_parse_or_default, env_required, ConfigError, FromEnv};

/// MQTT broker connection configuration
///
/// Broker host and client id are required; the service refuses to start
/// without them because the initial broker connection is part of startup.
#[derive(Clone, Debug)]
pub struct MqttConfig {
    /// Broker hostname or IP (required)
    pub broker_host: String,

    /// Broker port
    pub broker_port: u16,

    /// Client identifier presented to the broker (required)
    pub client_id: String,

    /// Keep-alive interval in seconds
    pub keep_alive_secs: u64,

    /// How long to wait for the initial CONNACK before failing startup
    pub connect_timeout_secs: u64,
}

impl MqttConfig {
    pub fn new(broker_host: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            broker_host: broker_host.into(),
            broker_port: 1883,
            client_id: client_id.into(),
            keep_alive_secs: 60,
            connect_timeout_secs: 10,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.broker_port = port;
        self
    }
}

impl FromEnv for MqttConfig {
    /// Environment variables:
    /// - `MQTT_BROKER_HOST` (required)
    /// - `MQTT_CLIENT_ID` (required)
    /// - `MQTT_BROKER_PORT` (default: 1883)
    /// - `MQTT_KEEP_ALIVE_SECS` (default: 60)
    /// - `MQTT_CONNECT_TIMEOUT_SECS` (default: 10)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            broker_host: env_required("MQTT_BROKER_HOST")?,
            broker_port: env_parse_or_default("MQTT_BROKER_PORT", "1883")?,
            client_id: env_required("MQTT_CLIENT_ID")?,
            keep_alive_secs: env_parse_or_default("MQTT_KEEP_ALIVE_SECS", "60")?,
            connect_timeout_secs: env_parse_or_default("MQTT_CONNECT_TIMEOUT_SECS", "10")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mqtt_config_from_env_minimal() {
        temp_env::with_vars(
            [
                ("MQTT_BROKER_HOST", Some("broker.local")),
                ("MQTT_CLIENT_ID", Some("notify-api-1")),
                ("MQTT_BROKER_PORT", None),
            ],
            || {
                let config = MqttConfig::from_env().unwrap();
                assert_eq!(config.broker_host, "broker.local");
                assert_eq!(config.broker_port, 1883);
                assert_eq!(config.client_id, "notify-api-1");
                assert_eq!(config.keep_alive_secs, 60);
            },
        );
    }

    #[test]
    fn test_mqtt_config_requires_broker_host() {
        temp_env::with_vars(
            [
                ("MQTT_BROKER_HOST", None::<&str>),
                ("MQTT_CLIENT_ID", Some("notify-api-1")),
            ],
            || {
                let err = MqttConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MQTT_BROKER_HOST"));
            },
        );
    }

    #[test]
    fn test_mqtt_config_requires_client_id() {
        temp_env::with_vars(
            [
                ("MQTT_BROKER_HOST", Some("broker.local")),
                ("MQTT_CLIENT_ID", None::<&str>),
            ],
            || {
                let err = MqttConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MQTT_CLIENT_ID"));
            },
        );
    }

    #[test]
    fn test_mqtt_config_invalid_port() {
        temp_env::with_vars(
            [
                ("MQTT_BROKER_HOST", Some("broker.local")),
                ("MQTT_CLIENT_ID", Some("notify-api-1")),
                ("MQTT_BROKER_PORT", Some("not_a_port")),
            ],
            || {
                let err = MqttConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MQTT_BROKER_PORT"));
            },
        );
    }
}
