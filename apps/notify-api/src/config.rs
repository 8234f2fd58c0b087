use core_config::{
    AppInfo, FromEnv, app_info, database::DatabaseConfig, mqtt::MqttConfig, server::ServerConfig,
};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: DatabaseConfig,
    pub mqtt: MqttConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = DatabaseConfig::from_env()?; // Required - will fail if DATABASE_URL not set
        let mqtt = MqttConfig::from_env()?; // Required - broker host and client id
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            app: app_info!(),
            database,
            mqtt,
            server,
            environment,
        })
    }
}
