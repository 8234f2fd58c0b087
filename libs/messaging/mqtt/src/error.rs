use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Broker not connected: {0}")]
    NotConnected(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Publish failed: {0}")]
    Publish(String),
}

pub type PublishResult<T> = Result<T, PublishError>;
