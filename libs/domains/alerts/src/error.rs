use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mqtt_publisher::PublishError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Alert not found: {0}")]
    NotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AlertResult<T> = Result<T, AlertError>;

impl From<PublishError> for AlertError {
    fn from(err: PublishError) -> Self {
        AlertError::Publish(err.to_string())
    }
}

impl From<AlertError> for AppError {
    fn from(err: AlertError) -> Self {
        match err {
            AlertError::NotFound(id) => AppError::NotFound(format!("Alert {} not found", id)),
            AlertError::UserNotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            AlertError::Validation(msg) => AppError::BadRequest(msg),
            AlertError::Publish(msg) => AppError::BadGateway(msg),
            AlertError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AlertError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
