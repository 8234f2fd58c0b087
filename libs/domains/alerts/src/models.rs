use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Severity of an alert, in descending order of urgency.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "alert_type")]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AlertType {
    #[sea_orm(string_value = "EMERGENCY")]
    Emergency,
    #[sea_orm(string_value = "WARNING")]
    Warning,
    #[sea_orm(string_value = "INFO")]
    Info,
}

/// Alert entity - a notification event raised for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Alert {
    /// Unique identifier
    pub id: Uuid,
    /// Severity classification
    pub alert_type: AlertType,
    /// Human-readable description
    pub description: String,
    /// Owner of the alert
    pub user_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Create a new alert from CreateAlert DTO
    pub fn new(input: CreateAlert) -> Self {
        Self {
            id: Uuid::now_v7(),
            alert_type: input.alert_type,
            description: input.description,
            user_id: input.user_id,
            created_at: Utc::now(),
        }
    }
}

/// DTO for creating a new alert
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlert {
    /// Owner of the alert; must reference an existing user
    pub user_id: Uuid,
    /// Severity classification
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Human-readable description
    #[validate(length(min = 1, max = 500))]
    pub description: String,
}

/// Wire representation of an alert, enriched with the owner's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub description: String,
    pub user_id: Uuid,
    pub user_name: String,
}

impl AlertResponse {
    pub fn from_alert(alert: Alert, user_name: impl Into<String>) -> Self {
        Self {
            id: alert.id,
            alert_type: alert.alert_type,
            description: alert.description,
            user_id: alert.user_id,
            user_name: user_name.into(),
        }
    }
}

/// Query parameters for direct message publishing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SendMessageParams {
    /// Destination topic, e.g. `alerts/alice`
    pub topic: String,
    /// Raw message payload
    pub message: String,
}
