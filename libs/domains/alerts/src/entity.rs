use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Alert, AlertType};

/// Sea-ORM entity for the alerts table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alerts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub alert_type: AlertType,
    pub description: String,
    pub user_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "domain_users::entity::Entity",
        from = "Column::UserId",
        to = "domain_users::entity::Column::Id"
    )]
    User,
}

impl Related<domain_users::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Alert {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            alert_type: model.alert_type,
            description: model.description,
            user_id: model.user_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<Alert> for ActiveModel {
    fn from(alert: Alert) -> Self {
        ActiveModel {
            id: Set(alert.id),
            alert_type: Set(alert.alert_type),
            description: Set(alert.description),
            user_id: Set(alert.user_id),
            created_at: Set(alert.created_at.into()),
        }
    }
}
