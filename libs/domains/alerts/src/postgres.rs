use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::{AlertError, AlertResult},
    models::Alert,
    repository::AlertRepository,
};

/// PostgreSQL implementation of AlertRepository backed by SeaORM
pub struct PgAlertRepository {
    db: DatabaseConnection,
}

impl PgAlertRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AlertRepository for PgAlertRepository {
    async fn create(&self, alert: Alert) -> AlertResult<Alert> {
        let active: entity::ActiveModel = alert.into();
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| AlertError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(alert_id = %model.id, "Created alert");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> AlertResult<Option<Alert>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AlertError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> AlertResult<Vec<Alert>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| AlertError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn delete(&self, id: Uuid) -> AlertResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AlertError::Internal(format!("Database error: {}", e)))?;

        Ok(result.rows_affected > 0)
    }
}
