use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AlertResult;
use crate::models::Alert;

/// Repository trait for Alert persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertRepository: Send + Sync {
    /// Persist a new alert
    async fn create(&self, alert: Alert) -> AlertResult<Alert>;

    /// Get an alert by ID
    async fn get_by_id(&self, id: Uuid) -> AlertResult<Option<Alert>>;

    /// List all alerts, newest first
    async fn list(&self) -> AlertResult<Vec<Alert>>;

    /// Delete an alert by ID, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> AlertResult<bool>;
}

/// In-memory implementation of AlertRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryAlertRepository {
    alerts: Arc<RwLock<HashMap<Uuid, Alert>>>,
}

impl InMemoryAlertRepository {
    pub fn new() -> Self {
        Self {
            alerts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl AlertRepository for InMemoryAlertRepository {
    async fn create(&self, alert: Alert) -> AlertResult<Alert> {
        let mut alerts = self.alerts.write().await;
        alerts.insert(alert.id, alert.clone());

        tracing::info!(alert_id = %alert.id, "Created alert");
        Ok(alert)
    }

    async fn get_by_id(&self, id: Uuid) -> AlertResult<Option<Alert>> {
        let alerts = self.alerts.read().await;
        Ok(alerts.get(&id).cloned())
    }

    async fn list(&self) -> AlertResult<Vec<Alert>> {
        let alerts = self.alerts.read().await;

        let mut result: Vec<Alert> = alerts.values().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> AlertResult<bool> {
        let mut alerts = self.alerts.write().await;
        Ok(alerts.remove(&id).is_some())
    }
}
