use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use domain_users::repository::UserRepository;
use mqtt_publisher::{NotificationPublisher, QosLevel};

use crate::error::{AlertError, AlertResult};
use crate::models::{Alert, AlertResponse, CreateAlert};
use crate::repository::AlertRepository;

/// Service layer for Alert business logic
///
/// Owns the alert store, the read-only user lookup and the broker
/// publisher. Alert creation only persists; publishing happens through
/// the explicit send_notification operation.
#[derive(Clone)]
pub struct AlertService<A: AlertRepository, U: UserRepository, P: NotificationPublisher> {
    alerts: Arc<A>,
    users: Arc<U>,
    publisher: Arc<P>,
}

impl<A: AlertRepository, U: UserRepository, P: NotificationPublisher> AlertService<A, U, P> {
    pub fn new(alerts: A, users: U, publisher: P) -> Self {
        Self {
            alerts: Arc::new(alerts),
            users: Arc::new(users),
            publisher: Arc::new(publisher),
        }
    }

    /// Create a new alert after verifying the owning user exists
    pub async fn create_alert(&self, input: CreateAlert) -> AlertResult<AlertResponse> {
        input
            .validate()
            .map_err(|e| AlertError::Validation(e.to_string()))?;

        let user = self.get_user_name(input.user_id).await?;
        let user_name = user.ok_or(AlertError::UserNotFound(input.user_id))?;

        let alert = self.alerts.create(Alert::new(input)).await?;
        Ok(AlertResponse::from_alert(alert, user_name))
    }

    /// Get an alert by ID
    pub async fn get_alert(&self, id: Uuid) -> AlertResult<AlertResponse> {
        let alert = self
            .alerts
            .get_by_id(id)
            .await?
            .ok_or(AlertError::NotFound(id))?;

        self.with_owner_name(alert).await
    }

    /// List all alerts, newest first
    pub async fn list_alerts(&self) -> AlertResult<Vec<AlertResponse>> {
        let alerts = self.alerts.list().await?;

        // Owner names are resolved once per distinct user.
        let mut names: HashMap<Uuid, String> = HashMap::new();
        let mut result = Vec::with_capacity(alerts.len());

        for alert in alerts {
            let name = match names.get(&alert.user_id) {
                Some(name) => name.clone(),
                None => {
                    let name = self
                        .get_user_name(alert.user_id)
                        .await?
                        .ok_or_else(|| missing_owner(alert.user_id))?;
                    names.insert(alert.user_id, name.clone());
                    name
                }
            };
            result.push(AlertResponse::from_alert(alert, name));
        }

        Ok(result)
    }

    /// Delete an alert
    pub async fn delete_alert(&self, id: Uuid) -> AlertResult<()> {
        let deleted = self.alerts.delete(id).await?;

        if !deleted {
            return Err(AlertError::NotFound(id));
        }

        Ok(())
    }

    /// Publish a raw message to an arbitrary broker topic
    pub async fn send_notification(&self, topic: &str, message: &str) -> AlertResult<()> {
        if topic.trim().is_empty() {
            return Err(AlertError::Validation("topic must not be empty".to_string()));
        }
        if message.is_empty() {
            return Err(AlertError::Validation(
                "message must not be empty".to_string(),
            ));
        }

        self.publisher
            .publish(topic, message.as_bytes(), QosLevel::AtLeastOnce)
            .await?;

        tracing::info!(topic, "Published message to broker");
        Ok(())
    }

    /// Cheap broker connectivity probe for readiness checks
    pub fn broker_connected(&self) -> bool {
        self.publisher.is_connected()
    }

    async fn with_owner_name(&self, alert: Alert) -> AlertResult<AlertResponse> {
        let name = self
            .get_user_name(alert.user_id)
            .await?
            .ok_or_else(|| missing_owner(alert.user_id))?;

        Ok(AlertResponse::from_alert(alert, name))
    }

    async fn get_user_name(&self, user_id: Uuid) -> AlertResult<Option<String>> {
        let user = self
            .users
            .get_by_id(user_id)
            .await
            .map_err(|e| AlertError::Internal(e.to_string()))?;

        Ok(user.map(|u| u.name))
    }
}

// The alerts table has a foreign key on user_id, so a missing owner
// means the stores are out of sync rather than a bad request.
fn missing_owner(user_id: Uuid) -> AlertError {
    AlertError::Internal(format!("owner {} missing for stored alert", user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertType;
    use crate::repository::{InMemoryAlertRepository, MockAlertRepository};
    use domain_users::models::User;
    use domain_users::repository::InMemoryUserRepository;
    use mqtt_publisher::InMemoryPublisher;

    fn create_input(user_id: Uuid) -> CreateAlert {
        CreateAlert {
            user_id,
            alert_type: AlertType::Emergency,
            description: "smoke detected".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_alert_rejects_unknown_user() {
        let service = AlertService::new(
            MockAlertRepository::new(),
            InMemoryUserRepository::new(),
            InMemoryPublisher::new(),
        );

        let user_id = Uuid::now_v7();
        let result = service.create_alert(create_input(user_id)).await;

        assert!(matches!(result, Err(AlertError::UserNotFound(id)) if id == user_id));
    }

    #[tokio::test]
    async fn test_create_alert_returns_owner_name() {
        let users = InMemoryUserRepository::new();
        let user = users.insert(User::new("alice")).await;

        let mut mock_repo = MockAlertRepository::new();
        mock_repo.expect_create().returning(|alert| Ok(alert));

        let service = AlertService::new(mock_repo, users, InMemoryPublisher::new());
        let response = service.create_alert(create_input(user.id)).await.unwrap();

        assert_eq!(response.user_id, user.id);
        assert_eq!(response.user_name, "alice");
        assert_eq!(response.alert_type, AlertType::Emergency);
    }

    #[tokio::test]
    async fn test_create_alert_rejects_empty_description() {
        let users = InMemoryUserRepository::new();
        let user = users.insert(User::new("bob")).await;

        let service = AlertService::new(
            MockAlertRepository::new(),
            users,
            InMemoryPublisher::new(),
        );

        let result = service
            .create_alert(CreateAlert {
                user_id: user.id,
                alert_type: AlertType::Info,
                description: String::new(),
            })
            .await;

        assert!(matches!(result, Err(AlertError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_alert_not_found() {
        let mut mock_repo = MockAlertRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = AlertService::new(
            mock_repo,
            InMemoryUserRepository::new(),
            InMemoryPublisher::new(),
        );

        let id = Uuid::now_v7();
        let result = service.get_alert(id).await;
        assert!(matches!(result, Err(AlertError::NotFound(got)) if got == id));
    }

    #[tokio::test]
    async fn test_list_alerts_resolves_owner_names() {
        let users = InMemoryUserRepository::new();
        let alice = users.insert(User::new("alice")).await;
        let bob = users.insert(User::new("bob")).await;

        let service = AlertService::new(
            InMemoryAlertRepository::new(),
            users,
            InMemoryPublisher::new(),
        );

        service.create_alert(create_input(alice.id)).await.unwrap();
        service.create_alert(create_input(bob.id)).await.unwrap();
        service.create_alert(create_input(alice.id)).await.unwrap();

        let listed = service.list_alerts().await.unwrap();
        assert_eq!(listed.len(), 3);

        let alice_alerts = listed.iter().filter(|a| a.user_name == "alice").count();
        assert_eq!(alice_alerts, 2);
    }

    #[tokio::test]
    async fn test_delete_missing_alert_returns_not_found() {
        let service = AlertService::new(
            InMemoryAlertRepository::new(),
            InMemoryUserRepository::new(),
            InMemoryPublisher::new(),
        );

        let result = service.delete_alert(Uuid::now_v7()).await;
        assert!(matches!(result, Err(AlertError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_send_notification_publishes_at_least_once() {
        let publisher = InMemoryPublisher::new();
        let service = AlertService::new(
            InMemoryAlertRepository::new(),
            InMemoryUserRepository::new(),
            publisher.clone(),
        );

        service.send_notification("alerts/alice", "fire").await.unwrap();

        let published = publisher.published().await;
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].topic, "alerts/alice");
        assert_eq!(published[0].payload, b"fire");
        assert_eq!(published[0].qos, QosLevel::AtLeastOnce);
    }

    #[tokio::test]
    async fn test_send_notification_fails_when_broker_down() {
        let service = AlertService::new(
            InMemoryAlertRepository::new(),
            InMemoryUserRepository::new(),
            InMemoryPublisher::disconnected(),
        );

        let result = service.send_notification("alerts/alice", "fire").await;
        assert!(matches!(result, Err(AlertError::Publish(_))));
    }

    #[tokio::test]
    async fn test_send_notification_rejects_empty_topic() {
        let publisher = InMemoryPublisher::new();
        let service = AlertService::new(
            InMemoryAlertRepository::new(),
            InMemoryUserRepository::new(),
            publisher.clone(),
        );

        let result = service.send_notification("  ", "fire").await;
        assert!(matches!(result, Err(AlertError::Validation(_))));
        assert!(publisher.published().await.is_empty());
    }
}
