use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use core_config::mqtt::MqttConfig;
use rumqttc::{AsyncClient, ConnectReturnCode, Event, Incoming, MqttOptions, QoS};
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, warn};

use crate::error::{PublishError, PublishResult};

/// Connection state as observed from the rumqttc event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
}

/// Delivery guarantee for a published message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QosLevel {
    AtMostOnce,
    #[default]
    AtLeastOnce,
    ExactlyOnce,
}

impl From<QosLevel> for QoS {
    fn from(qos: QosLevel) -> Self {
        match qos {
            QosLevel::AtMostOnce => QoS::AtMostOnce,
            QosLevel::AtLeastOnce => QoS::AtLeastOnce,
            QosLevel::ExactlyOnce => QoS::ExactlyOnce,
        }
    }
}

/// Publisher trait for outbound notifications
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    /// Wait (bounded) until the broker connection is usable.
    async fn ensure_connected(&self) -> PublishResult<()>;

    /// Publish a payload to a topic with the given QoS.
    async fn publish(&self, topic: &str, payload: &[u8], qos: QosLevel) -> PublishResult<()>;

    /// Cheap connection probe for readiness checks.
    fn is_connected(&self) -> bool;
}

/// MQTT implementation of NotificationPublisher backed by rumqttc.
///
/// The event loop runs in a spawned task that owns the network connection
/// and feeds the connection status into a watch channel. rumqttc reconnects
/// on its own as long as the loop keeps polling; we only track the state.
/// Clones share the client and the status channel.
#[derive(Clone)]
pub struct MqttPublisher {
    client: AsyncClient,
    status_rx: watch::Receiver<ConnectionStatus>,
    connect_timeout: Duration,
}

impl MqttPublisher {
    /// Connect to the broker and wait for the initial CONNACK.
    ///
    /// Fails if the broker does not accept the connection within the
    /// configured timeout, so callers can fail fast at startup.
    pub async fn connect(config: &MqttConfig) -> PublishResult<Self> {
        let mut options = MqttOptions::new(
            &config.client_id,
            &config.broker_host,
            config.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(config.keep_alive_secs));
        options.set_clean_session(true);

        info!(
            host = %config.broker_host,
            port = config.broker_port,
            client_id = %config.client_id,
            "Connecting to MQTT broker"
        );

        let (client, mut eventloop) = AsyncClient::new(options, 10);
        let (status_tx, status_rx) = watch::channel(ConnectionStatus::Connecting);

        tokio::spawn(async move {
            loop {
                if status_tx.is_closed() {
                    debug!("MQTT publisher dropped, stopping event loop");
                    break;
                }
                match eventloop.poll().await {
                    Ok(Event::Incoming(Incoming::ConnAck(ack))) => {
                        if ack.code == ConnectReturnCode::Success {
                            info!("MQTT broker connection established");
                            let _ = status_tx.send(ConnectionStatus::Connected);
                        } else {
                            warn!(code = ?ack.code, "MQTT broker rejected connection");
                            let _ = status_tx.send(ConnectionStatus::Disconnected);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "MQTT connection error, will retry");
                        let _ = status_tx.send(ConnectionStatus::Disconnected);
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        let _ = status_tx.send(ConnectionStatus::Connecting);
                    }
                }
            }
        });

        let publisher = Self {
            client,
            status_rx,
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
        };

        publisher
            .ensure_connected()
            .await
            .map_err(|e| PublishError::Connection(e.to_string()))?;

        Ok(publisher)
    }
}

#[async_trait]
impl NotificationPublisher for MqttPublisher {
    async fn ensure_connected(&self) -> PublishResult<()> {
        if self.is_connected() {
            return Ok(());
        }

        let mut rx = self.status_rx.clone();
        tokio::time::timeout(
            self.connect_timeout,
            rx.wait_for(|s| *s == ConnectionStatus::Connected),
        )
        .await
        .map_err(|_| {
            PublishError::NotConnected(format!(
                "broker not reachable within {}s",
                self.connect_timeout.as_secs()
            ))
        })?
        .map_err(|_| PublishError::NotConnected("connection task stopped".to_string()))?;

        Ok(())
    }

    async fn publish(&self, topic: &str, payload: &[u8], qos: QosLevel) -> PublishResult<()> {
        self.ensure_connected().await?;

        if let Err(e) = self
            .client
            .publish(topic, qos.into(), false, payload.to_vec())
            .await
        {
            warn!(error = %e, topic, "Publish failed, retrying after reconnect");
            self.ensure_connected().await?;
            self.client
                .publish(topic, qos.into(), false, payload.to_vec())
                .await
                .map_err(|e| PublishError::Publish(e.to_string()))?;
        }

        debug!(topic, qos = ?qos, "Message handed to MQTT client");
        Ok(())
    }

    fn is_connected(&self) -> bool {
        *self.status_rx.borrow() == ConnectionStatus::Connected
    }
}

/// A message captured by [`InMemoryPublisher`].
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedMessage {
    pub topic: String,
    pub payload: Vec<u8>,
    pub qos: QosLevel,
}

/// In-memory implementation of NotificationPublisher (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryPublisher {
    messages: Arc<RwLock<Vec<PublishedMessage>>>,
    connected: Arc<AtomicBool>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            connected: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A publisher that behaves as if the broker were unreachable.
    pub fn disconnected() -> Self {
        let publisher = Self::new();
        publisher.connected.store(false, Ordering::SeqCst);
        publisher
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Everything published so far.
    pub async fn published(&self) -> Vec<PublishedMessage> {
        self.messages.read().await.clone()
    }
}

impl Default for InMemoryPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPublisher for InMemoryPublisher {
    async fn ensure_connected(&self) -> PublishResult<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(PublishError::NotConnected("broker unavailable".to_string()))
        }
    }

    async fn publish(&self, topic: &str, payload: &[u8], qos: QosLevel) -> PublishResult<()> {
        self.ensure_connected().await?;
        let mut messages = self.messages.write().await;
        messages.push(PublishedMessage {
            topic: topic.to_string(),
            payload: payload.to_vec(),
            qos,
        });
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qos_mapping() {
        assert_eq!(QoS::from(QosLevel::AtMostOnce), QoS::AtMostOnce);
        assert_eq!(QoS::from(QosLevel::AtLeastOnce), QoS::AtLeastOnce);
        assert_eq!(QoS::from(QosLevel::ExactlyOnce), QoS::ExactlyOnce);
    }

    #[test]
    fn test_default_qos_is_at_least_once() {
        assert_eq!(QosLevel::default(), QosLevel::AtLeastOnce);
    }

    #[tokio::test]
    async fn test_in_memory_publish_records_messages() {
        let publisher = InMemoryPublisher::new();
        publisher
            .publish("alerts/alice", b"fire", QosLevel::AtLeastOnce)
            .await
            .unwrap();

        let published = publisher.published().await;
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].topic, "alerts/alice");
        assert_eq!(published[0].payload, b"fire");
        assert_eq!(published[0].qos, QosLevel::AtLeastOnce);
    }

    #[tokio::test]
    async fn test_disconnected_publisher_rejects_publish() {
        let publisher = InMemoryPublisher::disconnected();
        assert!(!publisher.is_connected());

        let result = publisher.publish("alerts/bob", b"x", QosLevel::default()).await;
        assert!(matches!(result, Err(PublishError::NotConnected(_))));
        assert!(publisher.published().await.is_empty());
    }

    #[tokio::test]
    async fn test_reconnected_publisher_accepts_publish() {
        let publisher = InMemoryPublisher::disconnected();
        publisher.set_connected(true);

        publisher
            .publish("alerts/bob", b"x", QosLevel::default())
            .await
            .unwrap();
        assert_eq!(publisher.published().await.len(), 1);
    }
}
