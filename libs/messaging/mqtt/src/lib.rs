//! MQTT notification publishing.
//!
//! Wraps a `rumqttc` async client behind the [`NotificationPublisher`] trait
//! so domain code can publish without knowing about the broker connection
//! lifecycle. The concrete [`MqttPublisher`] drives the rumqttc event loop in
//! a background task and tracks connection state for readiness probes.

pub mod error;
pub mod publisher;

pub use error::{PublishError, PublishResult};
pub use publisher::{
    ConnectionStatus, InMemoryPublisher, MqttPublisher, NotificationPublisher, QosLevel,
};
