//! Alerts Domain
//!
//! Complete domain implementation for user-scoped alerts: persistence,
//! business rules and the HTTP surface, plus publishing to an MQTT broker
//! for explicit notifications.
//!
//! Layering follows handlers → service → repository → models. The service
//! joins alerts with their owning user so wire responses carry the owner's
//! name, and delegates broker traffic to a [`mqtt_publisher::NotificationPublisher`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_alerts::{handlers, repository::InMemoryAlertRepository, service::AlertService};
//! use domain_users::repository::InMemoryUserRepository;
//! use mqtt_publisher::InMemoryPublisher;
//!
//! let service = AlertService::new(
//!     InMemoryAlertRepository::new(),
//!     InMemoryUserRepository::new(),
//!     InMemoryPublisher::new(),
//! );
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{AlertError, AlertResult};
pub use handlers::ApiDoc;
pub use models::{Alert, AlertResponse, AlertType, CreateAlert, SendMessageParams};
pub use postgres::PgAlertRepository;
pub use repository::{AlertRepository, InMemoryAlertRepository};
pub use service::AlertService;
