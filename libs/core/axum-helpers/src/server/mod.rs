//! Server infrastructure module.
//!
//! Provides router assembly with OpenAPI documentation, health and readiness
//! endpoints, and graceful shutdown.

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
