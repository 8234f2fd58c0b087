//! Users Domain
//!
//! Read-only user store for the alert service. Users are provisioned
//! externally (seed migration or another service); this crate only resolves
//! them when alerts reference an owner.

pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;

pub use error::{UserError, UserResult};
pub use models::User;
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
