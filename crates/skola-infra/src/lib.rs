//! # Skola Infrastructure
//!
//! Concrete implementations of the ports defined in `skola-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL stores via SeaORM; without it only the
//!   in-memory stores are available.

pub mod auth;
pub mod database;
pub mod store;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use store::{
    InMemoryAdminStore, InMemoryCourseStore, InMemoryPurchaseStore, InMemoryUserStore,
};

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConnections, PostgresAdminStore, PostgresCourseStore, PostgresPurchaseStore,
    PostgresUserStore,
};
