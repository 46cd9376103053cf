//! Database connection management and SeaORM stores.

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;

#[cfg(feature = "postgres")]
mod repos;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;

#[cfg(feature = "postgres")]
pub use repos::{
    PostgresAdminStore, PostgresCourseStore, PostgresPurchaseStore, PostgresUserStore,
};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
