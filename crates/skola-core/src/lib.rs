//! # Skola Core
//!
//! The domain layer of the Skola course marketplace.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ownership;
pub mod ports;

pub use error::RepoError;
pub use ownership::OwnershipGuard;
