//! SeaORM entities mirroring the domain model.

pub mod admin;
pub mod course;
pub mod purchase;
pub mod user;
