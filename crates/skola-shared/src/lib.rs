//! # Skola Shared
//!
//! Wire types shared between frontend and backend.
//! In a full-stack Rust setup, this crate is compiled for both server and WASM.

pub mod dto;
pub mod response;
pub mod validate;

pub use response::{ErrorBody, FieldError};
