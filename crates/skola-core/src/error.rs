//! Domain-level error types.

use thiserror::Error;

/// Store-level errors surfaced by the credential and course stores.
///
/// Raw error text from a backing store must never reach a client; the API
/// boundary translates these into opaque responses.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Record not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
