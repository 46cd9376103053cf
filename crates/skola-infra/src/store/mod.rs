//! In-memory store implementations - the default when no database is configured.

mod memory;

pub use memory::{
    InMemoryAdminStore, InMemoryCourseStore, InMemoryPurchaseStore, InMemoryUserStore,
};
