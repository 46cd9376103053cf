//! Application state - shared across all handlers.

use std::sync::Arc;

use skola_core::OwnershipGuard;
use skola_core::ports::{
    AdminRepository, CourseRepository, PasswordService, PurchaseRepository, TokenService,
    UserRepository,
};
use skola_infra::{
    Argon2PasswordService, InMemoryAdminStore, InMemoryCourseStore, InMemoryPurchaseStore,
    InMemoryUserStore, JwtConfig, JwtTokenService,
};

#[cfg(feature = "postgres")]
use skola_infra::{
    DatabaseConnections, PostgresAdminStore, PostgresCourseStore, PostgresPurchaseStore,
    PostgresUserStore,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub admins: Arc<dyn AdminRepository>,
    pub users: Arc<dyn UserRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub purchases: Arc<dyn PurchaseRepository>,
    pub guard: OwnershipGuard,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Assemble state from explicit store implementations.
    pub fn with_stores(
        admins: Arc<dyn AdminRepository>,
        users: Arc<dyn UserRepository>,
        courses: Arc<dyn CourseRepository>,
        purchases: Arc<dyn PurchaseRepository>,
        auth: JwtConfig,
    ) -> Self {
        let guard = OwnershipGuard::new(courses.clone());

        Self {
            admins,
            users,
            courses,
            purchases,
            guard,
            tokens: Arc::new(JwtTokenService::new(auth)),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }

    /// State backed entirely by in-memory stores.
    pub fn in_memory(auth: JwtConfig) -> Self {
        Self::with_stores(
            Arc::new(InMemoryAdminStore::new()),
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryCourseStore::new()),
            Arc::new(InMemoryPurchaseStore::new()),
            auth,
        )
    }

    /// Build the application state with appropriate store implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        tracing::info!("Application state initialized (postgres)");
                        return Self::with_stores(
                            Arc::new(PostgresAdminStore::new(connections.main.clone())),
                            Arc::new(PostgresUserStore::new(connections.main.clone())),
                            Arc::new(PostgresCourseStore::new(connections.main.clone())),
                            Arc::new(PostgresPurchaseStore::new(connections.main)),
                            config.auth.clone(),
                        );
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory stores.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running with in-memory stores.");
            }
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Built without postgres feature - using in-memory stores");

        tracing::info!("Application state initialized (in-memory)");
        Self::in_memory(config.auth.clone())
    }
}
