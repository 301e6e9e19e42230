//! Minicart - minimal e-commerce backend
//!
//! Proxies a read-only external product catalog, authenticates users with
//! JWT bearer tokens, and keeps one server-persisted shopping cart per
//! user. Carts live inside the user record; orders are returned at
//! checkout and never stored.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use api::state::AppState;
use config::StorageBackend;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::cart::CartService;
use infrastructure::catalog::HttpCatalogClient;
use infrastructure::user::{Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, UserService};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Arc::new(Argon2Hasher::new());

    info!("Storage backend: {:?}", config.storage.backend);

    // The cart is embedded in the user record, so the same repository
    // backs both the user service and the cart store.
    let (user_service, cart_service): (
        Arc<dyn api::state::UserServiceTrait>,
        Arc<dyn api::state::CartServiceTrait>,
    ) = match config.storage.backend {
        StorageBackend::Postgres => {
            let url = config
                .storage
                .url
                .clone()
                .or_else(|| std::env::var("DATABASE_URL").ok())
                .ok_or_else(|| {
                    anyhow::anyhow!("storage.url or DATABASE_URL is required for postgres backend")
                })?;

            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            let repository = Arc::new(PostgresUserRepository::new(pool));
            repository.ensure_schema().await?;

            (
                Arc::new(UserService::new(repository.clone(), hasher)),
                Arc::new(CartService::new(repository)),
            )
        }
        StorageBackend::Memory => {
            let repository = Arc::new(InMemoryUserRepository::new());

            (
                Arc::new(UserService::new(repository.clone(), hasher)),
                Arc::new(CartService::new(repository)),
            )
        }
    };

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| config.auth.jwt_secret.clone());
    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        jwt_secret,
        config.auth.token_ttl_hours,
    )));

    let catalog = Arc::new(HttpCatalogClient::new(
        config.catalog.base_url.clone(),
        Duration::from_secs(config.catalog.timeout_secs),
    )?);

    Ok(AppState::new(user_service, cart_service, jwt_service, catalog))
}
