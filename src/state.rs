//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: configuración y handles explícitos a los
//! repositorios.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{
    AccountRepository, AdminRepository, CarRepository, OrderRepository, PgAccountRepository,
    PgAdminRepository, PgCarRepository, PgOrderRepository, PgWalletRepository, WalletRepository,
};
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub jwt: JwtConfig,
    pub admins: Arc<dyn AdminRepository>,
    pub accounts: Arc<dyn AccountRepository>,
    pub cars: Arc<dyn CarRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub wallets: Arc<dyn WalletRepository>,
}

impl AppState {
    /// Estado respaldado por PostgreSQL
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self::with_repositories(
            config,
            Arc::new(PgAdminRepository::new(pool.clone())),
            Arc::new(PgAccountRepository::new(pool.clone())),
            Arc::new(PgCarRepository::new(pool.clone())),
            Arc::new(PgOrderRepository::new(pool.clone())),
            Arc::new(PgWalletRepository::new(pool)),
        )
    }

    /// Estado con repositorios arbitrarios
    pub fn with_repositories(
        config: EnvironmentConfig,
        admins: Arc<dyn AdminRepository>,
        accounts: Arc<dyn AccountRepository>,
        cars: Arc<dyn CarRepository>,
        orders: Arc<dyn OrderRepository>,
        wallets: Arc<dyn WalletRepository>,
    ) -> Self {
        let jwt = JwtConfig::from(&config);
        Self {
            config,
            jwt,
            admins,
            accounts,
            cars,
            orders,
            wallets,
        }
    }
}
