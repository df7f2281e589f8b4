//! Repositorios de acceso a datos
//!
//! Cada repositorio es un trait con una implementación PostgreSQL. Los
//! controladores solo conocen el trait, lo que permite sustituir el
//! almacenamiento en los tests.

pub mod account_repository;
pub mod admin_repository;
pub mod car_repository;
pub mod order_repository;
pub mod wallet_repository;

pub use account_repository::{AccountRepository, PgAccountRepository};
pub use admin_repository::{AdminRepository, PgAdminRepository};
pub use car_repository::{CarRepository, PgCarRepository};
pub use order_repository::{OrderRepository, PgOrderRepository};
pub use wallet_repository::{PgWalletRepository, WalletRepository};
