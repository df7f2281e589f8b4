//! Backend de administración de flota
//!
//! API HTTP para administrar vendors, vehicle owners, conductores, coches,
//! órdenes y wallets sobre PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
