//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean al schema
//! PostgreSQL del backend de administración.

pub mod account;
pub mod admin;
pub mod car;
pub mod document;
pub mod order;
pub mod status;
pub mod wallet;
