//! Middleware del sistema
//!
//! Autenticación de administradores y CORS.

pub mod auth;
pub mod cors;

pub use auth::{require_admin, AuthenticatedAdmin};
pub use cors::cors_layer;
