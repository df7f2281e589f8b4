//! Utilidades
//!
//! Errores de la aplicación, JWT y validación de entrada.

pub mod errors;
pub mod jwt;
pub mod validation;
