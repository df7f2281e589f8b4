//! Controladores
//!
//! Lógica de cada operación administrativa sobre los repositorios.

pub mod account_controller;
pub mod admin_controller;
pub mod document_controller;
pub mod order_controller;
pub mod unified_account_controller;
pub mod wallet_controller;
