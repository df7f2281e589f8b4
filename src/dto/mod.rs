//! DTOs de entrada y salida de la API

pub mod account_dto;
pub mod admin_dto;
pub mod common_dto;
pub mod document_dto;
pub mod order_dto;
pub mod wallet_dto;

pub use common_dto::ApiResponse;
