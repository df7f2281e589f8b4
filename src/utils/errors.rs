//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del backend de administración
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Valor fuera del conjunto permitido (estado, filtro, fecha, id de documento)
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        allowed_values: Vec<String>,
    },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JWT error: {0}")]
    Jwt(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::Database(e) => {
                tracing::error!("❌ Database error: {}", e);
                ErrorResponse {
                    error: "Database Error".to_string(),
                    message: "An error occurred while accessing the database".to_string(),
                    details: Some(json!({ "sql_error": e.to_string() })),
                    code: Some("DB_ERROR".to_string()),
                }
            }

            AppError::Validation(e) => {
                tracing::warn!("⚠️ Validation error: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "The provided data is invalid".to_string(),
                    details: Some(json!(e)),
                    code: Some("VALIDATION_ERROR".to_string()),
                }
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("🔒 Unauthorized access: {}", msg);
                ErrorResponse {
                    error: "Unauthorized".to_string(),
                    message: msg,
                    details: None,
                    code: Some("UNAUTHORIZED".to_string()),
                }
            }

            AppError::Forbidden(msg) => {
                tracing::warn!("🚫 Forbidden access: {}", msg);
                ErrorResponse {
                    error: "Forbidden".to_string(),
                    message: msg,
                    details: None,
                    code: Some("FORBIDDEN".to_string()),
                }
            }

            AppError::NotFound(msg) => {
                tracing::info!("🔍 Resource not found: {}", msg);
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_FOUND".to_string()),
                }
            }

            AppError::InvalidInput { message, allowed_values } => {
                tracing::warn!("⚠️ Invalid input: {}", message);
                let details = if allowed_values.is_empty() {
                    None
                } else {
                    Some(json!({ "allowed_values": allowed_values }))
                };
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message,
                    details,
                    code: Some("INVALID_INPUT".to_string()),
                }
            }

            AppError::Internal(msg) => {
                tracing::error!("❌ Internal error: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "An unexpected error occurred".to_string(),
                    details: Some(json!({ "internal_error": msg })),
                    code: Some("INTERNAL_ERROR".to_string()),
                }
            }

            AppError::Jwt(msg) => {
                tracing::warn!("🔒 JWT error: {}", msg);
                ErrorResponse {
                    error: "JWT Error".to_string(),
                    message: msg,
                    details: None,
                    code: Some("JWT_ERROR".to_string()),
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para valores fuera del conjunto permitido
pub fn invalid_input_error(message: impl Into<String>, allowed_values: Vec<String>) -> AppError {
    AppError::InvalidInput {
        message: message.into(),
        allowed_values,
    }
}

/// Función helper para crear errores de solicitud incorrecta sin conjunto permitido
pub fn bad_request_error(message: &str) -> AppError {
    invalid_input_error(message, Vec::new())
}
