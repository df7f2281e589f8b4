//! Utilidades JWT
//!
//! Verificación de los tokens de administrador. La emisión de tokens la hace
//! el servicio de autenticación externo; `generate_token` existe para
//! herramientas y tests.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims del JWT de administrador
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,  // admin_id
    pub role: String, // Owner | Manager
    pub exp: usize,
    pub iat: usize,
}

/// Roles con acceso al panel de administración
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminRole {
    Owner,
    Manager,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Owner => "Owner",
            AdminRole::Manager => "Manager",
        }
    }

    pub fn from_claim(role: &str) -> Option<Self> {
        match role {
            "Owner" => Some(AdminRole::Owner),
            "Manager" => Some(AdminRole::Manager),
            _ => None,
        }
    }
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Generar JWT token para un admin
pub fn generate_token(admin_id: Uuid, role: &str, config: &JwtConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = AdminClaims {
        sub: admin_id.to_string(),
        role: role.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar JWT token (HS256, expiración incluida)
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<AdminClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<AdminClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))?;

    Ok(token_data.claims)
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Authorization header must start with 'Bearer '".to_string()))?;

    if token.trim().is_empty() {
        return Err(AppError::Unauthorized("Token cannot be empty".to_string()));
    }

    Ok(token.trim())
}
