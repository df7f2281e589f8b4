//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno del servidor de
//! administración. Las variables obligatorias ausentes se reportan como error
//! al arrancar.

use std::env;

use anyhow::{Context, Result};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    /// Vida de los tokens en segundos
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub log_level: String,
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        let jwt_secret = required("JWT_SECRET")?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .context("JWT_EXPIRATION must be a valid number")?;

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .unwrap_or_default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret,
            jwt_expiration,
            cors_origins,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{} must be set", name))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
