//! Configuración de base de datos
//!
//! Parámetros del pool de conexiones PostgreSQL de SQLx.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set in environment variables")?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a valid number")?;

        let min_connections = env::var("DATABASE_MIN_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .context("DATABASE_MIN_CONNECTIONS must be a valid number")?;

        Ok(Self::with_url(url, max_connections, min_connections))
    }

    pub fn with_url(url: String, max_connections: u32, min_connections: u32) -> Self {
        Self {
            url,
            max_connections,
            min_connections: min_connections.min(max_connections),
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }
}
