//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos recibidos por la API.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;
use validator::ValidationError;

use crate::utils::errors::{bad_request_error, invalid_input_error, AppResult};

/// Extensiones aceptadas para el recibo de una recarga
pub const RECEIPT_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

lazy_static! {
    /// Móvil indio: 10 dígitos empezando por 6-9, con +91 opcional
    pub static ref PRIMARY_NUMBER_REGEX: Regex = Regex::new(r"^(?:\+91)?[6-9]\d{9}$").unwrap();
}

/// Parámetro opcional de query o formulario: vacío o solo espacios equivale a ausente
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Convertir un id de la URL o de un formulario a UUID
pub fn parse_uuid(field: &str, value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value.trim())
        .map_err(|_| bad_request_error(&format!("Invalid {} '{}': expected a UUID", field, value)))
}

/// Fecha ISO-8601: `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` o RFC 3339
pub fn parse_iso_datetime(field: &str, value: &str) -> AppResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Some(naive) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc());
    }

    Err(invalid_input_error(
        format!("Invalid {} format: '{}'. Use ISO format", field, value),
        vec![
            "YYYY-MM-DD".to_string(),
            "YYYY-MM-DDTHH:MM:SS".to_string(),
            "RFC3339".to_string(),
        ],
    ))
}

/// Validar la extensión de la referencia del recibo
pub fn validate_receipt_reference(value: &str) -> Result<(), ValidationError> {
    let extension = value
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    if RECEIPT_EXTENSIONS.contains(&extension.as_str()) {
        return Ok(());
    }

    let mut error = ValidationError::new("receipt_extension");
    error.add_param("value".into(), &value.to_string());
    error.add_param("allowed_values".into(), &RECEIPT_EXTENSIONS.to_vec());
    Err(error)
}

/// Parámetros de paginación ya normalizados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: usize,
    pub limit: usize,
}

impl Pagination {
    pub const DEFAULT_LIMIT: usize = 100;

    /// `skip` por defecto 0, `limit` por defecto 100 y nunca menor que 1
    pub fn new(skip: Option<usize>, limit: Option<usize>) -> AppResult<Self> {
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT);
        if limit < 1 {
            return Err(bad_request_error("limit must be greater than or equal to 1"));
        }
        Ok(Self {
            skip: skip.unwrap_or(0),
            limit,
        })
    }

    /// Aplicar la paginación sobre una lista ya filtrada
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().skip(self.skip).take(self.limit).collect()
    }
}
