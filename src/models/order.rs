//! Modelo de Order
//!
//! Mapea la tabla orders (viajes creados por vendors). El tipo de coche es una
//! enumeración abierta que crece con frecuencia: cada nuevo miembro requiere
//! añadir el label al ENUM car_type_enum de PostgreSQL.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, Type};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::utils::errors::{invalid_input_error, AppError};

pub const TRIP_STATUS_CANCELLED: &str = "CANCELLED";
pub const CANCELLED_BY_ADMIN: &str = "ADMIN";

/// Origen de la orden - mapea al ENUM order_source_enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "order_source_enum", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSource {
    NewOrders,
    HourlyRental,
}

impl OrderSource {
    pub const ALL: [OrderSource; 2] = [OrderSource::NewOrders, OrderSource::HourlyRental];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSource::NewOrders => "NEW_ORDERS",
            OrderSource::HourlyRental => "HOURLY_RENTAL",
        }
    }
}

impl FromStr for OrderSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| {
                invalid_input_error(
                    format!("Invalid source '{}'", s),
                    Self::ALL.iter().map(|source| source.as_str().to_string()).collect(),
                )
            })
    }
}

/// Tipo de viaje - mapea al ENUM order_type_enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "order_type_enum", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripType {
    #[serde(rename = "Oneway")]
    Oneway,
    #[serde(rename = "Round Trip")]
    RoundTrip,
    #[serde(rename = "Hourly Rental")]
    HourlyRental,
    #[serde(rename = "Multy City")]
    MultyCity,
}

/// Tipo de coche - mapea al ENUM car_type_enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "car_type_enum")]
pub enum CarType {
    #[sqlx(rename = "HATCHBACK")]
    #[serde(rename = "HATCHBACK")]
    Hatchback,
    #[sqlx(rename = "SEDAN_4_PLUS_1")]
    #[serde(rename = "SEDAN_4_PLUS_1")]
    Sedan4Plus1,
    #[sqlx(rename = "NEW_SEDAN_2022_MODEL")]
    #[serde(rename = "NEW_SEDAN_2022_MODEL")]
    NewSedan2022Model,
    #[sqlx(rename = "ETIOS_4_PLUS_1")]
    #[serde(rename = "ETIOS_4_PLUS_1")]
    Etios4Plus1,
    #[sqlx(rename = "SUV")]
    #[serde(rename = "SUV")]
    Suv,
    #[sqlx(rename = "SUV_6_PLUS_1")]
    #[serde(rename = "SUV_6_PLUS_1")]
    Suv6Plus1,
    #[sqlx(rename = "SUV_7_PLUS_1")]
    #[serde(rename = "SUV_7_PLUS_1")]
    Suv7Plus1,
    #[sqlx(rename = "INNOVA")]
    #[serde(rename = "INNOVA")]
    Innova,
    #[sqlx(rename = "INNOVA_6_PLUS_1")]
    #[serde(rename = "INNOVA_6_PLUS_1")]
    Innova6Plus1,
    #[sqlx(rename = "INNOVA_7_PLUS_1")]
    #[serde(rename = "INNOVA_7_PLUS_1")]
    Innova7Plus1,
    #[sqlx(rename = "INNOVA_CRYSTA")]
    #[serde(rename = "INNOVA_CRYSTA")]
    InnovaCrysta,
    #[sqlx(rename = "INNOVA_CRYSTA_6_PLUS_1")]
    #[serde(rename = "INNOVA_CRYSTA_6_PLUS_1")]
    InnovaCrysta6Plus1,
    #[sqlx(rename = "INNOVA_CRYSTA_7_PLUS_1")]
    #[serde(rename = "INNOVA_CRYSTA_7_PLUS_1")]
    InnovaCrysta7Plus1,
}

/// Order principal - mapea a la tabla orders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderRecord {
    pub id: i64,
    pub source: OrderSource,
    pub source_order_id: i64,
    pub vendor_id: Uuid,
    pub trip_type: TripType,
    pub car_type: CarType,
    /// Índice ("0", "1", ...) -> nombre de la ubicación
    pub pickup_drop_location: Json<BTreeMap<String, String>>,
    pub start_date_time: DateTime<Utc>,
    pub customer_name: String,
    pub customer_number: String,
    pub cost_per_km: Option<i64>,
    pub extra_cost_per_km: Option<i64>,
    pub driver_allowance: Option<i64>,
    pub extra_driver_allowance: Option<i64>,
    pub permit_charges: Option<i64>,
    pub extra_permit_charges: Option<i64>,
    pub hill_charges: Option<i64>,
    pub toll_charges: Option<i64>,
    pub pickup_notes: Option<String>,
    pub trip_status: String,
    pub pick_near_city: Vec<String>,
    pub trip_distance: Option<i64>,
    pub trip_time: Option<String>,
    pub platform_fees_percent: Option<i64>,
    pub estimated_price: Option<i64>,
    pub vendor_price: Option<i64>,
    pub cancelled_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Filtros para el listado administrativo de órdenes
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub vendor_id: Option<Uuid>,
    pub trip_status: Option<String>,
    pub source: Option<OrderSource>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!("NEW_ORDERS".parse::<OrderSource>().unwrap(), OrderSource::NewOrders);
        assert_eq!("HOURLY_RENTAL".parse::<OrderSource>().unwrap(), OrderSource::HourlyRental);
        assert!("new_orders".parse::<OrderSource>().is_err());
    }

    #[test]
    fn test_trip_type_serializes_display_value() {
        assert_eq!(serde_json::to_string(&TripType::RoundTrip).unwrap(), "\"Round Trip\"");
        assert_eq!(
            serde_json::to_string(&CarType::InnovaCrysta7Plus1).unwrap(),
            "\"INNOVA_CRYSTA_7_PLUS_1\""
        );
    }
}
