//! Modelo de cuentas
//!
//! Tres tipos de cuenta administrables: vendor, vehicle owner y driver
//! (quickdriver es un alias de driver). Cada tipo se resuelve desde un tag de
//! texto y expone el mismo conjunto de capacidades: estado, documento de cuenta
//! y resumen para la vista unificada.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::document::AccountDocumentSlot;
use crate::models::status::{AccountStatus, DocumentStatus, DriverStatus, StatusEnum};
use crate::utils::errors::{invalid_input_error, AppResult};

/// Tipo de cuenta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Vendor,
    VehicleOwner,
    Driver,
}

impl AccountKind {
    pub const ALL: [AccountKind; 3] = [AccountKind::Vendor, AccountKind::VehicleOwner, AccountKind::Driver];

    const VENDOR_TAGS: [&'static str; 2] = ["vendor", "vendors"];
    const VEHICLE_OWNER_TAGS: [&'static str; 3] = ["vehicle_owner", "vehicle_owners", "vehicleowner"];
    const DRIVER_TAGS: [&'static str; 4] = ["driver", "drivers", "quickdriver", "quickdrivers"];

    /// Resolver un tag de tipo de cuenta, sin distinguir mayúsculas y aceptando sinónimos
    pub fn parse(tag: &str) -> AppResult<Self> {
        let tag = tag.to_lowercase();
        if Self::VENDOR_TAGS.contains(&tag.as_str()) {
            Ok(AccountKind::Vendor)
        } else if Self::VEHICLE_OWNER_TAGS.contains(&tag.as_str()) {
            Ok(AccountKind::VehicleOwner)
        } else if Self::DRIVER_TAGS.contains(&tag.as_str()) {
            Ok(AccountKind::Driver)
        } else {
            let accepted = Self::VENDOR_TAGS
                .iter()
                .chain(Self::VEHICLE_OWNER_TAGS.iter())
                .chain(Self::DRIVER_TAGS.iter())
                .map(|t| t.to_string())
                .collect();
            Err(invalid_input_error(format!("Invalid account type '{}'", tag), accepted))
        }
    }

    /// Tag canónico
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Vendor => "vendor",
            AccountKind::VehicleOwner => "vehicle_owner",
            AccountKind::Driver => "driver",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccountKind::Vendor => "Vendor",
            AccountKind::VehicleOwner => "Vehicle owner",
            AccountKind::Driver => "Driver",
        }
    }

    /// Único documento a nivel de cuenta para este tipo
    pub fn account_document_slot(&self) -> AccountDocumentSlot {
        match self {
            AccountKind::Vendor | AccountKind::VehicleOwner => AccountDocumentSlot::Aadhar,
            AccountKind::Driver => AccountDocumentSlot::Licence,
        }
    }

    /// Resolver un estado de cuenta contra la enumeración propia del tipo
    pub fn resolve_status(&self, raw: &str) -> AppResult<AccountStatusValue> {
        match self {
            AccountKind::Vendor | AccountKind::VehicleOwner => {
                AccountStatus::resolve(raw).map(AccountStatusValue::Account)
            }
            AccountKind::Driver => DriverStatus::resolve(raw).map(AccountStatusValue::Driver),
        }
    }

    /// Decodificar el label guardado en la base de datos
    pub fn status_from_name(&self, name: &str) -> Option<AccountStatusValue> {
        match self {
            AccountKind::Vendor | AccountKind::VehicleOwner => {
                AccountStatus::from_name(name).map(AccountStatusValue::Account)
            }
            AccountKind::Driver => DriverStatus::from_name(name).map(AccountStatusValue::Driver),
        }
    }
}

/// Estado de cuenta ya resuelto, según el tipo de cuenta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatusValue {
    Account(AccountStatus),
    Driver(DriverStatus),
}

impl AccountStatusValue {
    pub fn name(&self) -> &'static str {
        match self {
            AccountStatusValue::Account(s) => s.name(),
            AccountStatusValue::Driver(s) => s.name(),
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            AccountStatusValue::Account(s) => s.value(),
            AccountStatusValue::Driver(s) => s.value(),
        }
    }

    /// Activo: Active para vendors/owners, Online o Driving para conductores
    pub fn is_active(&self) -> bool {
        match self {
            AccountStatusValue::Account(s) => *s == AccountStatus::Active,
            AccountStatusValue::Driver(s) => s.is_active(),
        }
    }
}

/// Vendor: credenciales (vendor) + perfil (vendor_details)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VendorRecord {
    pub id: Uuid,
    pub full_name: String,
    pub primary_number: String,
    pub secondary_number: Option<String>,
    pub gpay_number: Option<String>,
    pub wallet_balance: i64,
    pub bank_balance: i64,
    pub aadhar_number: String,
    pub aadhar_front_img: Option<String>,
    pub aadhar_status: Option<DocumentStatus>,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub account_status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

/// Vehicle owner: credenciales (vehicle_owner) + perfil (vehicle_owner_details)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleOwnerRecord {
    pub id: Uuid,
    pub full_name: String,
    pub primary_number: String,
    pub secondary_number: Option<String>,
    pub wallet_balance: i64,
    pub aadhar_number: String,
    pub aadhar_front_img: Option<String>,
    pub aadhar_status: Option<DocumentStatus>,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub account_status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

/// Conductor (car_driver), siempre asociado a un vehicle owner
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DriverRecord {
    pub id: Uuid,
    pub vehicle_owner_id: Uuid,
    pub full_name: String,
    pub primary_number: String,
    pub secondary_number: Option<String>,
    pub licence_number: String,
    pub licence_front_img: Option<String>,
    pub licence_front_status: Option<DocumentStatus>,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub driver_status: DriverStatus,
    pub created_at: DateTime<Utc>,
}

/// Documento de cuenta: referencia de imagen + estado de verificación
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDocument {
    pub slot: AccountDocumentSlot,
    pub image_url: Option<String>,
    pub status: Option<DocumentStatus>,
}

/// Cuenta de cualquiera de los tres tipos
#[derive(Debug, Clone)]
pub enum Account {
    Vendor(VendorRecord),
    VehicleOwner(VehicleOwnerRecord),
    Driver(DriverRecord),
}

impl Account {
    pub fn kind(&self) -> AccountKind {
        match self {
            Account::Vendor(_) => AccountKind::Vendor,
            Account::VehicleOwner(_) => AccountKind::VehicleOwner,
            Account::Driver(_) => AccountKind::Driver,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Account::Vendor(v) => v.id,
            Account::VehicleOwner(o) => o.id,
            Account::Driver(d) => d.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Account::Vendor(v) => &v.full_name,
            Account::VehicleOwner(o) => &o.full_name,
            Account::Driver(d) => &d.full_name,
        }
    }

    pub fn status(&self) -> AccountStatusValue {
        match self {
            Account::Vendor(v) => AccountStatusValue::Account(v.account_status),
            Account::VehicleOwner(o) => AccountStatusValue::Account(o.account_status),
            Account::Driver(d) => AccountStatusValue::Driver(d.driver_status),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Account::Vendor(v) => v.created_at,
            Account::VehicleOwner(o) => o.created_at,
            Account::Driver(d) => d.created_at,
        }
    }

    pub fn account_document(&self) -> AccountDocument {
        let (image_url, status) = match self {
            Account::Vendor(v) => (v.aadhar_front_img.clone(), v.aadhar_status),
            Account::VehicleOwner(o) => (o.aadhar_front_img.clone(), o.aadhar_status),
            Account::Driver(d) => (d.licence_front_img.clone(), d.licence_front_status),
        };
        AccountDocument {
            slot: self.kind().account_document_slot(),
            image_url,
            status,
        }
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id(),
            name: self.name().to_string(),
            kind: self.kind(),
            status: self.status(),
        }
    }
}

/// Fila resumida para la vista unificada
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    pub status: AccountStatusValue,
}

/// Fila cruda de resumen tal como sale de la base de datos
#[derive(Debug, FromRow)]
pub struct AccountSummaryRow {
    pub id: Uuid,
    pub name: String,
    pub status: String,
}

/// Filtros para listados de vendors y vehicle owners
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountListFilter {
    pub mobile: Option<String>,
    pub city: Option<String>,
}

/// Filtros para listados de conductores
#[derive(Debug, Clone, Default)]
pub struct DriverListFilter {
    pub vehicle_owner_id: Option<Uuid>,
    pub status: Option<DriverStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_kind_synonyms() {
        assert_eq!(AccountKind::parse("Vendors").unwrap(), AccountKind::Vendor);
        assert_eq!(AccountKind::parse("VEHICLEOWNER").unwrap(), AccountKind::VehicleOwner);
        assert_eq!(AccountKind::parse("vehicle_owners").unwrap(), AccountKind::VehicleOwner);
        assert_eq!(AccountKind::parse("QuickDriver").unwrap(), AccountKind::Driver);
        assert_eq!(AccountKind::parse("drivers").unwrap(), AccountKind::Driver);
        assert!(AccountKind::parse("admin").is_err());
        assert!(AccountKind::parse("vehicle-owner").is_err());
    }

    #[test]
    fn test_resolve_status_per_kind() {
        assert_eq!(
            AccountKind::Vendor.resolve_status("active").unwrap(),
            AccountStatusValue::Account(AccountStatus::Active)
        );
        assert_eq!(
            AccountKind::Driver.resolve_status("driving").unwrap(),
            AccountStatusValue::Driver(DriverStatus::Driving)
        );
        assert!(AccountKind::VehicleOwner.resolve_status("online").is_err());
        assert!(AccountKind::Driver.resolve_status("active").is_err());
    }

    #[test]
    fn test_active_policy() {
        assert!(AccountStatusValue::Account(AccountStatus::Active).is_active());
        assert!(!AccountStatusValue::Account(AccountStatus::Pending).is_active());
        assert!(AccountStatusValue::Driver(DriverStatus::Driving).is_active());
        assert!(!AccountStatusValue::Driver(DriverStatus::Blocked).is_active());
    }

    #[test]
    fn test_account_document_slot() {
        assert_eq!(AccountKind::Vendor.account_document_slot(), AccountDocumentSlot::Aadhar);
        assert_eq!(AccountKind::Driver.account_document_slot(), AccountDocumentSlot::Licence);
    }
}
