use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::document_dto::DocumentInfo;
use crate::models::account::{Account, AccountSummary, DriverRecord, VehicleOwnerRecord, VendorRecord};
use crate::models::car::CarRecord;
use crate::models::document::CarDocumentSlot;
use crate::models::status::{DocumentStatus, StatusEnum};

// Formularios de cambio de estado

#[derive(Debug, Deserialize)]
pub struct AccountStatusForm {
    pub account_status: String,
}

#[derive(Debug, Deserialize)]
pub struct DriverStatusForm {
    pub new_status: String,
}

#[derive(Debug, Deserialize)]
pub struct DocumentStatusForm {
    pub status_value: String,
}

#[derive(Debug, Deserialize)]
pub struct CarStatusForm {
    pub car_status: String,
}

// Query de listado de conductores
#[derive(Debug, Default, Deserialize)]
pub struct DriverListQuery {
    pub vehicle_owner_id: Option<String>,
    pub status_filter: Option<String>,
}

// Query de la vista unificada
#[derive(Debug, Default, Deserialize)]
pub struct UnifiedAccountQuery {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
    pub account_type: Option<String>,
    pub status_filter: Option<String>,
}

fn document_status_name(status: Option<DocumentStatus>) -> String {
    status.unwrap_or_default().name().to_string()
}

#[derive(Debug, Serialize)]
pub struct VendorResponse {
    pub id: Uuid,
    pub full_name: String,
    pub primary_number: String,
    pub secondary_number: Option<String>,
    pub gpay_number: Option<String>,
    pub wallet_balance: i64,
    pub bank_balance: i64,
    pub aadhar_number: String,
    pub aadhar_front_img: Option<String>,
    pub aadhar_status: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub account_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<VendorRecord> for VendorResponse {
    fn from(vendor: VendorRecord) -> Self {
        Self {
            id: vendor.id,
            full_name: vendor.full_name,
            primary_number: vendor.primary_number,
            secondary_number: vendor.secondary_number,
            gpay_number: vendor.gpay_number,
            wallet_balance: vendor.wallet_balance,
            bank_balance: vendor.bank_balance,
            aadhar_number: vendor.aadhar_number,
            aadhar_front_img: vendor.aadhar_front_img,
            aadhar_status: document_status_name(vendor.aadhar_status),
            address: vendor.address,
            city: vendor.city,
            pincode: vendor.pincode,
            account_status: vendor.account_status.value().to_string(),
            created_at: vendor.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VehicleOwnerResponse {
    pub id: Uuid,
    pub full_name: String,
    pub primary_number: String,
    pub secondary_number: Option<String>,
    pub wallet_balance: i64,
    pub aadhar_number: String,
    pub aadhar_front_img: Option<String>,
    pub aadhar_status: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub account_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<VehicleOwnerRecord> for VehicleOwnerResponse {
    fn from(owner: VehicleOwnerRecord) -> Self {
        Self {
            id: owner.id,
            full_name: owner.full_name,
            primary_number: owner.primary_number,
            secondary_number: owner.secondary_number,
            wallet_balance: owner.wallet_balance,
            aadhar_number: owner.aadhar_number,
            aadhar_front_img: owner.aadhar_front_img,
            aadhar_status: document_status_name(owner.aadhar_status),
            address: owner.address,
            city: owner.city,
            pincode: owner.pincode,
            account_status: owner.account_status.value().to_string(),
            created_at: owner.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub vehicle_owner_id: Uuid,
    pub full_name: String,
    pub primary_number: String,
    pub secondary_number: Option<String>,
    pub licence_number: String,
    pub licence_front_img: Option<String>,
    pub licence_front_status: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub driver_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<DriverRecord> for DriverResponse {
    fn from(driver: DriverRecord) -> Self {
        Self {
            id: driver.id,
            vehicle_owner_id: driver.vehicle_owner_id,
            full_name: driver.full_name,
            primary_number: driver.primary_number,
            secondary_number: driver.secondary_number,
            licence_number: driver.licence_number,
            licence_front_img: driver.licence_front_img,
            licence_front_status: document_status_name(driver.licence_front_status),
            address: driver.address,
            city: driver.city,
            pincode: driver.pincode,
            driver_status: driver.driver_status.value().to_string(),
            created_at: driver.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CarDocumentStatus {
    pub image_url: Option<String>,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: Uuid,
    pub vehicle_owner_id: Uuid,
    pub car_name: String,
    pub car_type: String,
    pub car_number: String,
    pub year_of_the_car: Option<String>,
    pub car_status: String,
    /// Slot -> imagen y estado
    pub documents: BTreeMap<String, CarDocumentStatus>,
    pub created_at: DateTime<Utc>,
}

impl From<CarRecord> for CarResponse {
    fn from(car: CarRecord) -> Self {
        let documents = CarDocumentSlot::ALL
            .iter()
            .map(|slot| {
                let (image_url, status) = car.document(*slot);
                (
                    slot.as_str().to_string(),
                    CarDocumentStatus {
                        image_url: image_url.map(str::to_string),
                        status: document_status_name(status),
                    },
                )
            })
            .collect();

        Self {
            id: car.id,
            vehicle_owner_id: car.vehicle_owner_id,
            car_name: car.car_name,
            car_type: car.car_type,
            car_number: car.car_number,
            year_of_the_car: car.year_of_the_car,
            car_status: car.car_status.value().to_string(),
            documents,
            created_at: car.created_at,
        }
    }
}

// Detalle del vehicle owner con sus coches y conductores
#[derive(Debug, Serialize)]
pub struct VehicleOwnerDetailResponse {
    pub owner: VehicleOwnerResponse,
    pub cars: Vec<CarResponse>,
    pub drivers: Vec<DriverResponse>,
}

// Fila de la vista unificada
#[derive(Debug, Clone, Serialize)]
pub struct UnifiedAccountItem {
    pub id: Uuid,
    pub name: String,
    pub account_type: String,
    pub account_status: String,
}

impl From<AccountSummary> for UnifiedAccountItem {
    fn from(summary: AccountSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            account_type: summary.kind.as_str().to_string(),
            account_status: summary.status.value().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnifiedAccountListResponse {
    pub accounts: Vec<UnifiedAccountItem>,
    pub total_count: usize,
    pub active_count: usize,
    pub inactive_count: usize,
}

// Detalle unificado de cualquier tipo de cuenta
#[derive(Debug, Serialize)]
pub struct UnifiedAccountDetail {
    pub id: Uuid,
    pub name: String,
    pub account_type: String,
    pub account_status: String,
    pub primary_number: String,
    pub secondary_number: Option<String>,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub wallet_balance: Option<i64>,
    pub vehicle_owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub documents: BTreeMap<String, DocumentInfo>,
}

impl From<Account> for UnifiedAccountDetail {
    fn from(account: Account) -> Self {
        let document = DocumentInfo::for_account(&account.account_document());
        let mut documents = BTreeMap::new();
        documents.insert(document.document_id.clone(), document);

        let id = account.id();
        let name = account.name().to_string();
        let account_type = account.kind().as_str().to_string();
        let account_status = account.status().value().to_string();
        let created_at = account.created_at();

        let (primary_number, secondary_number, address, city, pincode, wallet_balance, vehicle_owner_id) =
            match account {
                Account::Vendor(v) => (
                    v.primary_number,
                    v.secondary_number,
                    v.address,
                    v.city,
                    v.pincode,
                    Some(v.wallet_balance),
                    None,
                ),
                Account::VehicleOwner(o) => (
                    o.primary_number,
                    o.secondary_number,
                    o.address,
                    o.city,
                    o.pincode,
                    Some(o.wallet_balance),
                    None,
                ),
                Account::Driver(d) => (
                    d.primary_number,
                    d.secondary_number,
                    d.address,
                    d.city,
                    d.pincode,
                    None,
                    Some(d.vehicle_owner_id),
                ),
            };

        Self {
            id,
            name,
            account_type,
            account_status,
            primary_number,
            secondary_number,
            address,
            city,
            pincode,
            wallet_balance,
            vehicle_owner_id,
            created_at,
            documents,
        }
    }
}
