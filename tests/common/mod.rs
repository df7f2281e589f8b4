//! Utilidades compartidas por los tests de integración
//!
//! `MemoryStore` implementa los cuatro repositorios sobre vectores en memoria
//! para poder ejercitar el router completo sin PostgreSQL.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;
use sqlx::types::Json;
use tower::ServiceExt;
use uuid::Uuid;

use fleet_admin::config::EnvironmentConfig;
use fleet_admin::models::account::{
    Account, AccountKind, AccountListFilter, AccountStatusValue, AccountSummary, DriverListFilter,
    DriverRecord, VehicleOwnerRecord, VendorRecord,
};
use fleet_admin::models::admin::AdminRecord;
use fleet_admin::models::car::CarRecord;
use fleet_admin::models::document::CarDocumentSlot;
use fleet_admin::models::order::{
    CarType, OrderFilter, OrderRecord, OrderSource, TripType, CANCELLED_BY_ADMIN, TRIP_STATUS_CANCELLED,
};
use fleet_admin::models::status::{AccountStatus, CarStatus, DocumentStatus, DriverStatus, RazorpayPaymentStatus};
use fleet_admin::models::wallet::{
    AddMoneyCommand, AddMoneyOutcome, AddMoneyRecord, LedgerEntry, LedgerEntryType, RazorpayFilter,
    RazorpayTransaction,
};
use fleet_admin::repositories::{
    AccountRepository, AdminRepository, CarRepository, OrderRepository, WalletRepository,
};
use fleet_admin::utils::errors::AppResult;
use fleet_admin::utils::validation::Pagination;
use fleet_admin::utils::jwt::{generate_token, JwtConfig};
use fleet_admin::{create_app, AppState};

pub const JWT_SECRET: &str = "test-secret";

#[derive(Default)]
pub struct Tables {
    pub admins: Vec<AdminRecord>,
    pub admin_ledger: Vec<LedgerEntry>,
    pub razorpay: Vec<RazorpayTransaction>,
    pub vendors: Vec<VendorRecord>,
    pub owners: Vec<VehicleOwnerRecord>,
    pub drivers: Vec<DriverRecord>,
    pub cars: Vec<CarRecord>,
    pub orders: Vec<OrderRecord>,
    pub owner_ledger: Vec<LedgerEntry>,
    pub vendor_ledger: Vec<LedgerEntry>,
    pub add_money: Vec<AddMoneyRecord>,
}

/// Almacenamiento en memoria; las filas conservan el orden de inserción
#[derive(Default)]
pub struct MemoryStore {
    pub tables: Mutex<Tables>,
    clock: Mutex<i64>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Marca de tiempo creciente para que el orden por created_at sea el de inserción
    fn tick(&self) -> DateTime<Utc> {
        let mut clock = self.clock.lock().unwrap();
        *clock += 1;
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(*clock)
    }

    pub fn add_admin(&self, username: &str, role: &str) -> Uuid {
        let admin = AdminRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            role: role.to_string(),
            email: format!("{}@fleet.in", username),
            phone: format!("96{:08}", self.tables.lock().unwrap().admins.len()),
            organization_id: None,
            created_at: self.tick(),
        };
        let id = admin.id;
        self.tables.lock().unwrap().admins.push(admin);
        id
    }

    /// Movimiento en la wallet del admin, encadenado al saldo anterior
    pub fn add_admin_ledger_entry(&self, admin_id: Uuid, entry_type: LedgerEntryType, amount: i64) {
        let now = self.tick();
        let mut tables = self.tables.lock().unwrap();
        let balance_before = tables
            .admin_ledger
            .iter()
            .rev()
            .find(|e| e.account_id == admin_id)
            .map_or(0, |e| e.balance_after);
        let balance_after = match entry_type {
            LedgerEntryType::Credit => balance_before + amount,
            LedgerEntryType::Debit => balance_before - amount,
        };
        tables.admin_ledger.push(LedgerEntry {
            id: Uuid::new_v4(),
            account_id: admin_id,
            entry_type,
            amount,
            balance_before,
            balance_after,
            notes: None,
            reference_id: None,
            created_at: now,
        });
    }

    pub fn add_razorpay_transaction(&self, vehicle_owner_id: Uuid, amount: i64, status: RazorpayPaymentStatus) -> Uuid {
        let now = self.tick();
        let mut tables = self.tables.lock().unwrap();
        let id = Uuid::new_v4();
        let order_number = tables.razorpay.len();
        tables.razorpay.push(RazorpayTransaction {
            id,
            vehicle_owner_id,
            razorpay_order_id: format!("order_{:06}", order_number),
            razorpay_payment_id: None,
            amount,
            currency: "INR".to_string(),
            status,
            created_at: now,
        });
        id
    }

    pub fn admin(&self, id: Uuid) -> AdminRecord {
        self.tables
            .lock()
            .unwrap()
            .admins
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .unwrap()
    }

    pub fn add_vendor(&self, name: &str, status: AccountStatus) -> Uuid {
        let vendor = VendorRecord {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            primary_number: format!("98{:08}", self.tables.lock().unwrap().vendors.len()),
            secondary_number: None,
            gpay_number: None,
            wallet_balance: 0,
            bank_balance: 0,
            aadhar_number: "111122223333".to_string(),
            aadhar_front_img: Some("vendors/aadhar.jpg".to_string()),
            aadhar_status: None,
            address: "1 Anna Salai".to_string(),
            city: "Chennai".to_string(),
            pincode: "600002".to_string(),
            account_status: status,
            created_at: self.tick(),
        };
        let id = vendor.id;
        self.tables.lock().unwrap().vendors.push(vendor);
        id
    }

    pub fn add_owner(&self, name: &str, primary_number: &str, status: AccountStatus) -> Uuid {
        let owner = VehicleOwnerRecord {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            primary_number: primary_number.to_string(),
            secondary_number: None,
            wallet_balance: 0,
            aadhar_number: "444455556666".to_string(),
            aadhar_front_img: None,
            aadhar_status: None,
            address: "5 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            pincode: "560001".to_string(),
            account_status: status,
            created_at: self.tick(),
        };
        let id = owner.id;
        self.tables.lock().unwrap().owners.push(owner);
        id
    }

    pub fn add_driver(&self, vehicle_owner_id: Uuid, name: &str, status: DriverStatus) -> Uuid {
        let driver = DriverRecord {
            id: Uuid::new_v4(),
            vehicle_owner_id,
            full_name: name.to_string(),
            primary_number: format!("97{:08}", self.tables.lock().unwrap().drivers.len()),
            secondary_number: None,
            licence_number: "TN0120240001234".to_string(),
            licence_front_img: Some("drivers/licence.png".to_string()),
            licence_front_status: Some(DocumentStatus::Verified),
            address: "9 Beach Road".to_string(),
            city: "Chennai".to_string(),
            pincode: "600001".to_string(),
            driver_status: status,
            created_at: self.tick(),
        };
        let id = driver.id;
        self.tables.lock().unwrap().drivers.push(driver);
        id
    }

    /// Coche sin ninguna imagen de documento
    pub fn add_car(&self, vehicle_owner_id: Uuid, car_name: &str) -> Uuid {
        let car = CarRecord {
            id: Uuid::new_v4(),
            vehicle_owner_id,
            car_name: car_name.to_string(),
            car_type: "SEDAN_4_PLUS_1".to_string(),
            car_number: format!("TN01AB{:04}", self.tables.lock().unwrap().cars.len()),
            year_of_the_car: Some("2022".to_string()),
            rc_front_img_url: None,
            rc_front_status: None,
            rc_back_img_url: None,
            rc_back_status: None,
            insurance_img_url: None,
            insurance_status: None,
            fc_img_url: None,
            fc_status: None,
            car_img_url: None,
            car_img_status: None,
            permit_img_url: None,
            permit_status: None,
            car_status: CarStatus::Processing,
            created_at: self.tick(),
        };
        let id = car.id;
        self.tables.lock().unwrap().cars.push(car);
        id
    }

    pub fn set_car_image(&self, car_id: Uuid, slot: CarDocumentSlot, url: &str) {
        let mut tables = self.tables.lock().unwrap();
        let car = tables.cars.iter_mut().find(|c| c.id == car_id).unwrap();
        let field = match slot {
            CarDocumentSlot::RcFront => &mut car.rc_front_img_url,
            CarDocumentSlot::RcBack => &mut car.rc_back_img_url,
            CarDocumentSlot::Insurance => &mut car.insurance_img_url,
            CarDocumentSlot::Fc => &mut car.fc_img_url,
            CarDocumentSlot::CarImg => &mut car.car_img_url,
            CarDocumentSlot::Permit => &mut car.permit_img_url,
        };
        *field = Some(url.to_string());
    }

    pub fn add_order(&self, vendor_id: Uuid, source: OrderSource) -> i64 {
        let tables = self.tables.lock().unwrap();
        let id = tables.orders.len() as i64 + 1;
        let mut locations = BTreeMap::new();
        locations.insert("0".to_string(), "Chennai".to_string());
        locations.insert("1".to_string(), "Pondicherry".to_string());
        drop(tables);

        let order = OrderRecord {
            id,
            source,
            source_order_id: id * 10,
            vendor_id,
            trip_type: TripType::Oneway,
            car_type: CarType::Sedan4Plus1,
            pickup_drop_location: Json(locations),
            start_date_time: self.tick(),
            customer_name: "Meena".to_string(),
            customer_number: "9000000000".to_string(),
            cost_per_km: Some(14),
            extra_cost_per_km: None,
            driver_allowance: Some(300),
            extra_driver_allowance: None,
            permit_charges: None,
            extra_permit_charges: None,
            hill_charges: None,
            toll_charges: Some(120),
            pickup_notes: None,
            trip_status: "PENDING".to_string(),
            pick_near_city: vec!["Chennai".to_string()],
            trip_distance: Some(150),
            trip_time: Some("3h".to_string()),
            platform_fees_percent: Some(10),
            estimated_price: Some(2520),
            vendor_price: Some(2800),
            cancelled_by: None,
            created_at: self.tick(),
        };
        self.tables.lock().unwrap().orders.push(order);
        id
    }

    pub fn driver(&self, id: Uuid) -> DriverRecord {
        self.tables
            .lock()
            .unwrap()
            .drivers
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .unwrap()
    }

    pub fn owner(&self, id: Uuid) -> VehicleOwnerRecord {
        self.tables
            .lock()
            .unwrap()
            .owners
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .unwrap()
    }

    pub fn car(&self, id: Uuid) -> CarRecord {
        self.tables
            .lock()
            .unwrap()
            .cars
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .unwrap()
    }
}

fn matches_filter(primary_number: &str, city: &str, filter: &AccountListFilter) -> bool {
    filter.mobile.as_deref().map_or(true, |m| m == primary_number)
        && filter.city.as_deref().map_or(true, |c| c == city)
}

#[async_trait]
impl AdminRepository for MemoryStore {
    async fn find_admin(&self, id: Uuid) -> AppResult<Option<AdminRecord>> {
        Ok(self.tables.lock().unwrap().admins.iter().find(|a| a.id == id).cloned())
    }

    async fn list_admins(&self, pagination: Pagination) -> AppResult<Vec<AdminRecord>> {
        let admins = self.tables.lock().unwrap().admins.clone();
        Ok(pagination.apply(admins))
    }

    async fn update_admin_profile(&self, admin: &AdminRecord) -> AppResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .admins
            .iter_mut()
            .find(|a| a.id == admin.id)
            .map(|stored| *stored = admin.clone())
            .is_some())
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn find_account(&self, kind: AccountKind, id: Uuid) -> AppResult<Option<Account>> {
        let tables = self.tables.lock().unwrap();
        let account = match kind {
            AccountKind::Vendor => tables.vendors.iter().find(|v| v.id == id).cloned().map(Account::Vendor),
            AccountKind::VehicleOwner => tables
                .owners
                .iter()
                .find(|o| o.id == id)
                .cloned()
                .map(Account::VehicleOwner),
            AccountKind::Driver => tables.drivers.iter().find(|d| d.id == id).cloned().map(Account::Driver),
        };
        Ok(account)
    }

    async fn list_vendors(&self, filter: &AccountListFilter) -> AppResult<Vec<VendorRecord>> {
        let tables = self.tables.lock().unwrap();
        let mut vendors: Vec<VendorRecord> = tables
            .vendors
            .iter()
            .filter(|v| matches_filter(&v.primary_number, &v.city, filter))
            .cloned()
            .collect();
        vendors.reverse();
        Ok(vendors)
    }

    async fn list_vehicle_owners(&self, filter: &AccountListFilter) -> AppResult<Vec<VehicleOwnerRecord>> {
        let tables = self.tables.lock().unwrap();
        let mut owners: Vec<VehicleOwnerRecord> = tables
            .owners
            .iter()
            .filter(|o| matches_filter(&o.primary_number, &o.city, filter))
            .cloned()
            .collect();
        owners.reverse();
        Ok(owners)
    }

    async fn list_drivers(&self, filter: &DriverListFilter) -> AppResult<Vec<DriverRecord>> {
        let tables = self.tables.lock().unwrap();
        let mut drivers: Vec<DriverRecord> = tables
            .drivers
            .iter()
            .filter(|d| filter.vehicle_owner_id.map_or(true, |id| d.vehicle_owner_id == id))
            .filter(|d| filter.status.map_or(true, |s| d.driver_status == s))
            .cloned()
            .collect();
        drivers.reverse();
        Ok(drivers)
    }

    async fn list_account_summaries(
        &self,
        kind: AccountKind,
        statuses: Option<&[AccountStatusValue]>,
    ) -> AppResult<Vec<AccountSummary>> {
        let tables = self.tables.lock().unwrap();
        let accounts: Vec<Account> = match kind {
            AccountKind::Vendor => tables.vendors.iter().cloned().map(Account::Vendor).collect(),
            AccountKind::VehicleOwner => tables.owners.iter().cloned().map(Account::VehicleOwner).collect(),
            AccountKind::Driver => tables.drivers.iter().cloned().map(Account::Driver).collect(),
        };

        Ok(accounts
            .iter()
            .map(Account::summary)
            .filter(|s| statuses.map_or(true, |list| list.contains(&s.status)))
            .collect())
    }

    async fn find_vehicle_owner_by_primary_number(
        &self,
        primary_number: &str,
    ) -> AppResult<Option<VehicleOwnerRecord>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .owners
            .iter()
            .find(|o| o.primary_number == primary_number)
            .cloned())
    }

    async fn set_account_status(
        &self,
        kind: AccountKind,
        id: Uuid,
        status: AccountStatusValue,
    ) -> AppResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        let updated = match (kind, status) {
            (AccountKind::Vendor, AccountStatusValue::Account(s)) => tables
                .vendors
                .iter_mut()
                .find(|v| v.id == id)
                .map(|v| v.account_status = s)
                .is_some(),
            (AccountKind::VehicleOwner, AccountStatusValue::Account(s)) => tables
                .owners
                .iter_mut()
                .find(|o| o.id == id)
                .map(|o| o.account_status = s)
                .is_some(),
            (AccountKind::Driver, AccountStatusValue::Driver(s)) => tables
                .drivers
                .iter_mut()
                .find(|d| d.id == id)
                .map(|d| d.driver_status = s)
                .is_some(),
            _ => false,
        };
        Ok(updated)
    }

    async fn set_account_document_status(
        &self,
        kind: AccountKind,
        id: Uuid,
        status: DocumentStatus,
    ) -> AppResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        let updated = match kind {
            AccountKind::Vendor => tables
                .vendors
                .iter_mut()
                .find(|v| v.id == id)
                .map(|v| v.aadhar_status = Some(status))
                .is_some(),
            AccountKind::VehicleOwner => tables
                .owners
                .iter_mut()
                .find(|o| o.id == id)
                .map(|o| o.aadhar_status = Some(status))
                .is_some(),
            AccountKind::Driver => tables
                .drivers
                .iter_mut()
                .find(|d| d.id == id)
                .map(|d| d.licence_front_status = Some(status))
                .is_some(),
        };
        Ok(updated)
    }
}

#[async_trait]
impl CarRepository for MemoryStore {
    async fn find_car(&self, id: Uuid) -> AppResult<Option<CarRecord>> {
        Ok(self.tables.lock().unwrap().cars.iter().find(|c| c.id == id).cloned())
    }

    async fn list_cars_by_owner(&self, vehicle_owner_id: Uuid) -> AppResult<Vec<CarRecord>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .cars
            .iter()
            .filter(|c| c.vehicle_owner_id == vehicle_owner_id)
            .cloned()
            .collect())
    }

    async fn set_car_status(&self, id: Uuid, status: CarStatus) -> AppResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .cars
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| c.car_status = status)
            .is_some())
    }

    async fn set_car_document_status(
        &self,
        id: Uuid,
        slot: CarDocumentSlot,
        status: DocumentStatus,
    ) -> AppResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .cars
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| c.set_document_status(slot, status))
            .is_some())
    }
}

/// Mismo criterio que la consulta SQL del listado de órdenes
fn order_matches(filter: &OrderFilter, order: &OrderRecord) -> bool {
    filter.vendor_id.map_or(true, |id| order.vendor_id == id)
        && filter
            .trip_status
            .as_ref()
            .map_or(true, |status| &order.trip_status == status)
        && filter.source.map_or(true, |source| order.source == source)
        && filter.start_date.map_or(true, |start| order.created_at >= start)
        && filter.end_date.map_or(true, |end| order.created_at <= end)
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn list_orders(&self, filter: &OrderFilter) -> AppResult<Vec<OrderRecord>> {
        let tables = self.tables.lock().unwrap();
        let mut orders: Vec<OrderRecord> = tables.orders.iter().filter(|o| order_matches(filter, o)).cloned().collect();
        orders.reverse();
        Ok(orders)
    }

    async fn cancel_order(&self, id: i64) -> AppResult<Option<OrderRecord>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.orders.iter_mut().find(|o| o.id == id).map(|order| {
            order.trip_status = TRIP_STATUS_CANCELLED.to_string();
            order.cancelled_by = Some(CANCELLED_BY_ADMIN.to_string());
            order.clone()
        }))
    }
}

#[async_trait]
impl WalletRepository for MemoryStore {
    async fn vehicle_owner_ledger(&self, vehicle_owner_id: Uuid) -> AppResult<Vec<LedgerEntry>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .owner_ledger
            .iter()
            .rev()
            .filter(|e| e.account_id == vehicle_owner_id)
            .cloned()
            .collect())
    }

    async fn vendor_ledger(&self, vendor_id: Uuid) -> AppResult<Vec<LedgerEntry>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .vendor_ledger
            .iter()
            .rev()
            .filter(|e| e.account_id == vendor_id)
            .cloned()
            .collect())
    }

    async fn credit_vehicle_owner(&self, command: &AddMoneyCommand) -> AppResult<Option<AddMoneyOutcome>> {
        let now = self.tick();
        let mut tables = self.tables.lock().unwrap();

        let Some(owner) = tables.owners.iter_mut().find(|o| o.id == command.vehicle_owner_id) else {
            return Ok(None);
        };
        let balance_before = owner.wallet_balance;
        owner.wallet_balance += command.transaction_value;
        let balance_after = owner.wallet_balance;

        let ledger_entry = LedgerEntry {
            id: Uuid::new_v4(),
            account_id: command.vehicle_owner_id,
            entry_type: LedgerEntryType::Credit,
            amount: command.transaction_value,
            balance_before,
            balance_after,
            notes: command.notes.clone(),
            reference_id: command.reference_value.clone(),
            created_at: now,
        };
        let record = AddMoneyRecord {
            id: Uuid::new_v4(),
            vehicle_owner_id: command.vehicle_owner_id,
            transaction_value: command.transaction_value,
            transaction_img: command.transaction_img.clone(),
            notes: command.notes.clone(),
            reference_value: command.reference_value.clone(),
            created_at: now,
        };

        tables.owner_ledger.push(ledger_entry.clone());
        tables.add_money.push(record.clone());

        Ok(Some(AddMoneyOutcome {
            record,
            ledger_entry,
            new_wallet_balance: balance_after,
        }))
    }

    async fn admin_ledger(&self, admin_id: Uuid) -> AppResult<Vec<LedgerEntry>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .admin_ledger
            .iter()
            .rev()
            .filter(|e| e.account_id == admin_id)
            .cloned()
            .collect())
    }

    async fn admin_balance(&self, admin_id: Uuid) -> AppResult<i64> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .admin_ledger
            .iter()
            .rev()
            .find(|e| e.account_id == admin_id)
            .map_or(0, |e| e.balance_after))
    }

    async fn list_razorpay_transactions(&self, filter: &RazorpayFilter) -> AppResult<Vec<RazorpayTransaction>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .razorpay
            .iter()
            .rev()
            .filter(|t| filter.vehicle_owner_id.map_or(true, |id| t.vehicle_owner_id == id))
            .filter(|t| filter.status.map_or(true, |status| t.status == status))
            .cloned()
            .collect())
    }
}

pub fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiration: 3600,
        cors_origins: vec!["http://localhost:3000".to_string()],
        log_level: "debug".to_string(),
    }
}

/// Estado con todos los repositorios respaldados por el mismo MemoryStore
pub fn test_state(store: &Arc<MemoryStore>) -> AppState {
    AppState::with_repositories(
        test_config(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
    )
}

/// Router completo sobre un MemoryStore
pub fn create_test_app(store: &Arc<MemoryStore>) -> Router {
    create_app(test_state(store))
}

pub fn token_for_admin(admin_id: Uuid, role: &str) -> String {
    let config = JwtConfig {
        secret: JWT_SECRET.to_string(),
        expiration: 3600,
    };
    generate_token(admin_id, role, &config).unwrap()
}

pub fn token_for_role(role: &str) -> String {
    token_for_admin(Uuid::new_v4(), role)
}

pub fn admin_token() -> String {
    token_for_role("Owner")
}

/// Enviar una request y devolver el status y el cuerpo JSON (Null si no es JSON)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form(method: Method, uri: &str, token: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json(method: Method, uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
