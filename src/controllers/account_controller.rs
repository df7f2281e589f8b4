//! Registro de cuentas y actualización de estados
//!
//! Lectura de vendors, vehicle owners, conductores y coches, y las mutaciones
//! de estado de cuenta, de coche y de documento. Toda mutación sigue el mismo
//! orden: la entidad debe existir (404), el estado pedido debe resolverse
//! contra su enumeración (400), se persiste y se vuelve a leer.

use std::sync::Arc;

use uuid::Uuid;

use crate::dto::account_dto::{
    CarResponse, DriverListQuery, DriverResponse, VehicleOwnerDetailResponse, VehicleOwnerResponse,
    VendorResponse,
};
use crate::models::account::{Account, AccountKind, AccountListFilter, DriverListFilter};
use crate::models::car::CarRecord;
use crate::models::document::CarDocumentSlot;
use crate::models::status::{CarStatus, DocumentStatus, DriverStatus, StatusEnum};
use crate::repositories::{AccountRepository, CarRepository};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::{parse_uuid, present};

fn without_blanks(filter: &AccountListFilter) -> AccountListFilter {
    AccountListFilter {
        mobile: present(filter.mobile.as_deref()).map(str::to_string),
        city: present(filter.city.as_deref()).map(str::to_string),
    }
}

pub struct AccountController {
    accounts: Arc<dyn AccountRepository>,
    cars: Arc<dyn CarRepository>,
}

impl AccountController {
    pub fn new(state: &AppState) -> Self {
        Self {
            accounts: state.accounts.clone(),
            cars: state.cars.clone(),
        }
    }

    /// Cuenta combinada credenciales + perfil, o NotFound
    pub async fn find_account(&self, kind: AccountKind, id: Uuid) -> AppResult<Account> {
        self.accounts
            .find_account(kind, id)
            .await?
            .ok_or_else(|| not_found_error(kind.display_name(), &id.to_string()))
    }

    pub async fn list_vendors(&self, filter: &AccountListFilter) -> AppResult<Vec<VendorResponse>> {
        let vendors = self.accounts.list_vendors(&without_blanks(filter)).await?;
        tracing::debug!("📋 {} vendors encontrados", vendors.len());
        Ok(vendors.into_iter().map(VendorResponse::from).collect())
    }

    pub async fn get_vendor(&self, id: Uuid) -> AppResult<VendorResponse> {
        match self.find_account(AccountKind::Vendor, id).await? {
            Account::Vendor(vendor) => Ok(vendor.into()),
            _ => Err(not_found_error("Vendor", &id.to_string())),
        }
    }

    pub async fn list_vehicle_owners(&self, filter: &AccountListFilter) -> AppResult<Vec<VehicleOwnerResponse>> {
        let owners = self.accounts.list_vehicle_owners(&without_blanks(filter)).await?;
        tracing::debug!("📋 {} vehicle owners encontrados", owners.len());
        Ok(owners.into_iter().map(VehicleOwnerResponse::from).collect())
    }

    /// Vehicle owner con sus coches y conductores
    pub async fn get_vehicle_owner_detail(&self, id: Uuid) -> AppResult<VehicleOwnerDetailResponse> {
        let owner = match self.find_account(AccountKind::VehicleOwner, id).await? {
            Account::VehicleOwner(owner) => owner,
            _ => return Err(not_found_error("Vehicle owner", &id.to_string())),
        };

        let cars = self.cars.list_cars_by_owner(id).await?;
        let drivers = self
            .accounts
            .list_drivers(&DriverListFilter {
                vehicle_owner_id: Some(id),
                status: None,
            })
            .await?;

        Ok(VehicleOwnerDetailResponse {
            owner: owner.into(),
            cars: cars.into_iter().map(CarResponse::from).collect(),
            drivers: drivers.into_iter().map(DriverResponse::from).collect(),
        })
    }

    pub async fn list_drivers(&self, query: &DriverListQuery) -> AppResult<Vec<DriverResponse>> {
        let filter = DriverListFilter {
            vehicle_owner_id: present(query.vehicle_owner_id.as_deref())
                .map(|raw| parse_uuid("vehicle_owner_id", raw))
                .transpose()?,
            status: present(query.status_filter.as_deref())
                .map(DriverStatus::resolve)
                .transpose()?,
        };

        let drivers = self.accounts.list_drivers(&filter).await?;
        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    /// Cambiar el estado de cuenta (vendor/owner) o de conductor
    pub async fn update_account_status(&self, kind: AccountKind, id: Uuid, raw_status: &str) -> AppResult<Account> {
        let current = self.find_account(kind, id).await?;
        let status = kind.resolve_status(raw_status)?;

        if !self.accounts.set_account_status(kind, id, status).await? {
            return Err(not_found_error(kind.display_name(), &id.to_string()));
        }

        tracing::info!(
            "✅ Estado de {} {} actualizado: {} -> {}",
            kind.as_str(),
            id,
            current.status().name(),
            status.name()
        );

        self.find_account(kind, id).await
    }

    /// Cambiar el estado del documento de cuenta (Aadhar o licencia)
    pub async fn update_account_document_status(
        &self,
        kind: AccountKind,
        id: Uuid,
        raw_status: &str,
    ) -> AppResult<Account> {
        self.find_account(kind, id).await?;
        let status = DocumentStatus::resolve(raw_status)?;

        if !self.accounts.set_account_document_status(kind, id, status).await? {
            return Err(not_found_error(kind.display_name(), &id.to_string()));
        }

        tracing::info!(
            "📄 Documento {} de {} {} -> {}",
            kind.account_document_slot().as_str(),
            kind.as_str(),
            id,
            status.name()
        );

        self.find_account(kind, id).await
    }

    pub async fn find_car(&self, id: Uuid) -> AppResult<CarRecord> {
        self.cars
            .find_car(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))
    }

    pub async fn update_car_status(&self, id: Uuid, raw_status: &str) -> AppResult<CarResponse> {
        self.find_car(id).await?;
        let status = CarStatus::resolve(raw_status)?;

        if !self.cars.set_car_status(id, status).await? {
            return Err(not_found_error("Car", &id.to_string()));
        }

        tracing::info!("🚗 Estado del coche {} -> {}", id, status.name());
        Ok(self.find_car(id).await?.into())
    }

    pub async fn update_car_document_status(
        &self,
        id: Uuid,
        slot: CarDocumentSlot,
        raw_status: &str,
    ) -> AppResult<CarResponse> {
        self.find_car(id).await?;
        let status = DocumentStatus::resolve(raw_status)?;

        if !self.cars.set_car_document_status(id, slot, status).await? {
            return Err(not_found_error("Car", &id.to_string()));
        }

        tracing::info!("📄 Documento {} del coche {} -> {}", slot.as_str(), id, status.name());
        Ok(self.find_car(id).await?.into())
    }
}
