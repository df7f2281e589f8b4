//! Agregador de documentos
//!
//! Reúne el documento de cuenta y los documentos de coche de una cuenta en una
//! sola respuesta, y enruta las actualizaciones de estado según el id
//! compuesto del documento.

use std::sync::Arc;

use uuid::Uuid;

use crate::controllers::account_controller::AccountController;
use crate::dto::document_dto::{
    AccountDocumentsResponse, DocumentInfo, DocumentStatusUpdateResponse, UpdateDocumentStatusRequest,
};
use crate::models::account::{Account, AccountKind};
use crate::models::car::CarRecord;
use crate::models::document::{CarDocumentSlot, DocumentRef};
use crate::models::status::{DocumentStatus, StatusEnum};
use crate::repositories::{AccountRepository, CarRepository};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, invalid_input_error, not_found_error, AppResult};
use crate::utils::validation::parse_uuid;

/// Construir la respuesta agregada a partir de la cuenta y sus coches
pub fn build_documents_response(account: &Account, cars: &[CarRecord]) -> AccountDocumentsResponse {
    let account_documents = vec![DocumentInfo::for_account(&account.account_document())];

    let car_documents: Vec<DocumentInfo> = cars
        .iter()
        .flat_map(|car| {
            CarDocumentSlot::ALL
                .into_iter()
                .filter_map(move |slot| DocumentInfo::for_car(car, slot))
        })
        .collect();

    let count = |status: DocumentStatus| {
        account_documents
            .iter()
            .chain(car_documents.iter())
            .filter(|doc| doc.status() == Some(status))
            .count()
    };
    let pending_count = count(DocumentStatus::Pending);
    let verified_count = count(DocumentStatus::Verified);
    let invalid_count = count(DocumentStatus::Invalid);

    AccountDocumentsResponse {
        account_id: account.id(),
        account_type: account.kind().as_str().to_string(),
        account_name: account.name().to_string(),
        total_documents: account_documents.len() + car_documents.len(),
        account_documents,
        car_documents,
        pending_count,
        verified_count,
        invalid_count,
    }
}

pub struct DocumentController {
    accounts: Arc<dyn AccountRepository>,
    cars: Arc<dyn CarRepository>,
    registry: AccountController,
}

impl DocumentController {
    pub fn new(state: &AppState) -> Self {
        Self {
            accounts: state.accounts.clone(),
            cars: state.cars.clone(),
            registry: AccountController::new(state),
        }
    }

    pub async fn list_documents(&self, account_type: &str, id: Uuid) -> AppResult<AccountDocumentsResponse> {
        let kind = AccountKind::parse(account_type)?;
        let account = self.registry.find_account(kind, id).await?;

        let cars = match kind {
            AccountKind::VehicleOwner => self.cars.list_cars_by_owner(id).await?,
            _ => Vec::new(),
        };

        Ok(build_documents_response(&account, &cars))
    }

    pub async fn update_document_status(
        &self,
        account_type: &str,
        id: Uuid,
        request: &UpdateDocumentStatusRequest,
    ) -> AppResult<DocumentStatusUpdateResponse> {
        let kind = AccountKind::parse(account_type)?;
        self.registry.find_account(kind, id).await?;

        let status = DocumentStatus::resolve(&request.status)?;
        let document: DocumentRef = request.document_id.parse()?;

        let persisted = match &document {
            DocumentRef::Account(slot) => {
                let expected = kind.account_document_slot();
                if *slot != expected {
                    return Err(invalid_input_error(
                        format!(
                            "Document '{}' does not apply to account type {}",
                            request.document_id,
                            kind.as_str()
                        ),
                        vec![expected.document_id()],
                    ));
                }

                if !self.accounts.set_account_document_status(kind, id, status).await? {
                    return Err(not_found_error(kind.display_name(), &id.to_string()));
                }

                self.registry
                    .find_account(kind, id)
                    .await?
                    .account_document()
                    .status
                    .unwrap_or_default()
            }
            DocumentRef::Car { car_id, slot } => {
                if kind != AccountKind::VehicleOwner {
                    return Err(bad_request_error("Car documents can only be updated for vehicle owners"));
                }

                let car_id = parse_uuid("car id", car_id)?;
                let car = self
                    .cars
                    .find_car(car_id)
                    .await?
                    .filter(|car| car.vehicle_owner_id == id)
                    .ok_or_else(|| not_found_error("Car", &car_id.to_string()))?;

                if !self.cars.set_car_document_status(car.id, *slot, status).await? {
                    return Err(not_found_error("Car", &car_id.to_string()));
                }

                let refreshed = self.registry.find_car(car.id).await?;
                refreshed.document(*slot).1.unwrap_or_default()
            }
        };

        tracing::info!(
            "📄 Documento {} de {} {} -> {}",
            request.document_id,
            kind.as_str(),
            id,
            persisted.name()
        );

        Ok(DocumentStatusUpdateResponse {
            account_id: id,
            account_type: kind.as_str().to_string(),
            document_id: document.to_string(),
            document_type: document.document_type().to_string(),
            status: persisted.name().to_string(),
        })
    }
}
