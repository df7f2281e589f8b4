use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::account::AccountDocument;
use crate::models::car::CarRecord;
use crate::models::document::{CarDocumentSlot, DocumentRef};
use crate::models::status::{DocumentStatus, StatusEnum};

// Documento individual dentro de la respuesta agregada
#[derive(Debug, Clone, Serialize)]
pub struct DocumentInfo {
    pub document_id: String,
    pub document_type: String,
    pub document_name: String,
    pub image_url: Option<String>,
    /// Nombre del estado (PENDING, VERIFIED, INVALID); null se reporta como PENDING
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_name: Option<String>,
}

impl DocumentInfo {
    pub fn for_account(document: &AccountDocument) -> Self {
        Self {
            document_id: document.slot.document_id(),
            document_type: document.slot.as_str().to_string(),
            document_name: document.slot.display_name().to_string(),
            image_url: document.image_url.clone(),
            status: document.status.unwrap_or_default().name().to_string(),
            car_id: None,
            car_name: None,
        }
    }

    /// Documento de coche, solo si el slot tiene imagen
    pub fn for_car(car: &CarRecord, slot: CarDocumentSlot) -> Option<Self> {
        let (image_url, status) = car.document(slot);
        let image_url = image_url?;

        Some(Self {
            document_id: DocumentRef::car(car.id.to_string(), slot).to_string(),
            document_type: slot.as_str().to_string(),
            document_name: format!("{} - {}", slot.display_name(), car.car_name),
            image_url: Some(image_url.to_string()),
            status: status.unwrap_or_default().name().to_string(),
            car_id: Some(car.id),
            car_name: Some(car.car_name.clone()),
        })
    }

    pub fn status(&self) -> Option<DocumentStatus> {
        DocumentStatus::from_name(&self.status)
    }
}

#[derive(Debug, Serialize)]
pub struct AccountDocumentsResponse {
    pub account_id: Uuid,
    pub account_type: String,
    pub account_name: String,
    pub account_documents: Vec<DocumentInfo>,
    pub car_documents: Vec<DocumentInfo>,
    pub total_documents: usize,
    pub pending_count: usize,
    pub verified_count: usize,
    pub invalid_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDocumentStatusRequest {
    pub document_id: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentStatusUpdateResponse {
    pub account_id: Uuid,
    pub account_type: String,
    pub document_id: String,
    pub document_type: String,
    pub status: String,
}
