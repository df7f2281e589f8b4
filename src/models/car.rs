//! Modelo de Car
//!
//! Mapea la tabla car_details. Cada coche pertenece a un vehicle owner y tiene
//! seis slots de documento independientes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::document::CarDocumentSlot;
use crate::models::status::{CarStatus, DocumentStatus};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CarRecord {
    pub id: Uuid,
    pub vehicle_owner_id: Uuid,
    pub car_name: String,
    pub car_type: String,
    pub car_number: String,
    pub year_of_the_car: Option<String>,
    pub rc_front_img_url: Option<String>,
    pub rc_front_status: Option<DocumentStatus>,
    pub rc_back_img_url: Option<String>,
    pub rc_back_status: Option<DocumentStatus>,
    pub insurance_img_url: Option<String>,
    pub insurance_status: Option<DocumentStatus>,
    pub fc_img_url: Option<String>,
    pub fc_status: Option<DocumentStatus>,
    pub car_img_url: Option<String>,
    pub car_img_status: Option<DocumentStatus>,
    pub permit_img_url: Option<String>,
    pub permit_status: Option<DocumentStatus>,
    pub car_status: CarStatus,
    pub created_at: DateTime<Utc>,
}

impl CarRecord {
    /// Referencia de imagen y estado de un slot
    pub fn document(&self, slot: CarDocumentSlot) -> (Option<&str>, Option<DocumentStatus>) {
        match slot {
            CarDocumentSlot::RcFront => (self.rc_front_img_url.as_deref(), self.rc_front_status),
            CarDocumentSlot::RcBack => (self.rc_back_img_url.as_deref(), self.rc_back_status),
            CarDocumentSlot::Insurance => (self.insurance_img_url.as_deref(), self.insurance_status),
            CarDocumentSlot::Fc => (self.fc_img_url.as_deref(), self.fc_status),
            CarDocumentSlot::CarImg => (self.car_img_url.as_deref(), self.car_img_status),
            CarDocumentSlot::Permit => (self.permit_img_url.as_deref(), self.permit_status),
        }
    }

    pub fn set_document_status(&mut self, slot: CarDocumentSlot, status: DocumentStatus) {
        let field = match slot {
            CarDocumentSlot::RcFront => &mut self.rc_front_status,
            CarDocumentSlot::RcBack => &mut self.rc_back_status,
            CarDocumentSlot::Insurance => &mut self.insurance_status,
            CarDocumentSlot::Fc => &mut self.fc_status,
            CarDocumentSlot::CarImg => &mut self.car_img_status,
            CarDocumentSlot::Permit => &mut self.permit_status,
        };
        *field = Some(status);
    }
}
