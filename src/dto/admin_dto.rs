use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::admin::{AdminProfileChanges, AdminRecord};
use crate::utils::validation::PRIMARY_NUMBER_REGEX;

#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub organization_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<AdminRecord> for AdminResponse {
    fn from(admin: AdminRecord) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            role: admin.role,
            email: admin.email,
            phone: admin.phone,
            organization_id: admin.organization_id,
            created_at: admin.created_at,
        }
    }
}

// Actualización parcial del perfil propio; el rol no es editable
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAdminProfileRequest {
    #[validate(length(min = 3, max = 50, message = "username must be between 3 and 50 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(regex(path = "PRIMARY_NUMBER_REGEX", message = "Invalid Indian mobile number"))]
    pub phone: Option<String>,
    pub organization_id: Option<String>,
}

impl From<UpdateAdminProfileRequest> for AdminProfileChanges {
    fn from(request: UpdateAdminProfileRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            phone: request.phone,
            organization_id: request.organization_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminListQuery {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}
