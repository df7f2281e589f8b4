//! Gestión de administradores
//!
//! Perfil propio del admin autenticado y consulta del resto de admins. El
//! middleware ya limita el acceso a los roles Owner y Manager.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::dto::admin_dto::{AdminListQuery, AdminResponse, UpdateAdminProfileRequest};
use crate::middleware::AuthenticatedAdmin;
use crate::models::admin::{AdminProfileChanges, AdminRecord};
use crate::repositories::AdminRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::Pagination;

pub struct AdminController {
    admins: Arc<dyn AdminRepository>,
}

impl AdminController {
    pub fn new(state: &AppState) -> Self {
        Self {
            admins: state.admins.clone(),
        }
    }

    /// Registro del admin del token; un token de un admin borrado deja de valer
    pub async fn current_admin(&self, admin: &AuthenticatedAdmin) -> AppResult<AdminRecord> {
        self.admins.find_admin(admin.admin_id).await?.ok_or_else(|| {
            tracing::warn!("🔒 Token válido para un admin inexistente: {}", admin.admin_id);
            AppError::Unauthorized("Admin account not found".to_string())
        })
    }

    pub async fn profile(&self, admin: &AuthenticatedAdmin) -> AppResult<AdminResponse> {
        Ok(self.current_admin(admin).await?.into())
    }

    pub async fn update_profile(
        &self,
        admin: &AuthenticatedAdmin,
        request: UpdateAdminProfileRequest,
    ) -> AppResult<AdminResponse> {
        request.validate()?;
        let mut record = self.current_admin(admin).await?;

        let changes = AdminProfileChanges::from(request);
        if changes.is_empty() {
            return Ok(record.into());
        }

        changes.apply(&mut record);
        if !self.admins.update_admin_profile(&record).await? {
            return Err(not_found_error("Admin", &record.id.to_string()));
        }

        tracing::info!("👤 Perfil del admin {} actualizado", record.id);
        Ok(self.current_admin(admin).await?.into())
    }

    pub async fn list_admins(&self, query: &AdminListQuery) -> AppResult<Vec<AdminResponse>> {
        let pagination = Pagination::new(query.skip, query.limit)?;
        let admins = self.admins.list_admins(pagination).await?;
        Ok(admins.into_iter().map(AdminResponse::from).collect())
    }

    pub async fn get_admin(&self, id: Uuid) -> AppResult<AdminResponse> {
        self.admins
            .find_admin(id)
            .await?
            .map(AdminResponse::from)
            .ok_or_else(|| not_found_error("Admin", &id.to_string()))
    }
}
