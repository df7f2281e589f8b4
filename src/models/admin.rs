//! Modelo de administradores
//!
//! Perfil de un admin del panel. La contraseña vive en la tabla pero nunca se
//! lee desde este backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminRecord {
    pub id: Uuid,
    pub username: String,
    /// Owner o Manager
    pub role: String,
    pub email: String,
    pub phone: String,
    pub organization_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Campos editables del perfil; None deja el valor actual
#[derive(Debug, Clone, Default)]
pub struct AdminProfileChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization_id: Option<String>,
}

impl AdminProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.organization_id.is_none()
    }

    pub fn apply(&self, admin: &mut AdminRecord) {
        if let Some(username) = &self.username {
            admin.username = username.clone();
        }
        if let Some(email) = &self.email {
            admin.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            admin.phone = phone.clone();
        }
        if let Some(organization_id) = &self.organization_id {
            admin.organization_id = Some(organization_id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut admin = AdminRecord {
            id: Uuid::new_v4(),
            username: "ops".to_string(),
            role: "Manager".to_string(),
            email: "ops@fleet.in".to_string(),
            phone: "9876543210".to_string(),
            organization_id: None,
            created_at: Utc::now(),
        };
        let changes = AdminProfileChanges {
            email: Some("lead@fleet.in".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
        changes.apply(&mut admin);
        assert_eq!(admin.email, "lead@fleet.in");
        assert_eq!(admin.username, "ops");
        assert!(AdminProfileChanges::default().is_empty());
    }
}
