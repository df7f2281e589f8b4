use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::admin::AdminRecord;
use crate::utils::errors::AppResult;
use crate::utils::validation::Pagination;

/// Acceso a los perfiles de administradores
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_admin(&self, id: Uuid) -> AppResult<Option<AdminRecord>>;

    /// Admins en orden de alta
    async fn list_admins(&self, pagination: Pagination) -> AppResult<Vec<AdminRecord>>;

    /// Guardar los campos editables del perfil. Devuelve false si la fila no existe
    async fn update_admin_profile(&self, admin: &AdminRecord) -> AppResult<bool>;
}

const ADMIN_SELECT: &str = r#"
    SELECT id, username, role, email, phone, organization_id, created_at
    FROM admin
"#;

pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    async fn find_admin(&self, id: Uuid) -> AppResult<Option<AdminRecord>> {
        let admin = sqlx::query_as::<_, AdminRecord>(&format!("{} WHERE id = $1", ADMIN_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(admin)
    }

    async fn list_admins(&self, pagination: Pagination) -> AppResult<Vec<AdminRecord>> {
        let admins = sqlx::query_as::<_, AdminRecord>(&format!(
            "{} ORDER BY created_at, id OFFSET $1 LIMIT $2",
            ADMIN_SELECT
        ))
        .bind(pagination.skip as i64)
        .bind(pagination.limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(admins)
    }

    async fn update_admin_profile(&self, admin: &AdminRecord) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE admin
            SET username = $2, email = $3, phone = $4, organization_id = $5
            WHERE id = $1
            "#,
        )
        .bind(admin.id)
        .bind(&admin.username)
        .bind(&admin.email)
        .bind(&admin.phone)
        .bind(admin.organization_id.as_deref())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
