use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::account::{
    Account, AccountKind, AccountListFilter, AccountStatusValue, AccountSummary,
    AccountSummaryRow, DriverListFilter, DriverRecord, VehicleOwnerRecord, VendorRecord,
};
use crate::models::status::DocumentStatus;
use crate::utils::errors::{AppError, AppResult};

/// Acceso a vendors, vehicle owners y conductores
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Registro combinado credenciales + perfil, o None si no existe
    async fn find_account(&self, kind: AccountKind, id: Uuid) -> AppResult<Option<Account>>;

    async fn list_vendors(&self, filter: &AccountListFilter) -> AppResult<Vec<VendorRecord>>;

    async fn list_vehicle_owners(&self, filter: &AccountListFilter) -> AppResult<Vec<VehicleOwnerRecord>>;

    async fn list_drivers(&self, filter: &DriverListFilter) -> AppResult<Vec<DriverRecord>>;

    /// Resúmenes de un tipo de cuenta. `statuses = None` no filtra; una lista vacía no devuelve nada
    async fn list_account_summaries(
        &self,
        kind: AccountKind,
        statuses: Option<&[AccountStatusValue]>,
    ) -> AppResult<Vec<AccountSummary>>;

    async fn find_vehicle_owner_by_primary_number(
        &self,
        primary_number: &str,
    ) -> AppResult<Option<VehicleOwnerRecord>>;

    /// Devuelve false si la fila no existe
    async fn set_account_status(
        &self,
        kind: AccountKind,
        id: Uuid,
        status: AccountStatusValue,
    ) -> AppResult<bool>;

    /// Estado del documento de cuenta (Aadhar o licencia). Devuelve false si la fila no existe
    async fn set_account_document_status(
        &self,
        kind: AccountKind,
        id: Uuid,
        status: DocumentStatus,
    ) -> AppResult<bool>;
}

const VENDOR_SELECT: &str = r#"
    SELECT v.id, d.full_name, d.primary_number, d.secondary_number, d.gpay_number,
           d.wallet_balance, d.bank_balance, d.aadhar_number, d.aadhar_front_img,
           d.aadhar_status, d.address, d.city, d.pincode, v.account_status, d.created_at
    FROM vendor v
    JOIN vendor_details d ON d.vendor_id = v.id
"#;

const VEHICLE_OWNER_SELECT: &str = r#"
    SELECT o.id, d.full_name, d.primary_number, d.secondary_number, d.wallet_balance,
           d.aadhar_number, d.aadhar_front_img, d.aadhar_status, d.address, d.city,
           d.pincode, o.account_status, d.created_at
    FROM vehicle_owner o
    JOIN vehicle_owner_details d ON d.vehicle_owner_id = o.id
"#;

const DRIVER_SELECT: &str = r#"
    SELECT id, vehicle_owner_id, full_name, primary_number, secondary_number,
           licence_number, licence_front_img, licence_front_status, address, city,
           pincode, driver_status, created_at
    FROM car_driver
"#;

pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_account(&self, kind: AccountKind, id: Uuid) -> AppResult<Option<Account>> {
        let account = match kind {
            AccountKind::Vendor => sqlx::query_as::<_, VendorRecord>(&format!("{} WHERE v.id = $1", VENDOR_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .map(Account::Vendor),
            AccountKind::VehicleOwner => {
                sqlx::query_as::<_, VehicleOwnerRecord>(&format!("{} WHERE o.id = $1", VEHICLE_OWNER_SELECT))
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
                    .map(Account::VehicleOwner)
            }
            AccountKind::Driver => sqlx::query_as::<_, DriverRecord>(&format!("{} WHERE id = $1", DRIVER_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .map(Account::Driver),
        };

        Ok(account)
    }

    async fn list_vendors(&self, filter: &AccountListFilter) -> AppResult<Vec<VendorRecord>> {
        let vendors = sqlx::query_as::<_, VendorRecord>(&format!(
            "{} WHERE ($1::text IS NULL OR d.primary_number = $1) AND ($2::text IS NULL OR d.city = $2) ORDER BY d.created_at DESC",
            VENDOR_SELECT
        ))
        .bind(filter.mobile.as_deref())
        .bind(filter.city.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(vendors)
    }

    async fn list_vehicle_owners(&self, filter: &AccountListFilter) -> AppResult<Vec<VehicleOwnerRecord>> {
        let owners = sqlx::query_as::<_, VehicleOwnerRecord>(&format!(
            "{} WHERE ($1::text IS NULL OR d.primary_number = $1) AND ($2::text IS NULL OR d.city = $2) ORDER BY d.created_at DESC",
            VEHICLE_OWNER_SELECT
        ))
        .bind(filter.mobile.as_deref())
        .bind(filter.city.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(owners)
    }

    async fn list_drivers(&self, filter: &DriverListFilter) -> AppResult<Vec<DriverRecord>> {
        let drivers = sqlx::query_as::<_, DriverRecord>(&format!(
            "{} WHERE ($1::uuid IS NULL OR vehicle_owner_id = $1) AND ($2::driver_status_enum IS NULL OR driver_status = $2) ORDER BY created_at DESC",
            DRIVER_SELECT
        ))
        .bind(filter.vehicle_owner_id)
        .bind(filter.status)
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    async fn list_account_summaries(
        &self,
        kind: AccountKind,
        statuses: Option<&[AccountStatusValue]>,
    ) -> AppResult<Vec<AccountSummary>> {
        let sql = match kind {
            AccountKind::Vendor => {
                r#"
                SELECT v.id, d.full_name AS name, v.account_status::text AS status
                FROM vendor v
                JOIN vendor_details d ON d.vendor_id = v.id
                WHERE ($1::text[] IS NULL OR v.account_status::text = ANY($1))
                ORDER BY d.created_at, v.id
                "#
            }
            AccountKind::VehicleOwner => {
                r#"
                SELECT o.id, d.full_name AS name, o.account_status::text AS status
                FROM vehicle_owner o
                JOIN vehicle_owner_details d ON d.vehicle_owner_id = o.id
                WHERE ($1::text[] IS NULL OR o.account_status::text = ANY($1))
                ORDER BY d.created_at, o.id
                "#
            }
            AccountKind::Driver => {
                r#"
                SELECT id, full_name AS name, driver_status::text AS status
                FROM car_driver
                WHERE ($1::text[] IS NULL OR driver_status::text = ANY($1))
                ORDER BY created_at, id
                "#
            }
        };

        let names: Option<Vec<String>> =
            statuses.map(|list| list.iter().map(|s| s.name().to_string()).collect());

        let rows = sqlx::query_as::<_, AccountSummaryRow>(sql)
            .bind(names)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                let status = kind.status_from_name(&row.status).ok_or_else(|| {
                    AppError::Internal(format!(
                        "Unknown {} status '{}' stored for {}",
                        kind.as_str(),
                        row.status,
                        row.id
                    ))
                })?;
                Ok(AccountSummary {
                    id: row.id,
                    name: row.name,
                    kind,
                    status,
                })
            })
            .collect()
    }

    async fn find_vehicle_owner_by_primary_number(
        &self,
        primary_number: &str,
    ) -> AppResult<Option<VehicleOwnerRecord>> {
        let owner = sqlx::query_as::<_, VehicleOwnerRecord>(&format!(
            "{} WHERE d.primary_number = $1",
            VEHICLE_OWNER_SELECT
        ))
        .bind(primary_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner)
    }

    async fn set_account_status(
        &self,
        kind: AccountKind,
        id: Uuid,
        status: AccountStatusValue,
    ) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = match (kind, status) {
            (AccountKind::Vendor, AccountStatusValue::Account(s)) => {
                sqlx::query("UPDATE vendor SET account_status = $2 WHERE id = $1")
                    .bind(id)
                    .bind(s)
                    .execute(&mut *tx)
                    .await?
            }
            (AccountKind::VehicleOwner, AccountStatusValue::Account(s)) => {
                sqlx::query("UPDATE vehicle_owner SET account_status = $2 WHERE id = $1")
                    .bind(id)
                    .bind(s)
                    .execute(&mut *tx)
                    .await?
            }
            (AccountKind::Driver, AccountStatusValue::Driver(s)) => {
                sqlx::query("UPDATE car_driver SET driver_status = $2 WHERE id = $1")
                    .bind(id)
                    .bind(s)
                    .execute(&mut *tx)
                    .await?
            }
            (kind, status) => {
                return Err(AppError::Internal(format!(
                    "Status {} does not belong to account type {}",
                    status.name(),
                    kind.as_str()
                )));
            }
        };

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_account_document_status(
        &self,
        kind: AccountKind,
        id: Uuid,
        status: DocumentStatus,
    ) -> AppResult<bool> {
        let sql = match kind {
            AccountKind::Vendor => "UPDATE vendor_details SET aadhar_status = $2 WHERE vendor_id = $1",
            AccountKind::VehicleOwner => {
                "UPDATE vehicle_owner_details SET aadhar_status = $2 WHERE vehicle_owner_id = $1"
            }
            AccountKind::Driver => "UPDATE car_driver SET licence_front_status = $2 WHERE id = $1",
        };

        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(sql)
            .bind(id)
            .bind(status)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
