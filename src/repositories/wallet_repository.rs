use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::wallet::{
    AddMoneyCommand, AddMoneyOutcome, AddMoneyRecord, LedgerEntry, LedgerEntryType, RazorpayFilter,
    RazorpayTransaction,
};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait WalletRepository: Send + Sync {
    async fn vehicle_owner_ledger(&self, vehicle_owner_id: Uuid) -> AppResult<Vec<LedgerEntry>>;

    async fn vendor_ledger(&self, vendor_id: Uuid) -> AppResult<Vec<LedgerEntry>>;

    /// Acredita saldo al vehicle owner y registra la entrada del ledger y la
    /// recarga en una sola transacción. None si el vehicle owner no existe
    async fn credit_vehicle_owner(&self, command: &AddMoneyCommand) -> AppResult<Option<AddMoneyOutcome>>;

    async fn admin_ledger(&self, admin_id: Uuid) -> AppResult<Vec<LedgerEntry>>;

    /// Saldo tras el último movimiento del admin; 0 sin movimientos
    async fn admin_balance(&self, admin_id: Uuid) -> AppResult<i64>;

    /// Pagos Razorpay, lo más reciente primero
    async fn list_razorpay_transactions(&self, filter: &RazorpayFilter) -> AppResult<Vec<RazorpayTransaction>>;
}

pub struct PgWalletRepository {
    pool: PgPool,
}

impl PgWalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalletRepository for PgWalletRepository {
    async fn vehicle_owner_ledger(&self, vehicle_owner_id: Uuid) -> AppResult<Vec<LedgerEntry>> {
        let entries = sqlx::query_as::<_, LedgerEntry>(
            r#"
            SELECT id, vehicle_owner_id AS account_id, entry_type, amount, balance_before,
                   balance_after, notes, reference_id, created_at
            FROM wallet_ledger
            WHERE vehicle_owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(vehicle_owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn vendor_ledger(&self, vendor_id: Uuid) -> AppResult<Vec<LedgerEntry>> {
        let entries = sqlx::query_as::<_, LedgerEntry>(
            r#"
            SELECT id, vendor_id AS account_id, entry_type, amount, balance_before,
                   balance_after, notes, reference_id, created_at
            FROM vendor_wallet_ledger
            WHERE vendor_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(vendor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn credit_vehicle_owner(&self, command: &AddMoneyCommand) -> AppResult<Option<AddMoneyOutcome>> {
        let mut tx = self.pool.begin().await?;

        let new_balance: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE vehicle_owner_details
            SET wallet_balance = wallet_balance + $2
            WHERE vehicle_owner_id = $1
            RETURNING wallet_balance
            "#,
        )
        .bind(command.vehicle_owner_id)
        .bind(command.transaction_value)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(new_balance) = new_balance else {
            tx.rollback().await?;
            return Ok(None);
        };

        let ledger_entry = sqlx::query_as::<_, LedgerEntry>(
            r#"
            INSERT INTO wallet_ledger
                (id, vehicle_owner_id, entry_type, amount, balance_before, balance_after, notes, reference_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, vehicle_owner_id AS account_id, entry_type, amount, balance_before,
                      balance_after, notes, reference_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(command.vehicle_owner_id)
        .bind(LedgerEntryType::Credit)
        .bind(command.transaction_value)
        .bind(new_balance - command.transaction_value)
        .bind(new_balance)
        .bind(command.notes.as_deref())
        .bind(command.reference_value.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        let record = sqlx::query_as::<_, AddMoneyRecord>(
            r#"
            INSERT INTO admin_add_money_to_vehicle_owner
                (id, admin_id, vehicle_owner_id, transaction_value, transaction_img, notes, reference_value)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, vehicle_owner_id, transaction_value, transaction_img, notes,
                      reference_value, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(command.admin_id)
        .bind(command.vehicle_owner_id)
        .bind(command.transaction_value)
        .bind(command.transaction_img.as_deref())
        .bind(command.notes.as_deref())
        .bind(command.reference_value.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(AddMoneyOutcome {
            record,
            ledger_entry,
            new_wallet_balance: new_balance,
        }))
    }

    async fn admin_ledger(&self, admin_id: Uuid) -> AppResult<Vec<LedgerEntry>> {
        let entries = sqlx::query_as::<_, LedgerEntry>(
            r#"
            SELECT id, admin_id AS account_id, entry_type, amount, balance_before,
                   balance_after, notes, reference_id, created_at
            FROM admin_wallet_ledger
            WHERE admin_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(admin_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn admin_balance(&self, admin_id: Uuid) -> AppResult<i64> {
        let balance: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT balance_after
            FROM admin_wallet_ledger
            WHERE admin_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(balance.unwrap_or(0))
    }

    async fn list_razorpay_transactions(&self, filter: &RazorpayFilter) -> AppResult<Vec<RazorpayTransaction>> {
        let transactions = sqlx::query_as::<_, RazorpayTransaction>(
            r#"
            SELECT id, vehicle_owner_id, razorpay_order_id, razorpay_payment_id, amount,
                   currency, status, created_at
            FROM razorpay_transactions
            WHERE ($1::uuid IS NULL OR vehicle_owner_id = $1)
              AND ($2::razorpay_payment_status_enum IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(filter.vehicle_owner_id)
        .bind(filter.status)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }
}
