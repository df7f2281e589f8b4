//! Modelo de wallet
//!
//! Entradas del ledger (solo se añaden, nunca se editan) y registros de
//! recargas hechas por un admin. El saldo de la cuenta se actualiza en la misma
//! transacción que la entrada del ledger; no existe un proceso de
//! reconciliación entre ambos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use crate::models::status::RazorpayPaymentStatus;

/// Tipo de movimiento - mapea al ENUM wallet_entry_type_enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "wallet_entry_type_enum", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerEntryType {
    Credit,
    Debit,
}

/// Entrada del ledger de wallet (vehicle owner o vendor)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub account_id: Uuid,
    pub entry_type: LedgerEntryType,
    pub amount: i64,
    pub balance_before: i64,
    pub balance_after: i64,
    pub notes: Option<String>,
    pub reference_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Recarga de saldo iniciada por un admin
#[derive(Debug, Clone)]
pub struct AddMoneyCommand {
    pub admin_id: Uuid,
    pub vehicle_owner_id: Uuid,
    /// Importe en paise
    pub transaction_value: i64,
    /// Referencia devuelta por el almacenamiento externo del recibo
    pub transaction_img: Option<String>,
    pub notes: Option<String>,
    pub reference_value: Option<String>,
}

/// Resultado de una recarga ya confirmada
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AddMoneyRecord {
    pub id: Uuid,
    pub vehicle_owner_id: Uuid,
    pub transaction_value: i64,
    pub transaction_img: Option<String>,
    pub notes: Option<String>,
    pub reference_value: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AddMoneyOutcome {
    pub record: AddMoneyRecord,
    pub ledger_entry: LedgerEntry,
    pub new_wallet_balance: i64,
}

/// Pago de recarga de un vehicle owner a través de Razorpay
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RazorpayTransaction {
    pub id: Uuid,
    pub vehicle_owner_id: Uuid,
    pub razorpay_order_id: String,
    pub razorpay_payment_id: Option<String>,
    /// Importe en paise
    pub amount: i64,
    pub currency: String,
    pub status: RazorpayPaymentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct RazorpayFilter {
    pub vehicle_owner_id: Option<Uuid>,
    pub status: Option<RazorpayPaymentStatus>,
}
