use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::account::VehicleOwnerRecord;
use crate::models::status::StatusEnum;
use crate::models::wallet::LedgerEntry;
use crate::utils::validation::{validate_receipt_reference, PRIMARY_NUMBER_REGEX};

#[derive(Debug, Serialize)]
pub struct LedgerResponse {
    pub account_id: Uuid,
    pub account_type: String,
    pub entries: Vec<LedgerEntry>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchVehicleOwnerRequest {
    #[validate(regex(path = "PRIMARY_NUMBER_REGEX", message = "Invalid Indian mobile number"))]
    pub primary_number: String,
}

#[derive(Debug, Serialize)]
pub struct VehicleOwnerSearchResponse {
    pub id: Uuid,
    pub full_name: String,
    pub primary_number: String,
    pub city: String,
    pub wallet_balance: i64,
    pub account_status: String,
}

impl From<VehicleOwnerRecord> for VehicleOwnerSearchResponse {
    fn from(owner: VehicleOwnerRecord) -> Self {
        Self {
            id: owner.id,
            full_name: owner.full_name,
            primary_number: owner.primary_number,
            city: owner.city,
            wallet_balance: owner.wallet_balance,
            account_status: owner.account_status.value().to_string(),
        }
    }
}

// Formulario de recarga; el recibo ya fue subido al almacenamiento externo
#[derive(Debug, Deserialize, Validate)]
pub struct AddMoneyForm {
    pub vehicle_owner_id: String,
    #[validate(range(min = 1, message = "transaction_value must be at least 1"))]
    pub transaction_value: i64,
    pub notes: Option<String>,
    pub reference_value: Option<String>,
    #[validate(custom = "validate_receipt_reference")]
    pub transaction_img: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddMoneyResponse {
    pub transaction_id: Uuid,
    pub vehicle_owner_id: Uuid,
    pub transaction_value: i64,
    pub new_wallet_balance: i64,
    pub ledger_entry_id: Uuid,
    pub transaction_img: Option<String>,
    pub notes: Option<String>,
    pub reference_value: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AdminWalletBalanceResponse {
    pub admin_id: Uuid,
    pub current_balance: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct RazorpayTransactionQuery {
    pub status_filter: Option<String>,
    pub owner_id: Option<String>,
}
