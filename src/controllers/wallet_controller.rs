//! Administración de wallets
//!
//! Lectura de ledgers, búsqueda de vehicle owners por número y recargas de
//! saldo hechas por un admin.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::controllers::account_controller::AccountController;
use crate::controllers::admin_controller::AdminController;
use crate::dto::wallet_dto::{
    AddMoneyForm, AddMoneyResponse, AdminWalletBalanceResponse, LedgerResponse, RazorpayTransactionQuery,
    SearchVehicleOwnerRequest, VehicleOwnerSearchResponse,
};
use crate::middleware::AuthenticatedAdmin;
use crate::models::account::AccountKind;
use crate::models::status::{RazorpayPaymentStatus, StatusEnum};
use crate::models::wallet::{AddMoneyCommand, LedgerEntry, RazorpayFilter, RazorpayTransaction};
use crate::repositories::{AccountRepository, WalletRepository};
use crate::state::AppState;
use crate::utils::errors::{invalid_input_error, not_found_error, AppResult};
use crate::utils::validation::{parse_uuid, present};

pub struct WalletController {
    accounts: Arc<dyn AccountRepository>,
    wallets: Arc<dyn WalletRepository>,
    registry: AccountController,
    admins: AdminController,
}

impl WalletController {
    pub fn new(state: &AppState) -> Self {
        Self {
            accounts: state.accounts.clone(),
            wallets: state.wallets.clone(),
            registry: AccountController::new(state),
            admins: AdminController::new(state),
        }
    }

    /// Ledger de un vendor o vehicle owner, lo más reciente primero
    pub async fn ledger(&self, kind: AccountKind, id: Uuid) -> AppResult<LedgerResponse> {
        if kind == AccountKind::Driver {
            return Err(invalid_input_error(
                "Drivers have no wallet ledger",
                vec![
                    AccountKind::Vendor.as_str().to_string(),
                    AccountKind::VehicleOwner.as_str().to_string(),
                ],
            ));
        }

        self.registry.find_account(kind, id).await?;

        let entries = match kind {
            AccountKind::Vendor => self.wallets.vendor_ledger(id).await?,
            _ => self.wallets.vehicle_owner_ledger(id).await?,
        };

        Ok(LedgerResponse {
            account_id: id,
            account_type: kind.as_str().to_string(),
            entries,
        })
    }

    pub async fn search_vehicle_owner(
        &self,
        request: &SearchVehicleOwnerRequest,
    ) -> AppResult<VehicleOwnerSearchResponse> {
        request.validate()?;

        let owner = self
            .accounts
            .find_vehicle_owner_by_primary_number(&request.primary_number)
            .await?
            .ok_or_else(|| not_found_error("Vehicle owner", &request.primary_number))?;

        Ok(owner.into())
    }

    pub async fn add_money(&self, admin: &AuthenticatedAdmin, mut form: AddMoneyForm) -> AppResult<AddMoneyResponse> {
        form.transaction_img = present(form.transaction_img.as_deref()).map(str::to_string);
        form.validate()?;
        let vehicle_owner_id = parse_uuid("vehicle_owner_id", &form.vehicle_owner_id)?;

        let command = AddMoneyCommand {
            admin_id: admin.admin_id,
            vehicle_owner_id,
            transaction_value: form.transaction_value,
            transaction_img: form.transaction_img,
            notes: form.notes,
            reference_value: form.reference_value,
        };

        let outcome = self
            .wallets
            .credit_vehicle_owner(&command)
            .await?
            .ok_or_else(|| not_found_error("Vehicle owner", &vehicle_owner_id.to_string()))?;

        tracing::info!(
            "💰 Admin {} acreditó {} al vehicle owner {} (saldo: {})",
            admin.admin_id,
            command.transaction_value,
            vehicle_owner_id,
            outcome.new_wallet_balance
        );

        Ok(AddMoneyResponse {
            transaction_id: outcome.record.id,
            vehicle_owner_id: outcome.record.vehicle_owner_id,
            transaction_value: outcome.record.transaction_value,
            new_wallet_balance: outcome.new_wallet_balance,
            ledger_entry_id: outcome.ledger_entry.id,
            transaction_img: outcome.record.transaction_img,
            notes: outcome.record.notes,
            reference_value: outcome.record.reference_value,
            created_at: outcome.record.created_at,
        })
    }

    /// Ledger de la wallet del admin autenticado
    pub async fn admin_ledger(&self, admin: &AuthenticatedAdmin) -> AppResult<Vec<LedgerEntry>> {
        let record = self.admins.current_admin(admin).await?;
        self.wallets.admin_ledger(record.id).await
    }

    pub async fn admin_balance(&self, admin: &AuthenticatedAdmin) -> AppResult<AdminWalletBalanceResponse> {
        let record = self.admins.current_admin(admin).await?;
        let current_balance = self.wallets.admin_balance(record.id).await?;

        Ok(AdminWalletBalanceResponse {
            admin_id: record.id,
            current_balance,
        })
    }

    pub async fn razorpay_transactions(
        &self,
        query: &RazorpayTransactionQuery,
    ) -> AppResult<Vec<RazorpayTransaction>> {
        let filter = RazorpayFilter {
            vehicle_owner_id: present(query.owner_id.as_deref())
                .map(|raw| parse_uuid("owner_id", raw))
                .transpose()?,
            status: present(query.status_filter.as_deref())
                .map(RazorpayPaymentStatus::resolve)
                .transpose()?,
        };

        let transactions = self.wallets.list_razorpay_transactions(&filter).await?;
        tracing::debug!(
            "💳 {} pagos Razorpay (estado: {})",
            transactions.len(),
            filter.status.map_or("-", |status| status.name())
        );
        Ok(transactions)
    }
}
