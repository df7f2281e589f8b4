//! Vista unificada de cuentas
//!
//! Junta vendors, vehicle owners y conductores en una sola lista. Cada tipo se
//! consulta y filtra por separado y las filas se concatenan en ese orden. Los
//! contadores se calculan sobre la lista filtrada completa y la paginación se
//! aplica al final.

use std::sync::Arc;

use uuid::Uuid;

use crate::controllers::account_controller::AccountController;
use crate::dto::account_dto::{
    UnifiedAccountDetail, UnifiedAccountItem, UnifiedAccountListResponse, UnifiedAccountQuery,
};
use crate::models::account::{AccountKind, AccountStatusValue, AccountSummary};
use crate::models::status::{AccountStatus, DriverStatus, StatusEnum};
use crate::repositories::AccountRepository;
use crate::state::AppState;
use crate::utils::errors::{invalid_input_error, AppResult};
use crate::utils::validation::{present, Pagination};

/// Filtro de estado de la vista unificada
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    /// Vendor/owner ACTIVE, conductor ONLINE o DRIVING
    Active,
    /// Vendor/owner INACTIVE, conductor OFFLINE, BLOCKED o PROCESSING
    Inactive,
    /// Nombre exacto de un miembro de AccountStatus o DriverStatus
    Named(String),
}

impl StatusFilter {
    pub const ALLOWED: [&'static str; 8] = [
        "active",
        "inactive",
        "pending",
        "online",
        "offline",
        "driving",
        "blocked",
        "processing",
    ];

    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.to_lowercase().as_str() {
            "active" => return Ok(StatusFilter::Active),
            "inactive" => return Ok(StatusFilter::Inactive),
            _ => {}
        }

        let name = raw.to_uppercase();
        if AccountStatus::from_name(&name).is_some() || DriverStatus::from_name(&name).is_some() {
            return Ok(StatusFilter::Named(name));
        }

        Err(invalid_input_error(
            format!("Invalid status filter '{}'", raw),
            Self::ALLOWED.iter().map(|s| s.to_string()).collect(),
        ))
    }

    /// Estados que el filtro selecciona para un tipo de cuenta (vacío = ninguno)
    pub fn statuses_for(&self, kind: AccountKind) -> Vec<AccountStatusValue> {
        match (self, kind) {
            (StatusFilter::Active, AccountKind::Driver) => DriverStatus::ACTIVE_BUCKET
                .iter()
                .copied()
                .map(AccountStatusValue::Driver)
                .collect(),
            (StatusFilter::Inactive, AccountKind::Driver) => DriverStatus::INACTIVE_BUCKET
                .iter()
                .copied()
                .map(AccountStatusValue::Driver)
                .collect(),
            (StatusFilter::Active, _) => vec![AccountStatusValue::Account(AccountStatus::Active)],
            (StatusFilter::Inactive, _) => vec![AccountStatusValue::Account(AccountStatus::Inactive)],
            (StatusFilter::Named(name), kind) => kind.status_from_name(name).into_iter().collect(),
        }
    }
}

/// Contar sobre la lista completa y paginar después
pub fn summarize(accounts: Vec<AccountSummary>, pagination: Pagination) -> UnifiedAccountListResponse {
    let total_count = accounts.len();
    let active_count = accounts.iter().filter(|a| a.status.is_active()).count();

    UnifiedAccountListResponse {
        accounts: pagination
            .apply(accounts)
            .into_iter()
            .map(UnifiedAccountItem::from)
            .collect(),
        total_count,
        active_count,
        inactive_count: total_count - active_count,
    }
}

pub struct UnifiedAccountController {
    accounts: Arc<dyn AccountRepository>,
    registry: AccountController,
}

impl UnifiedAccountController {
    pub fn new(state: &AppState) -> Self {
        Self {
            accounts: state.accounts.clone(),
            registry: AccountController::new(state),
        }
    }

    pub async fn list(&self, query: &UnifiedAccountQuery) -> AppResult<UnifiedAccountListResponse> {
        let pagination = Pagination::new(query.skip, query.limit)?;

        let kinds: Vec<AccountKind> = match present(query.account_type.as_deref()) {
            Some(tag) => vec![AccountKind::parse(tag)?],
            None => AccountKind::ALL.to_vec(),
        };

        let filter = present(query.status_filter.as_deref())
            .map(StatusFilter::parse)
            .transpose()?;

        let mut accounts = Vec::new();
        for kind in kinds {
            let statuses = filter.as_ref().map(|f| f.statuses_for(kind));
            if matches!(&statuses, Some(list) if list.is_empty()) {
                continue;
            }
            accounts.extend(
                self.accounts
                    .list_account_summaries(kind, statuses.as_deref())
                    .await?,
            );
        }

        let response = summarize(accounts, pagination);
        tracing::debug!(
            "📊 Vista unificada: total={}, activas={}, inactivas={}",
            response.total_count,
            response.active_count,
            response.inactive_count
        );
        Ok(response)
    }

    pub async fn get(&self, account_type: &str, id: Uuid) -> AppResult<UnifiedAccountDetail> {
        let kind = AccountKind::parse(account_type)?;
        Ok(self.registry.find_account(kind, id).await?.into())
    }

    pub async fn update_status(&self, account_type: &str, id: Uuid, raw_status: &str) -> AppResult<UnifiedAccountDetail> {
        let kind = AccountKind::parse(account_type)?;
        Ok(self.registry.update_account_status(kind, id, raw_status).await?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn summary(kind: AccountKind, status: AccountStatusValue) -> AccountSummary {
        AccountSummary {
            id: Uuid::new_v4(),
            name: "test".to_string(),
            kind,
            status,
        }
    }

    #[test]
    fn test_parse_status_filter() {
        assert_eq!(StatusFilter::parse("Active").unwrap(), StatusFilter::Active);
        assert_eq!(StatusFilter::parse("INACTIVE").unwrap(), StatusFilter::Inactive);
        assert_eq!(
            StatusFilter::parse("online").unwrap(),
            StatusFilter::Named("ONLINE".to_string())
        );
        assert_eq!(
            StatusFilter::parse("Pending").unwrap(),
            StatusFilter::Named("PENDING".to_string())
        );
        assert!(StatusFilter::parse("flying").is_err());
    }

    #[test]
    fn test_named_filter_only_matches_owning_enum() {
        let online = StatusFilter::Named("ONLINE".to_string());
        assert!(online.statuses_for(AccountKind::Vendor).is_empty());
        assert_eq!(
            online.statuses_for(AccountKind::Driver),
            vec![AccountStatusValue::Driver(DriverStatus::Online)]
        );

        let pending = StatusFilter::Named("PENDING".to_string());
        assert!(pending.statuses_for(AccountKind::Driver).is_empty());
        assert_eq!(pending.statuses_for(AccountKind::VehicleOwner).len(), 1);
    }

    #[test]
    fn test_buckets() {
        assert_eq!(StatusFilter::Active.statuses_for(AccountKind::Driver).len(), 2);
        assert_eq!(StatusFilter::Inactive.statuses_for(AccountKind::Driver).len(), 3);
        assert_eq!(
            StatusFilter::Inactive.statuses_for(AccountKind::Vendor),
            vec![AccountStatusValue::Account(AccountStatus::Inactive)]
        );
    }

    #[test]
    fn test_summarize_counts_before_paginating() {
        let accounts = vec![
            summary(AccountKind::Vendor, AccountStatusValue::Account(AccountStatus::Active)),
            summary(AccountKind::Vendor, AccountStatusValue::Account(AccountStatus::Pending)),
            summary(AccountKind::Driver, AccountStatusValue::Driver(DriverStatus::Driving)),
        ];
        let response = summarize(accounts, Pagination { skip: 2, limit: 1 });
        assert_eq!(response.total_count, 3);
        assert_eq!(response.active_count, 2);
        assert_eq!(response.inactive_count, 1);
        assert_eq!(response.accounts.len(), 1);
        assert_eq!(response.accounts[0].account_status, "Driving");
    }

    fn any_summary() -> impl Strategy<Value = AccountSummary> {
        prop_oneof![
            prop::sample::select(vec![AccountStatus::Active, AccountStatus::Inactive, AccountStatus::Pending])
                .prop_map(|s| summary(AccountKind::Vendor, AccountStatusValue::Account(s))),
            prop::sample::select(DriverStatus::variants().to_vec())
                .prop_map(|s| summary(AccountKind::Driver, AccountStatusValue::Driver(s))),
        ]
    }

    proptest! {
        #[test]
        fn counts_always_add_up(
            accounts in prop::collection::vec(any_summary(), 0..40),
            skip in 0usize..50,
            limit in 1usize..50,
        ) {
            let response = summarize(accounts.clone(), Pagination { skip, limit });
            prop_assert_eq!(response.total_count, accounts.len());
            prop_assert_eq!(response.active_count + response.inactive_count, response.total_count);
            prop_assert!(response.accounts.len() <= limit);
        }

        #[test]
        fn consecutive_pages_partition(
            accounts in prop::collection::vec(any_summary(), 0..40),
            n in 1usize..20,
        ) {
            let first = summarize(accounts.clone(), Pagination { skip: 0, limit: n });
            let second = summarize(accounts.clone(), Pagination { skip: n, limit: n });
            let ids: Vec<Uuid> = first.accounts.iter().chain(second.accounts.iter()).map(|a| a.id).collect();
            let expected: Vec<Uuid> = accounts.iter().take(2 * n).map(|a| a.id).collect();
            prop_assert_eq!(ids, expected);
        }
    }
}
