use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Form, Json, Router,
};
use uuid::Uuid;

use crate::controllers::account_controller::AccountController;
use crate::controllers::wallet_controller::WalletController;
use crate::dto::account_dto::{
    AccountStatusForm, DocumentStatusForm, UnifiedAccountDetail, VehicleOwnerDetailResponse, VehicleOwnerResponse,
};
use crate::dto::wallet_dto::LedgerResponse;
use crate::dto::ApiResponse;
use crate::models::account::{AccountKind, AccountListFilter};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_owner_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicle_owners))
        .route("/:id", get(get_vehicle_owner))
        .route("/:id/account-status", patch(update_account_status))
        .route("/:id/document-status", patch(update_document_status))
        .route("/:id/wallet/ledger", get(get_ledger))
}

async fn list_vehicle_owners(
    State(state): State<AppState>,
    Query(filter): Query<AccountListFilter>,
) -> Result<Json<ApiResponse<Vec<VehicleOwnerResponse>>>, AppError> {
    let controller = AccountController::new(&state);
    let owners = controller.list_vehicle_owners(&filter).await?;
    Ok(Json(ApiResponse::success(owners)))
}

async fn get_vehicle_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VehicleOwnerDetailResponse>>, AppError> {
    let controller = AccountController::new(&state);
    Ok(Json(ApiResponse::success(controller.get_vehicle_owner_detail(id).await?)))
}

async fn update_account_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<AccountStatusForm>,
) -> Result<Json<ApiResponse<UnifiedAccountDetail>>, AppError> {
    let controller = AccountController::new(&state);
    let account = controller
        .update_account_status(AccountKind::VehicleOwner, id, &form.account_status)
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        account.into(),
        "Vehicle owner account status updated".to_string(),
    )))
}

async fn update_document_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<DocumentStatusForm>,
) -> Result<Json<ApiResponse<UnifiedAccountDetail>>, AppError> {
    let controller = AccountController::new(&state);
    let account = controller
        .update_account_document_status(AccountKind::VehicleOwner, id, &form.status_value)
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        account.into(),
        "Vehicle owner document status updated".to_string(),
    )))
}

async fn get_ledger(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LedgerResponse>>, AppError> {
    let controller = WalletController::new(&state);
    Ok(Json(ApiResponse::success(
        controller.ledger(AccountKind::VehicleOwner, id).await?,
    )))
}
