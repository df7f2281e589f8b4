use axum::{
    extract::{Path, Query, State},
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::controllers::wallet_controller::WalletController;
use crate::dto::admin_dto::{AdminListQuery, AdminResponse, UpdateAdminProfileRequest};
use crate::dto::wallet_dto::{AdminWalletBalanceResponse, RazorpayTransactionQuery};
use crate::dto::ApiResponse;
use crate::middleware::AuthenticatedAdmin;
use crate::models::wallet::{LedgerEntry, RazorpayTransaction};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de gestión de admins; se montan directamente bajo `/admin`
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/list", get(list_admins))
        .route("/admin-wallet/ledger", get(admin_wallet_ledger))
        .route("/admin-wallet/balance", get(admin_wallet_balance))
        .route("/razorpay-transactions", get(list_razorpay_transactions))
        .route("/:admin_id", get(get_admin))
}

async fn get_profile(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> Result<Json<ApiResponse<AdminResponse>>, AppError> {
    let controller = AdminController::new(&state);
    Ok(Json(ApiResponse::success(controller.profile(&admin).await?)))
}

async fn update_profile(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Json(request): Json<UpdateAdminProfileRequest>,
) -> Result<Json<ApiResponse<AdminResponse>>, AppError> {
    let controller = AdminController::new(&state);
    let updated = controller.update_profile(&admin, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        updated,
        "Admin profile updated".to_string(),
    )))
}

async fn list_admins(
    State(state): State<AppState>,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<ApiResponse<Vec<AdminResponse>>>, AppError> {
    let controller = AdminController::new(&state);
    Ok(Json(ApiResponse::success(controller.list_admins(&query).await?)))
}

async fn get_admin(
    State(state): State<AppState>,
    Path(admin_id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdminResponse>>, AppError> {
    let controller = AdminController::new(&state);
    Ok(Json(ApiResponse::success(controller.get_admin(admin_id).await?)))
}

async fn admin_wallet_ledger(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> Result<Json<ApiResponse<Vec<LedgerEntry>>>, AppError> {
    let controller = WalletController::new(&state);
    Ok(Json(ApiResponse::success(controller.admin_ledger(&admin).await?)))
}

async fn admin_wallet_balance(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> Result<Json<ApiResponse<AdminWalletBalanceResponse>>, AppError> {
    let controller = WalletController::new(&state);
    Ok(Json(ApiResponse::success(controller.admin_balance(&admin).await?)))
}

async fn list_razorpay_transactions(
    State(state): State<AppState>,
    Query(query): Query<RazorpayTransactionQuery>,
) -> Result<Json<ApiResponse<Vec<RazorpayTransaction>>>, AppError> {
    let controller = WalletController::new(&state);
    Ok(Json(ApiResponse::success(
        controller.razorpay_transactions(&query).await?,
    )))
}
