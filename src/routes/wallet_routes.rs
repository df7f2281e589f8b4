use axum::{extract::State, routing::post, Extension, Form, Json, Router};

use crate::controllers::wallet_controller::WalletController;
use crate::dto::wallet_dto::{AddMoneyForm, AddMoneyResponse, SearchVehicleOwnerRequest, VehicleOwnerSearchResponse};
use crate::dto::ApiResponse;
use crate::middleware::AuthenticatedAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_wallet_router() -> Router<AppState> {
    Router::new()
        .route("/search-vehicle-owner", post(search_vehicle_owner))
        .route("/add-money-to-vehicle-owner", post(add_money_to_vehicle_owner))
}

async fn search_vehicle_owner(
    State(state): State<AppState>,
    Json(request): Json<SearchVehicleOwnerRequest>,
) -> Result<Json<ApiResponse<VehicleOwnerSearchResponse>>, AppError> {
    let controller = WalletController::new(&state);
    Ok(Json(ApiResponse::success(controller.search_vehicle_owner(&request).await?)))
}

async fn add_money_to_vehicle_owner(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Form(form): Form<AddMoneyForm>,
) -> Result<Json<ApiResponse<AddMoneyResponse>>, AppError> {
    let controller = WalletController::new(&state);
    let response = controller.add_money(&admin, form).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Money added to vehicle owner wallet".to_string(),
    )))
}
