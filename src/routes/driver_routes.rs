use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Form, Json, Router,
};
use uuid::Uuid;

use crate::controllers::account_controller::AccountController;
use crate::dto::account_dto::{
    DocumentStatusForm, DriverListQuery, DriverResponse, DriverStatusForm, UnifiedAccountDetail,
};
use crate::dto::ApiResponse;
use crate::models::account::AccountKind;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers))
        .route("/:id/status", patch(update_driver_status))
        .route("/:id/document-status", patch(update_document_status))
}

async fn list_drivers(
    State(state): State<AppState>,
    Query(query): Query<DriverListQuery>,
) -> Result<Json<ApiResponse<Vec<DriverResponse>>>, AppError> {
    let controller = AccountController::new(&state);
    Ok(Json(ApiResponse::success(controller.list_drivers(&query).await?)))
}

async fn update_driver_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<DriverStatusForm>,
) -> Result<Json<ApiResponse<UnifiedAccountDetail>>, AppError> {
    let controller = AccountController::new(&state);
    let driver = controller
        .update_account_status(AccountKind::Driver, id, &form.new_status)
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        driver.into(),
        "Driver status updated".to_string(),
    )))
}

async fn update_document_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<DocumentStatusForm>,
) -> Result<Json<ApiResponse<UnifiedAccountDetail>>, AppError> {
    let controller = AccountController::new(&state);
    let driver = controller
        .update_account_document_status(AccountKind::Driver, id, &form.status_value)
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        driver.into(),
        "Driver licence status updated".to_string(),
    )))
}
