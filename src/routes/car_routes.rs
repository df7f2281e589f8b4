use axum::{
    extract::{Path, State},
    routing::patch,
    Form, Json, Router,
};
use uuid::Uuid;

use crate::controllers::account_controller::AccountController;
use crate::dto::account_dto::{CarResponse, CarStatusForm, DocumentStatusForm};
use crate::dto::ApiResponse;
use crate::models::document::CarDocumentSlot;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/:id/status", patch(update_car_status))
        .route("/:id/documents/:slot/status", patch(update_car_document_status))
}

async fn update_car_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<CarStatusForm>,
) -> Result<Json<ApiResponse<CarResponse>>, AppError> {
    let controller = AccountController::new(&state);
    let car = controller.update_car_status(id, &form.car_status).await?;
    Ok(Json(ApiResponse::success_with_message(car, "Car status updated".to_string())))
}

async fn update_car_document_status(
    State(state): State<AppState>,
    Path((id, slot)): Path<(Uuid, String)>,
    Form(form): Form<DocumentStatusForm>,
) -> Result<Json<ApiResponse<CarResponse>>, AppError> {
    let slot: CarDocumentSlot = slot.parse()?;
    let controller = AccountController::new(&state);
    let car = controller
        .update_car_document_status(id, slot, &form.status_value)
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        car,
        "Car document status updated".to_string(),
    )))
}
