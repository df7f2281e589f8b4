use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Form, Json, Router,
};

use crate::controllers::order_controller::OrderController;
use crate::dto::order_dto::{CancelOrderForm, CancelOrderResponse, OrderListQuery};
use crate::dto::ApiResponse;
use crate::models::order::OrderRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/:id/cancel", patch(cancel_order))
}

async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<ApiResponse<Vec<OrderRecord>>>, AppError> {
    let controller = OrderController::new(&state);
    Ok(Json(ApiResponse::success(controller.list_orders(&query).await?)))
}

async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CancelOrderForm>,
) -> Result<Json<ApiResponse<CancelOrderResponse>>, AppError> {
    let controller = OrderController::new(&state);
    let cancelled = controller.cancel_order(id, form).await?;
    Ok(Json(ApiResponse::success_with_message(
        cancelled,
        "Order cancelled".to_string(),
    )))
}
