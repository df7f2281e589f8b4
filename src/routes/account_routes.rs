use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Form, Json, Router,
};
use uuid::Uuid;

use crate::controllers::document_controller::DocumentController;
use crate::controllers::unified_account_controller::UnifiedAccountController;
use crate::dto::account_dto::{
    AccountStatusForm, UnifiedAccountDetail, UnifiedAccountListResponse, UnifiedAccountQuery,
};
use crate::dto::document_dto::{
    AccountDocumentsResponse, DocumentStatusUpdateResponse, UpdateDocumentStatusRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_account_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts))
        .route("/:account_type/:id", get(get_account))
        .route("/:account_type/:id/status", patch(update_account_status))
        .route(
            "/:account_type/:id/documents",
            get(list_documents).patch(update_document_status),
        )
}

async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<UnifiedAccountQuery>,
) -> Result<Json<ApiResponse<UnifiedAccountListResponse>>, AppError> {
    let controller = UnifiedAccountController::new(&state);
    Ok(Json(ApiResponse::success(controller.list(&query).await?)))
}

async fn get_account(
    State(state): State<AppState>,
    Path((account_type, id)): Path<(String, Uuid)>,
) -> Result<Json<ApiResponse<UnifiedAccountDetail>>, AppError> {
    let controller = UnifiedAccountController::new(&state);
    Ok(Json(ApiResponse::success(controller.get(&account_type, id).await?)))
}

async fn update_account_status(
    State(state): State<AppState>,
    Path((account_type, id)): Path<(String, Uuid)>,
    Form(form): Form<AccountStatusForm>,
) -> Result<Json<ApiResponse<UnifiedAccountDetail>>, AppError> {
    let controller = UnifiedAccountController::new(&state);
    let account = controller
        .update_status(&account_type, id, &form.account_status)
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        account,
        "Account status updated".to_string(),
    )))
}

async fn list_documents(
    State(state): State<AppState>,
    Path((account_type, id)): Path<(String, Uuid)>,
) -> Result<Json<ApiResponse<AccountDocumentsResponse>>, AppError> {
    let controller = DocumentController::new(&state);
    Ok(Json(ApiResponse::success(
        controller.list_documents(&account_type, id).await?,
    )))
}

async fn update_document_status(
    State(state): State<AppState>,
    Path((account_type, id)): Path<(String, Uuid)>,
    Json(request): Json<UpdateDocumentStatusRequest>,
) -> Result<Json<ApiResponse<DocumentStatusUpdateResponse>>, AppError> {
    let controller = DocumentController::new(&state);
    let updated = controller
        .update_document_status(&account_type, id, &request)
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        updated,
        "Document status updated".to_string(),
    )))
}
