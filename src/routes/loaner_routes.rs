use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::loaner_controller::LoanerController;
use crate::dto::customer_dto::ApiResponse;
use crate::dto::loaner_dto::{
    AssignLoanerCarRequest, CreateLoanerCarRequest, LoanerCarResponse, UpdateLoanerCarRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_loaner_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_loaner))
        .route("/", get(list_loaners))
        .route("/:id", get(get_loaner))
        .route("/:id", put(update_loaner))
        .route("/:id", delete(delete_loaner))
        .route("/:id/assign", post(assign_loaner))
        .route("/:id/return", post(return_loaner))
}

async fn create_loaner(
    State(state): State<AppState>,
    Json(request): Json<CreateLoanerCarRequest>,
) -> Result<Json<ApiResponse<LoanerCarResponse>>, AppError> {
    let controller = LoanerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_loaners(
    State(state): State<AppState>,
) -> Result<Json<Vec<LoanerCarResponse>>, AppError> {
    let controller = LoanerController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_loaner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LoanerCarResponse>, AppError> {
    let controller = LoanerController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_loaner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLoanerCarRequest>,
) -> Result<Json<ApiResponse<LoanerCarResponse>>, AppError> {
    let controller = LoanerController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn assign_loaner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignLoanerCarRequest>,
) -> Result<Json<ApiResponse<LoanerCarResponse>>, AppError> {
    let controller = LoanerController::new(state.pool.clone());
    let response = controller.assign(id, request.customer_id).await?;
    Ok(Json(response))
}

async fn return_loaner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LoanerCarResponse>>, AppError> {
    let controller = LoanerController::new(state.pool.clone());
    let response = controller.return_to_fleet(id).await?;
    Ok(Json(response))
}

async fn delete_loaner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = LoanerController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Coche de préstamo eliminado exitosamente"
    })))
}
