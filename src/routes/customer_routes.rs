use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::appointment_controller::AppointmentController;
use crate::controllers::customer_controller::CustomerController;
use crate::dto::appointment_dto::CustomerAppointmentResponse;
use crate::dto::customer_dto::{
    ApiResponse, CreateCustomerRequest, CustomerResponse, SearchCustomersRequest,
    UpdateCustomerRequest,
};
use crate::routes::vehicle_routes;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_customer))
        .route("/", get(list_customers))
        .route("/search", get(search_customers))
        .route("/:customer_id", get(get_customer))
        .route("/:customer_id", put(update_customer))
        .route("/:customer_id", delete(delete_customer))
        .route("/:customer_id/appointments", get(list_customer_appointments))
        .nest("/:customer_id/vehicles", vehicle_routes::create_vehicle_router())
}

async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.directory.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.directory.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn search_customers(
    State(state): State<AppState>,
    Query(request): Query<SearchCustomersRequest>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.directory.clone());
    let response = controller.search(request.q).await?;
    Ok(Json(response))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.directory.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.directory.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.directory.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Cliente eliminado exitosamente"
    })))
}

async fn list_customer_appointments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CustomerAppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.list_by_customer(id).await?;
    Ok(Json(response))
}
