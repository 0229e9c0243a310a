use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::customer_dto::{ApiResponse, VehicleSummary};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

// Router anidado bajo /api/customer/:customer_id/vehicles
pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_vehicle))
        .route("/", get(list_vehicles))
        .route("/:vehicle_id", put(update_vehicle))
        .route("/:vehicle_id", delete(delete_vehicle))
}

async fn add_vehicle(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleSummary>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.directory.clone());
    let response = controller.create(customer_id, request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<Json<Vec<VehicleSummary>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.directory.clone());
    let response = controller.list_by_customer(customer_id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path((customer_id, vehicle_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleSummary>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.directory.clone());
    let response = controller.update(customer_id, vehicle_id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path((customer_id, vehicle_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.directory.clone());
    controller.delete(customer_id, vehicle_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}
