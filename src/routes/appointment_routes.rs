use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::appointment_controller::AppointmentController;
use crate::dto::appointment_dto::{
    CompleteAppointmentRequest, CreateAppointmentRequest, CustomerAppointmentResponse,
    OverviewAppointmentResponse, ScheduleDayResponse, UpdateAppointmentRequest,
};
use crate::dto::customer_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_appointment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_appointment))
        .route("/", get(list_appointments))
        .route("/schedule", get(get_schedule))
        .route("/:id", get(get_appointment))
        .route("/:id", put(update_appointment))
        .route("/:id", delete(delete_appointment))
        .route("/:id/complete", put(complete_appointment))
}

async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<ApiResponse<CustomerAppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<OverviewAppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.list_overview().await?;
    Ok(Json(response))
}

async fn get_schedule(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleDayResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.schedule().await?;
    Ok(Json(response))
}

async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerAppointmentResponse>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<ApiResponse<CustomerAppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn complete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CompleteAppointmentRequest>,
) -> Result<Json<ApiResponse<CustomerAppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller
        .set_completed(id, request.is_completed.unwrap_or(true))
        .await?;
    Ok(Json(response))
}

async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Cita eliminada exitosamente"
    })))
}
