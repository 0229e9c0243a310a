use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::appointment::{CustomerAppointment, OverviewAppointment};
use crate::models::customer::CustomerAddress;
use crate::services::schedule_service::ScheduleDay;

// Request para agendar una cita
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    pub date: DateTime<Utc>,

    #[validate(length(min = 1, max = 100))]
    pub service_type: String,

    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_license: Option<String>,
    pub vehicle_vin: Option<String>,
    pub vehicle_car_id: Option<String>,
    pub notes: Option<String>,
    pub needs_loaner_car: Option<bool>,
}

// Request para actualizar una cita existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAppointmentRequest {
    pub date: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 100))]
    pub service_type: Option<String>,

    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_license: Option<String>,
    pub notes: Option<String>,
    pub is_paid: Option<bool>,
    pub is_completed: Option<bool>,
    pub needs_loaner_car: Option<bool>,
}

// Request para marcar una cita como completada (o reabrirla)
#[derive(Debug, Deserialize)]
pub struct CompleteAppointmentRequest {
    pub is_completed: Option<bool>,
}

// Response de cita para el panel general
#[derive(Debug, Serialize)]
pub struct OverviewAppointmentResponse {
    pub id: i64,
    pub date: String,
    pub vehicle_model: String,
    pub service_type: String,
    pub is_completed: bool,
    pub customer_email: String,
    pub customer_name: String,
    pub license_plate: String,
}

// Response de cita para la ficha de cliente
#[derive(Debug, Serialize)]
pub struct CustomerAppointmentResponse {
    pub id: String,
    pub date: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: CustomerAddress,
    pub vehicle_info: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_license: String,
    pub vehicle_vin: String,
    pub vehicle_car_id: String,
    pub service_type: String,
    pub notes: String,
    pub is_paid: bool,
    pub is_completed: bool,
    pub needs_loaner_car: bool,
}

// Día de agenda con sus citas en orden
#[derive(Debug, Serialize)]
pub struct ScheduleDayResponse {
    pub date: String,
    pub appointments: Vec<OverviewAppointmentResponse>,
}

impl From<OverviewAppointment> for OverviewAppointmentResponse {
    fn from(appointment: OverviewAppointment) -> Self {
        Self {
            id: appointment.id,
            date: appointment.date.to_rfc3339(),
            vehicle_model: appointment.vehicle_model,
            service_type: appointment.service_type,
            is_completed: appointment.is_completed,
            customer_email: appointment.customer_email,
            customer_name: appointment.customer_name,
            license_plate: appointment.license_plate,
        }
    }
}

impl From<CustomerAppointment> for CustomerAppointmentResponse {
    fn from(appointment: CustomerAppointment) -> Self {
        Self {
            id: appointment.id,
            date: appointment.date.to_rfc3339(),
            customer_id: appointment.customer_id,
            customer_name: appointment.customer_name,
            customer_email: appointment.customer_email,
            customer_phone: appointment.customer_phone,
            customer_address: appointment.customer_address,
            vehicle_info: appointment.vehicle_info,
            vehicle_make: appointment.vehicle_make,
            vehicle_model: appointment.vehicle_model,
            vehicle_license: appointment.vehicle_license,
            vehicle_vin: appointment.vehicle_vin,
            vehicle_car_id: appointment.vehicle_car_id,
            service_type: appointment.service_type,
            notes: appointment.notes,
            is_paid: appointment.is_paid,
            is_completed: appointment.is_completed,
            needs_loaner_car: appointment.needs_loaner_car,
        }
    }
}

impl From<ScheduleDay<OverviewAppointment>> for ScheduleDayResponse {
    fn from(day: ScheduleDay<OverviewAppointment>) -> Self {
        Self {
            date: day.date,
            appointments: day
                .appointments
                .into_iter()
                .map(OverviewAppointmentResponse::from)
                .collect(),
        }
    }
}
