use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::appointment_dto::{
    CreateAppointmentRequest, CustomerAppointmentResponse, OverviewAppointmentResponse,
    ScheduleDayResponse, UpdateAppointmentRequest,
};
use crate::dto::customer_dto::ApiResponse;
use crate::models::appointment::{combined_model, CustomerAppointment, OverviewAppointment};
use crate::models::customer::CustomerAddress;
use crate::repositories::appointment_repository::AppointmentRepository;
use crate::services::schedule_service::group_appointments_by_date;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::ids::local_id;

pub struct AppointmentController {
    repository: AppointmentRepository,
}

impl AppointmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AppointmentRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<ApiResponse<CustomerAppointmentResponse>, AppError> {
        request.validate()?;

        if request.service_type.trim().is_empty() {
            return Err(validation_error("service_type", "El tipo de servicio es requerido"));
        }

        let vehicle_make = request.vehicle_make.unwrap_or_default();
        let vehicle_model = request.vehicle_model.unwrap_or_default();

        let appointment = CustomerAppointment {
            id: local_id(),
            date: request.date,
            customer_id: request.customer_id.unwrap_or_default(),
            customer_name: request.customer_name.unwrap_or_default(),
            customer_email: request.customer_email.unwrap_or_default(),
            customer_phone: request.customer_phone.unwrap_or_default(),
            customer_address: CustomerAddress {
                street: request.street.unwrap_or_default(),
                zip_code: request.zip_code.unwrap_or_default(),
                city: request.city.unwrap_or_default(),
            },
            vehicle_info: combined_model(&vehicle_make, &vehicle_model),
            vehicle_make,
            vehicle_model,
            vehicle_license: request.vehicle_license.unwrap_or_default(),
            vehicle_vin: request.vehicle_vin.unwrap_or_default(),
            vehicle_car_id: request.vehicle_car_id.unwrap_or_default(),
            service_type: request.service_type,
            notes: request.notes.unwrap_or_default(),
            is_paid: false,
            is_completed: false,
            needs_loaner_car: request.needs_loaner_car.unwrap_or(false),
        };

        let appointment = self.repository.create(&appointment).await?;

        Ok(ApiResponse::success_with_message(
            appointment.into(),
            "Cita agendada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CustomerAppointmentResponse, AppError> {
        let appointment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cita no encontrada".to_string()))?;

        Ok(appointment.into())
    }

    /// Citas en la forma compacta del panel general
    pub async fn list_overview(&self) -> Result<Vec<OverviewAppointmentResponse>, AppError> {
        let appointments = self.repository.find_all().await?;

        Ok(appointments
            .into_iter()
            .map(OverviewAppointment::from)
            .map(OverviewAppointmentResponse::from)
            .collect())
    }

    pub async fn list_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<CustomerAppointmentResponse>, AppError> {
        let appointments = self.repository.find_by_customer(customer_id).await?;
        Ok(appointments.into_iter().map(CustomerAppointmentResponse::from).collect())
    }

    /// Agenda agrupada por día calendario, en orden de primera aparición
    pub async fn schedule(&self) -> Result<Vec<ScheduleDayResponse>, AppError> {
        let appointments: Vec<OverviewAppointment> = self
            .repository
            .find_all()
            .await?
            .into_iter()
            .map(OverviewAppointment::from)
            .collect();

        let days = group_appointments_by_date(&appointments);
        Ok(days.into_iter().map(ScheduleDayResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAppointmentRequest,
    ) -> Result<ApiResponse<CustomerAppointmentResponse>, AppError> {
        request.validate()?;

        let mut appointment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cita no encontrada".to_string()))?;

        if let Some(date) = request.date {
            appointment.date = date;
        }
        if let Some(service_type) = request.service_type {
            appointment.service_type = service_type;
        }
        if let Some(customer_name) = request.customer_name {
            appointment.customer_name = customer_name;
        }
        if let Some(customer_email) = request.customer_email {
            appointment.customer_email = customer_email;
        }
        if let Some(customer_phone) = request.customer_phone {
            appointment.customer_phone = customer_phone;
        }
        if let Some(vehicle_make) = request.vehicle_make {
            appointment.vehicle_make = vehicle_make;
        }
        if let Some(vehicle_model) = request.vehicle_model {
            appointment.vehicle_model = vehicle_model;
        }
        if let Some(vehicle_license) = request.vehicle_license {
            appointment.vehicle_license = vehicle_license;
        }
        if let Some(notes) = request.notes {
            appointment.notes = notes;
        }
        if let Some(is_paid) = request.is_paid {
            appointment.is_paid = is_paid;
        }
        if let Some(is_completed) = request.is_completed {
            appointment.is_completed = is_completed;
        }
        if let Some(needs_loaner_car) = request.needs_loaner_car {
            appointment.needs_loaner_car = needs_loaner_car;
        }

        appointment.vehicle_info =
            combined_model(&appointment.vehicle_make, &appointment.vehicle_model);

        let appointment = self.repository.update(id, &appointment).await?;

        Ok(ApiResponse::success_with_message(
            appointment.into(),
            "Cita actualizada exitosamente".to_string(),
        ))
    }

    pub async fn set_completed(
        &self,
        id: Uuid,
        is_completed: bool,
    ) -> Result<ApiResponse<CustomerAppointmentResponse>, AppError> {
        let appointment = self.repository.set_completed(id, is_completed).await?;

        Ok(ApiResponse::success_with_message(
            appointment.into(),
            "Cita actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
