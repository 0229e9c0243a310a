use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::appointment::CustomerAppointment;
use crate::models::customer::CustomerAddress;
use crate::utils::errors::AppError;

// Fila de la tabla appointments - la forma canónica almacenada es la expandida
#[derive(Debug, sqlx::FromRow)]
struct AppointmentRow {
    id: Uuid,
    date: DateTime<Utc>,
    customer_id: Option<Uuid>,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    street: String,
    zip_code: String,
    city: String,
    vehicle_info: String,
    vehicle_make: String,
    vehicle_model: String,
    vehicle_license: String,
    vehicle_vin: String,
    vehicle_car_id: String,
    service_type: String,
    notes: String,
    is_paid: bool,
    is_completed: bool,
    needs_loaner_car: bool,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

impl AppointmentRow {
    fn into_appointment(self) -> CustomerAppointment {
        CustomerAppointment {
            id: self.id.to_string(),
            date: self.date,
            customer_id: self.customer_id.map(|id| id.to_string()).unwrap_or_default(),
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            customer_address: CustomerAddress {
                street: self.street,
                zip_code: self.zip_code,
                city: self.city,
            },
            vehicle_info: self.vehicle_info,
            vehicle_make: self.vehicle_make,
            vehicle_model: self.vehicle_model,
            vehicle_license: self.vehicle_license,
            vehicle_vin: self.vehicle_vin,
            vehicle_car_id: self.vehicle_car_id,
            service_type: self.service_type,
            notes: self.notes,
            is_paid: self.is_paid,
            is_completed: self.is_completed,
            needs_loaner_car: self.needs_loaner_car,
        }
    }
}

pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persiste una cita nueva; el id local se sustituye por el definitivo
    pub async fn create(
        &self,
        appointment: &CustomerAppointment,
    ) -> Result<CustomerAppointment, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            r#"
            INSERT INTO appointments (
                id, date, customer_id, customer_name, customer_email, customer_phone,
                street, zip_code, city, vehicle_info, vehicle_make, vehicle_model,
                vehicle_license, vehicle_vin, vehicle_car_id, service_type, notes,
                is_paid, is_completed, needs_loaner_car, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(appointment.date)
        .bind(Uuid::parse_str(&appointment.customer_id).ok())
        .bind(&appointment.customer_name)
        .bind(&appointment.customer_email)
        .bind(&appointment.customer_phone)
        .bind(&appointment.customer_address.street)
        .bind(&appointment.customer_address.zip_code)
        .bind(&appointment.customer_address.city)
        .bind(&appointment.vehicle_info)
        .bind(&appointment.vehicle_make)
        .bind(&appointment.vehicle_model)
        .bind(&appointment.vehicle_license)
        .bind(&appointment.vehicle_vin)
        .bind(&appointment.vehicle_car_id)
        .bind(&appointment.service_type)
        .bind(&appointment.notes)
        .bind(appointment.is_paid)
        .bind(appointment.is_completed)
        .bind(appointment.needs_loaner_car)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_appointment())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerAppointment>, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(AppointmentRow::into_appointment))
    }

    /// Todas las citas en orden de fecha y, a igual fecha, de alta
    pub async fn find_all(&self) -> Result<Vec<CustomerAppointment>, AppError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(
            "SELECT * FROM appointments ORDER BY date ASC, created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AppointmentRow::into_appointment).collect())
    }

    pub async fn find_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<CustomerAppointment>, AppError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(
            "SELECT * FROM appointments WHERE customer_id = $1 ORDER BY date ASC, created_at ASC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AppointmentRow::into_appointment).collect())
    }

    /// Reescribe una cita completa (el controlador mezcla los cambios)
    pub async fn update(
        &self,
        id: Uuid,
        appointment: &CustomerAppointment,
    ) -> Result<CustomerAppointment, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            r#"
            UPDATE appointments
            SET date = $2, customer_name = $3, customer_email = $4, customer_phone = $5,
                vehicle_info = $6, vehicle_make = $7, vehicle_model = $8, vehicle_license = $9,
                service_type = $10, notes = $11, is_paid = $12, is_completed = $13,
                needs_loaner_car = $14
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(appointment.date)
        .bind(&appointment.customer_name)
        .bind(&appointment.customer_email)
        .bind(&appointment.customer_phone)
        .bind(&appointment.vehicle_info)
        .bind(&appointment.vehicle_make)
        .bind(&appointment.vehicle_model)
        .bind(&appointment.vehicle_license)
        .bind(&appointment.service_type)
        .bind(&appointment.notes)
        .bind(appointment.is_paid)
        .bind(appointment.is_completed)
        .bind(appointment.needs_loaner_car)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_appointment())
    }

    pub async fn set_completed(
        &self,
        id: Uuid,
        is_completed: bool,
    ) -> Result<CustomerAppointment, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            "UPDATE appointments SET is_completed = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_completed)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Cita no encontrada".to_string()))?;

        Ok(row.into_appointment())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cita no encontrada".to_string()))?;

        sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
