use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::customer_dto::ApiResponse;
use crate::dto::loaner_dto::{CreateLoanerCarRequest, LoanerCarResponse, UpdateLoanerCarRequest};
use crate::models::loaner_car::LoanerStatus;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::loaner_repository::LoanerRepository;
use crate::utils::errors::{conflict_error, validation_error, AppError};
use crate::utils::validation::validate_license_plate;

pub struct LoanerController {
    repository: LoanerRepository,
    customers: CustomerRepository,
}

impl LoanerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LoanerRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateLoanerCarRequest,
    ) -> Result<ApiResponse<LoanerCarResponse>, AppError> {
        request.validate()?;

        validate_license_plate(&request.license)
            .map_err(|_| validation_error("license", "Formato de matrícula inválido"))?;

        if self.repository.license_exists(&request.license).await? {
            return Err(conflict_error("Coche de préstamo", "license", &request.license));
        }

        let car = self
            .repository
            .create(
                request.make,
                request.model,
                request.year.unwrap_or_else(|| Local::now().year()),
                request.license,
                request.current_mileage.unwrap_or(Decimal::ZERO),
                LoanerStatus::Available.as_str(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            car.into(),
            "Coche de préstamo registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<LoanerCarResponse, AppError> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coche de préstamo no encontrado".to_string()))?;

        Ok(car.into())
    }

    pub async fn list(&self) -> Result<Vec<LoanerCarResponse>, AppError> {
        let cars = self.repository.find_all().await?;
        Ok(cars.into_iter().map(LoanerCarResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateLoanerCarRequest,
    ) -> Result<ApiResponse<LoanerCarResponse>, AppError> {
        request.validate()?;

        if let Some(status) = request.status.as_deref() {
            if LoanerStatus::parse(status).is_none() {
                return Err(validation_error("status", "Estado de coche desconocido"));
            }
        }

        let car = self
            .repository
            .update(
                id,
                request.make,
                request.model,
                request.year,
                request.license,
                request.status,
                request.current_mileage,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            car.into(),
            "Coche de préstamo actualizado exitosamente".to_string(),
        ))
    }

    /// Asigna un coche disponible a un cliente
    pub async fn assign(
        &self,
        id: Uuid,
        customer_id: Uuid,
    ) -> Result<ApiResponse<LoanerCarResponse>, AppError> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coche de préstamo no encontrado".to_string()))?;

        if !car.is_available() {
            return Err(AppError::Conflict(
                "El coche no está disponible para préstamo".to_string(),
            ));
        }

        self.customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let car = self
            .repository
            .set_assignment(id, LoanerStatus::Loaned.as_str(), Some(customer_id))
            .await?;

        Ok(ApiResponse::success_with_message(
            car.into(),
            "Coche de préstamo asignado exitosamente".to_string(),
        ))
    }

    /// Devuelve un coche prestado a la flota
    pub async fn return_to_fleet(&self, id: Uuid) -> Result<ApiResponse<LoanerCarResponse>, AppError> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coche de préstamo no encontrado".to_string()))?;

        if car.status != LoanerStatus::Loaned.as_str() {
            return Err(AppError::Conflict("El coche no está prestado".to_string()));
        }

        let car = self
            .repository
            .set_assignment(id, LoanerStatus::Available.as_str(), None)
            .await?;

        Ok(ApiResponse::success_with_message(
            car.into(),
            "Coche de préstamo devuelto a la flota".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
