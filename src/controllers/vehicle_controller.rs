use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::customer_dto::{ApiResponse, VehicleSummary};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::{Vehicle, VehicleDraft};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::customer_search_service::CustomerSearchService;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
    customers: CustomerRepository,
    directory: Arc<CustomerSearchService>,
}

impl VehicleController {
    pub fn new(pool: PgPool, directory: Arc<CustomerSearchService>) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool),
            directory,
        }
    }

    pub async fn create(
        &self,
        customer_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleSummary>, AppError> {
        request.validate()?;

        self.customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let vehicle = Vehicle::from_draft(VehicleDraft {
            make: request.make,
            model: request.model,
            year: request.year,
            license: request.license,
            vin: request.vin,
            car_id: request.car_id,
        });

        let vehicle = self.repository.create(customer_id, &vehicle).await?;
        self.sync_directory(customer_id).await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo añadido exitosamente".to_string(),
        ))
    }

    pub async fn list_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<VehicleSummary>, AppError> {
        let vehicles = self.repository.find_by_customer(customer_id).await?;
        Ok(vehicles.into_iter().map(VehicleSummary::from).collect())
    }

    pub async fn update(
        &self,
        customer_id: Uuid,
        vehicle_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleSummary>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(
                customer_id,
                vehicle_id,
                request.make,
                request.model,
                request.year,
                request.license,
                request.vin,
                request.car_id,
            )
            .await?;

        self.sync_directory(customer_id).await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, customer_id: Uuid, vehicle_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(customer_id, vehicle_id).await?;
        self.sync_directory(customer_id).await?;
        Ok(())
    }

    // Reconcilia el directorio de búsqueda con el cliente afectado
    async fn sync_directory(&self, customer_id: Uuid) -> Result<(), AppError> {
        if let Some(customer) = self.customers.find_by_id(customer_id).await? {
            self.directory.upsert(customer).await;
        }
        Ok(())
    }
}
