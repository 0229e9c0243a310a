use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::customer_dto::{
    ApiResponse, CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest,
};
use crate::models::customer::{Customer, CustomerAddress, CustomerDraft};
use crate::models::vehicle::VehicleDraft;
use crate::repositories::customer_repository::CustomerRepository;
use crate::services::customer_search_service::CustomerSearchService;
use crate::utils::errors::{conflict_error, validation_error, AppError};
use crate::utils::validation::validate_email;

pub struct CustomerController {
    repository: CustomerRepository,
    directory: Arc<CustomerSearchService>,
}

impl CustomerController {
    pub fn new(pool: PgPool, directory: Arc<CustomerSearchService>) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
            directory,
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, AppError> {
        request.validate()?;

        if request.name.trim().is_empty() {
            return Err(validation_error("name", "El nombre es requerido"));
        }

        if let Some(email) = request.email.as_deref() {
            if !email.is_empty() {
                validate_email(email).map_err(|_| validation_error("email", "Formato de email inválido"))?;

                if self.repository.email_exists(email).await? {
                    return Err(conflict_error("Cliente", "email", email));
                }
            }
        }

        if let Some(vehicles) = &request.vehicles {
            for vehicle in vehicles {
                vehicle.validate()?;
            }
        }

        let draft = CustomerDraft {
            name: Some(request.name),
            email: request.email,
            phone: request.phone,
            notes: request.notes,
            address: Some(CustomerAddress {
                street: request.street.unwrap_or_default(),
                zip_code: request.zip_code.unwrap_or_default(),
                city: request.city.unwrap_or_default(),
            }),
            vehicles: request.vehicles.map(|vehicles| {
                vehicles
                    .into_iter()
                    .map(|vehicle| VehicleDraft {
                        make: vehicle.make,
                        model: vehicle.model,
                        year: vehicle.year,
                        license: vehicle.license,
                        vin: vehicle.vin,
                        car_id: vehicle.car_id,
                    })
                    .collect()
            }),
        };

        let customer = self.repository.create(&Customer::from_draft(draft)).await?;
        self.directory.upsert(customer.clone()).await;

        Ok(ApiResponse::success_with_message(
            customer.into(),
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(customer.into())
    }

    pub async fn list(&self) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.find_all().await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    /// Búsqueda por texto libre sobre el directorio en memoria
    pub async fn search(&self, query: Option<String>) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.directory.search(query.as_deref().unwrap_or("")).await;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        if let Some(email) = request.email.as_deref() {
            if !email.is_empty() && email != current.email {
                validate_email(email).map_err(|_| validation_error("email", "Formato de email inválido"))?;

                if self.repository.email_exists(email).await? {
                    return Err(conflict_error("Cliente", "email", email));
                }
            }
        }

        let customer = self
            .repository
            .update(
                id,
                request.name,
                request.email,
                request.phone,
                request.notes,
                request.street,
                request.zip_code,
                request.city,
            )
            .await?;

        self.directory.upsert(customer.clone()).await;

        Ok(ApiResponse::success_with_message(
            customer.into(),
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        self.directory.remove(&id.to_string()).await;
        Ok(())
    }
}
