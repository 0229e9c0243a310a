use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::customer::{Customer, CustomerAddress};
use crate::models::vehicle::Vehicle;

// Request para registrar un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub vehicles: Option<Vec<CreateVehicleRequest>>,
}

// Request para actualizar un cliente existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
}

// Request para buscar clientes por texto libre
#[derive(Debug, Deserialize)]
pub struct SearchCustomersRequest {
    pub q: Option<String>,
}

// Response de cliente (vehículos incluidos)
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    pub address: CustomerAddress,
    pub vehicles: Vec<VehicleSummary>,
}

// Vehículo dentro de la response de cliente
#[derive(Debug, Serialize)]
pub struct VehicleSummary {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license: String,
    pub vin: String,
    pub car_id: String,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

impl From<Vehicle> for VehicleSummary {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            license: vehicle.license,
            vin: vehicle.vin,
            car_id: vehicle.car_id,
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            notes: customer.notes,
            address: customer.address,
            vehicles: customer.vehicles.into_iter().map(VehicleSummary::from).collect(),
        }
    }
}
