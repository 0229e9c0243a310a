use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::loaner_car::LoanerCar;

// Request para dar de alta un coche de préstamo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLoanerCarRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(length(min = 5, max = 20))]
    pub license: String,

    pub current_mileage: Option<Decimal>,
}

// Request para actualizar un coche de préstamo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLoanerCarRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(length(min = 5, max = 20))]
    pub license: Option<String>,

    pub status: Option<String>,
    pub current_mileage: Option<Decimal>,
}

// Request para asignar un coche de préstamo a un cliente
#[derive(Debug, Deserialize)]
pub struct AssignLoanerCarRequest {
    pub customer_id: Uuid,
}

// Response de coche de préstamo
#[derive(Debug, Serialize)]
pub struct LoanerCarResponse {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license: String,
    pub current_mileage: String,
    pub status: String,
    pub assigned_customer_id: Option<String>,
    pub created_at: String,
}

impl From<LoanerCar> for LoanerCarResponse {
    fn from(car: LoanerCar) -> Self {
        Self {
            id: car.id,
            make: car.make,
            model: car.model,
            year: car.year,
            license: car.license,
            current_mileage: car.current_mileage.to_string(),
            status: car.status,
            assigned_customer_id: car.assigned_customer_id,
            created_at: car.created_at.to_rfc3339(),
        }
    }
}
