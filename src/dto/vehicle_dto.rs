use serde::Deserialize;
use validator::Validate;

// Request para añadir un vehículo a un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(max = 100))]
    pub make: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(length(max = 20))]
    pub license: Option<String>,

    pub vin: Option<String>,
    pub car_id: Option<String>,
}

// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(max = 100))]
    pub make: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(length(max = 20))]
    pub license: Option<String>,

    pub vin: Option<String>,
    pub car_id: Option<String>,
}
