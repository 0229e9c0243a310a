//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle de los clientes del taller
//! y su constructor con valores por defecto.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::utils::ids::local_id;

/// Vehículo de un cliente - propiedad exclusiva de un único Customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub vin: String,
    #[serde(default)]
    pub car_id: String,
}

/// Datos parciales para construir un vehículo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleDraft {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub license: Option<String>,
    pub vin: Option<String>,
    pub car_id: Option<String>,
}

impl Vehicle {
    /// Construye un vehículo completo a partir de datos parciales.
    ///
    /// Los campos de texto ausentes quedan en cadena vacía y el año en el
    /// año calendario actual. El identificador es local hasta que la
    /// persistencia asigne el definitivo.
    pub fn from_draft(draft: VehicleDraft) -> Self {
        Self {
            id: local_id(),
            make: draft.make.unwrap_or_default(),
            model: draft.model.unwrap_or_default(),
            year: draft.year.unwrap_or_else(|| Local::now().year()),
            license: draft.license.unwrap_or_default(),
            vin: draft.vin.unwrap_or_default(),
            car_id: draft.car_id.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_defaults() {
        let vehicle = Vehicle::from_draft(VehicleDraft::default());

        assert_eq!(vehicle.year, Local::now().year());
        assert_eq!(vehicle.make, "");
        assert_eq!(vehicle.model, "");
        assert_eq!(vehicle.license, "");
        assert_eq!(vehicle.vin, "");
        assert_eq!(vehicle.car_id, "");
        assert!(!vehicle.id.is_empty());
    }

    #[test]
    fn test_from_draft_keeps_given_fields() {
        let vehicle = Vehicle::from_draft(VehicleDraft {
            make: Some("Volvo".to_string()),
            model: Some("V70".to_string()),
            year: Some(2019),
            license: Some("ABC123".to_string()),
            ..Default::default()
        });

        assert_eq!(vehicle.make, "Volvo");
        assert_eq!(vehicle.model, "V70");
        assert_eq!(vehicle.year, 2019);
        assert_eq!(vehicle.license, "ABC123");
    }

    #[test]
    fn test_from_draft_assigns_distinct_ids() {
        let a = Vehicle::from_draft(VehicleDraft::default());
        let b = Vehicle::from_draft(VehicleDraft::default());
        assert_ne!(a.id, b.id);
    }
}
