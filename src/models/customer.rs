//! Modelo de Customer
//!
//! Este módulo contiene el struct Customer del taller, su dirección
//! estructurada y el constructor con valores por defecto.

use serde::{Deserialize, Serialize};

use crate::models::vehicle::{Vehicle, VehicleDraft};
use crate::utils::ids::local_id;

/// Dirección postal de un cliente
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub city: String,
}

/// Cliente del taller con sus vehículos
///
/// El `id` se asigna una sola vez al crearse y no se regenera nunca;
/// la lista de vehículos puede estar vacía.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub address: CustomerAddress,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

/// Datos parciales para construir un cliente
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub address: Option<CustomerAddress>,
    pub vehicles: Option<Vec<VehicleDraft>>,
}

impl Customer {
    /// Construye un cliente completo a partir de datos parciales.
    ///
    /// Los campos de texto ausentes quedan en cadena vacía, la dirección
    /// en sub-registro vacío y los vehículos en lista vacía.
    pub fn from_draft(draft: CustomerDraft) -> Self {
        Self {
            id: local_id(),
            name: draft.name.unwrap_or_default(),
            email: draft.email.unwrap_or_default(),
            phone: draft.phone.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
            address: draft.address.unwrap_or_default(),
            vehicles: draft
                .vehicles
                .unwrap_or_default()
                .into_iter()
                .map(Vehicle::from_draft)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_defaults() {
        let customer = Customer::from_draft(CustomerDraft::default());

        assert!(!customer.id.is_empty());
        assert_eq!(customer.name, "");
        assert_eq!(customer.email, "");
        assert_eq!(customer.phone, "");
        assert_eq!(customer.notes, "");
        assert_eq!(customer.address, CustomerAddress::default());
        assert!(customer.vehicles.is_empty());
    }

    #[test]
    fn test_from_draft_builds_vehicles() {
        let customer = Customer::from_draft(CustomerDraft {
            name: Some("Anna Berg".to_string()),
            vehicles: Some(vec![VehicleDraft {
                make: Some("Saab".to_string()),
                model: Some("9-5".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        });

        assert_eq!(customer.name, "Anna Berg");
        assert_eq!(customer.vehicles.len(), 1);
        assert_eq!(customer.vehicles[0].make, "Saab");
        assert_eq!(customer.vehicles[0].model, "9-5");
    }

    #[test]
    fn test_from_draft_assigns_distinct_ids() {
        let a = Customer::from_draft(CustomerDraft::default());
        let b = Customer::from_draft(CustomerDraft::default());
        assert_ne!(a.id, b.id);
    }
}
