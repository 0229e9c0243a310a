//! Modelo de Appointment
//!
//! Las citas del taller viven en dos representaciones: la compacta del
//! panel general y la expandida de la ficha de cliente. La entidad
//! canónica es la expandida; la compacta es una proyección de ella y
//! descarta dirección, VIN, car_id, notas y los flags de pago/préstamo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::customer::CustomerAddress;

/// Cita compacta para el panel general
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewAppointment {
    pub id: i64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub vehicle_model: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub license_plate: String,
}

/// Cita expandida para la ficha de cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAppointment {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: CustomerAddress,
    #[serde(default)]
    pub vehicle_info: String,
    #[serde(default)]
    pub vehicle_make: String,
    #[serde(default)]
    pub vehicle_model: String,
    #[serde(default)]
    pub vehicle_license: String,
    #[serde(default)]
    pub vehicle_vin: String,
    #[serde(default)]
    pub vehicle_car_id: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub needs_loaner_car: bool,
}

/// Separa la cadena combinada "Marca Modelo" en marca y modelo.
///
/// El primer token es la marca; el resto se reúne con espacios simples.
/// Una cadena vacía produce dos cadenas vacías.
pub fn split_combined_model(combined: &str) -> (String, String) {
    let mut parts = combined.split_whitespace();
    let make = parts.next().unwrap_or("").to_string();
    let model = parts.collect::<Vec<&str>>().join(" ");
    (make, model)
}

/// Reconstruye la cadena combinada "Marca Modelo" omitiendo partes vacías
pub fn combined_model(make: &str, model: &str) -> String {
    [make, model]
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Deriva el id numérico de display a partir del id canónico.
///
/// Conserva solo los dígitos del id y los interpreta como entero; sin
/// dígitos (o con desbordamiento) el resultado es 0, nunca un error.
/// El id canónico sigue siendo el string: este valor es solo de display
/// y tolera colisiones en 0.
pub fn numeric_display_id(id: &str) -> i64 {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

impl From<OverviewAppointment> for CustomerAppointment {
    fn from(appointment: OverviewAppointment) -> Self {
        let (vehicle_make, vehicle_model) = split_combined_model(&appointment.vehicle_model);

        Self {
            id: appointment.id.to_string(),
            date: appointment.date,
            customer_id: String::new(),
            customer_name: appointment.customer_name,
            customer_email: appointment.customer_email,
            customer_phone: String::new(),
            customer_address: CustomerAddress::default(),
            vehicle_info: appointment.vehicle_model,
            vehicle_make,
            vehicle_model,
            vehicle_license: appointment.license_plate,
            vehicle_vin: String::new(),
            vehicle_car_id: String::new(),
            service_type: appointment.service_type,
            notes: String::new(),
            is_paid: false,
            is_completed: appointment.is_completed,
            needs_loaner_car: false,
        }
    }
}

impl From<CustomerAppointment> for OverviewAppointment {
    fn from(appointment: CustomerAppointment) -> Self {
        Self {
            id: numeric_display_id(&appointment.id),
            date: appointment.date,
            vehicle_model: combined_model(&appointment.vehicle_make, &appointment.vehicle_model),
            service_type: appointment.service_type,
            is_completed: appointment.is_completed,
            customer_email: appointment.customer_email,
            customer_name: appointment.customer_name,
            license_plate: appointment.vehicle_license,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn overview_fixture() -> OverviewAppointment {
        OverviewAppointment {
            id: 42,
            date: Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap(),
            vehicle_model: "Volvo V70".to_string(),
            service_type: "service".to_string(),
            is_completed: false,
            customer_email: "anna@example.com".to_string(),
            customer_name: "Anna Berg".to_string(),
            license_plate: "ABC123".to_string(),
        }
    }

    #[test]
    fn test_overview_to_customer_decomposes_model() {
        let customer: CustomerAppointment = overview_fixture().into();

        assert_eq!(customer.id, "42");
        assert_eq!(customer.vehicle_make, "Volvo");
        assert_eq!(customer.vehicle_model, "V70");
        assert_eq!(customer.vehicle_info, "Volvo V70");
        assert_eq!(customer.vehicle_license, "ABC123");
    }

    #[test]
    fn test_overview_to_customer_fills_defaults() {
        let customer: CustomerAppointment = overview_fixture().into();

        assert_eq!(customer.customer_id, "");
        assert_eq!(customer.customer_phone, "");
        assert_eq!(customer.customer_address, CustomerAddress::default());
        assert_eq!(customer.vehicle_vin, "");
        assert_eq!(customer.vehicle_car_id, "");
        assert_eq!(customer.notes, "");
        assert!(!customer.is_paid);
        assert!(!customer.needs_loaner_car);
    }

    #[test]
    fn test_numeric_id_round_trip() {
        let customer: CustomerAppointment = overview_fixture().into();
        let back: OverviewAppointment = customer.into();
        assert_eq!(back.id, 42);
    }

    #[test]
    fn test_make_model_pair_round_trip() {
        let customer: CustomerAppointment = overview_fixture().into();
        let back: OverviewAppointment = customer.clone().into();
        assert_eq!(back.vehicle_model, "Volvo V70");

        let again: CustomerAppointment = back.into();
        assert_eq!(again.vehicle_make, "Volvo");
        assert_eq!(again.vehicle_model, "V70");
    }

    #[test]
    fn test_split_combined_model_edge_cases() {
        assert_eq!(split_combined_model(""), ("".to_string(), "".to_string()));
        assert_eq!(split_combined_model("Volvo"), ("Volvo".to_string(), "".to_string()));
        assert_eq!(
            split_combined_model("Mercedes  Benz  Sprinter"),
            ("Mercedes".to_string(), "Benz Sprinter".to_string())
        );
    }

    #[test]
    fn test_combined_model_skips_empty_parts() {
        assert_eq!(combined_model("", "V70"), "V70");
        assert_eq!(combined_model("Volvo", ""), "Volvo");
        assert_eq!(combined_model("", ""), "");
    }

    #[test]
    fn test_numeric_display_id_coercion() {
        assert_eq!(numeric_display_id("42"), 42);
        assert_eq!(numeric_display_id("appt-42b"), 42);
        assert_eq!(numeric_display_id("no-digits"), 0);
        assert_eq!(numeric_display_id(""), 0);
        // Dos ids sin dígitos colapsan ambos en 0
        assert_eq!(numeric_display_id("abc"), numeric_display_id("xyz"));
    }

    #[test]
    fn test_deserializing_partial_overview_defaults_flags() {
        let appointment: OverviewAppointment = serde_json::from_str(
            r#"{"id": 7, "date": "2024-03-14T09:30:00Z"}"#,
        )
        .unwrap();

        assert!(!appointment.is_completed);
        assert_eq!(appointment.vehicle_model, "");
        assert_eq!(appointment.customer_name, "");
    }

    #[test]
    fn test_deserializing_partial_customer_defaults_fields() {
        let appointment: CustomerAppointment = serde_json::from_str(
            r#"{"id": "a1", "date": "2024-03-14T09:30:00Z", "service_type": "repair"}"#,
        )
        .unwrap();

        assert_eq!(appointment.service_type, "repair");
        assert!(!appointment.is_completed);
        assert!(!appointment.is_paid);
        assert!(!appointment.needs_loaner_car);
        assert_eq!(appointment.customer_address, CustomerAddress::default());
    }
}
