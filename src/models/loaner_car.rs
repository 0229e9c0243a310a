//! Modelo de LoanerCar
//!
//! Este módulo contiene el struct LoanerCar de la flota de préstamo del
//! taller y sus estados posibles.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estado de un coche de préstamo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LoanerStatus {
    Available,
    Loaned,
    Maintenance,
}

impl LoanerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanerStatus::Available => "available",
            LoanerStatus::Loaned => "loaned",
            LoanerStatus::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(LoanerStatus::Available),
            "loaned" => Some(LoanerStatus::Loaned),
            "maintenance" => Some(LoanerStatus::Maintenance),
            _ => None,
        }
    }
}

/// Coche de préstamo de la flota del taller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanerCar {
    pub id: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub license: String,
    pub current_mileage: Decimal,
    pub status: String,
    pub assigned_customer_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LoanerCar {
    /// Un coche solo puede prestarse cuando está disponible
    pub fn is_available(&self) -> bool {
        self.status == LoanerStatus::Available.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [LoanerStatus::Available, LoanerStatus::Loaned, LoanerStatus::Maintenance] {
            assert_eq!(LoanerStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(LoanerStatus::parse("retired"), None);
    }

    #[test]
    fn test_is_available() {
        let car = LoanerCar {
            id: "1".to_string(),
            make: "Volvo".to_string(),
            model: "V60".to_string(),
            year: 2021,
            license: "LOA001".to_string(),
            current_mileage: Decimal::new(42_000, 0),
            status: LoanerStatus::Available.as_str().to_string(),
            assigned_customer_id: None,
            created_at: Utc::now(),
        };
        assert!(car.is_available());

        let loaned = LoanerCar {
            status: LoanerStatus::Loaned.as_str().to_string(),
            ..car
        };
        assert!(!loaned.is_available());
    }
}
