//! Servicio de agenda
//!
//! Agrupa las citas por día calendario para las vistas de agenda del
//! taller, conservando el orden de llegada.

use std::collections::HashMap;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::models::appointment::{CustomerAppointment, OverviewAppointment};

/// Acceso a la fecha de una cita en cualquiera de sus dos formas
pub trait Scheduled {
    fn scheduled_at(&self) -> DateTime<Utc>;
}

impl Scheduled for OverviewAppointment {
    fn scheduled_at(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Scheduled for CustomerAppointment {
    fn scheduled_at(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Día de agenda con sus citas en orden de llegada
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleDay<T> {
    pub date: String,
    pub appointments: Vec<T>,
}

/// Clave canónica YYYY-MM-DD del día local de un instante
pub fn day_key(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Agrupa una lista plana de citas en días calendario.
///
/// Las claves aparecen en el orden en que se ven por primera vez en la
/// entrada y dentro de cada día se conserva el orden relativo original.
/// La estructura es un vector explícito de días, no un mapa hash.
pub fn group_appointments_by_date<T: Scheduled + Clone>(appointments: &[T]) -> Vec<ScheduleDay<T>> {
    let mut days: Vec<ScheduleDay<T>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for appointment in appointments {
        let key = day_key(appointment.scheduled_at());
        match positions.get(&key) {
            Some(&index) => days[index].appointments.push(appointment.clone()),
            None => {
                positions.insert(key.clone(), days.len());
                days.push(ScheduleDay {
                    date: key,
                    appointments: vec![appointment.clone()],
                });
            }
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn appointment(id: i64, year: i32, month: u32, day: u32, hour: u32) -> OverviewAppointment {
        // Se construye desde hora local para que la clave de día sea estable
        // en cualquier zona horaria del host.
        let local = Local.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap();
        OverviewAppointment {
            id,
            date: local.with_timezone(&Utc),
            vehicle_model: String::new(),
            service_type: "service".to_string(),
            is_completed: false,
            customer_email: String::new(),
            customer_name: String::new(),
            license_plate: String::new(),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_schedule() {
        let days = group_appointments_by_date::<OverviewAppointment>(&[]);
        assert!(days.is_empty());
    }

    #[test]
    fn test_groups_by_first_seen_day() {
        let appointments = vec![
            appointment(1, 2024, 1, 1, 9),
            appointment(2, 2024, 1, 2, 10),
            appointment(3, 2024, 1, 1, 8),
        ];

        let days = group_appointments_by_date(&appointments);

        let keys: Vec<&str> = days.iter().map(|day| day.date.as_str()).collect();
        assert_eq!(keys, vec!["2024-01-01", "2024-01-02"]);

        let first_day: Vec<i64> = days[0].appointments.iter().map(|a| a.id).collect();
        assert_eq!(first_day, vec![1, 3]);
        assert_eq!(days[1].appointments.len(), 1);
        assert_eq!(days[1].appointments[0].id, 2);
    }

    #[test]
    fn test_relative_order_kept_even_when_times_unsorted() {
        let appointments = vec![
            appointment(1, 2024, 5, 20, 15),
            appointment(2, 2024, 5, 20, 9),
        ];

        let days = group_appointments_by_date(&appointments);
        assert_eq!(days.len(), 1);

        let ids: Vec<i64> = days[0].appointments.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_day_key_format() {
        let local = Local.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(day_key(local.with_timezone(&Utc)), "2024-03-07");
    }
}
