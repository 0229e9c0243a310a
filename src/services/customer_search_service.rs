//! Servicio de búsqueda de clientes
//!
//! Mantiene en memoria la lista completa de clientes del taller y expone
//! la búsqueda por texto libre sobre ella. La lista se carga al arrancar
//! y se reconcilia tras cada mutación de clientes o vehículos.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::models::customer::Customer;
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::AppResult;

/// Filtra clientes por texto libre.
///
/// La consulta vacía (solo la cadena exactamente vacía; los espacios
/// cuentan como texto literal) devuelve la lista intacta en su orden
/// original. En otro caso devuelve la subsecuencia ordenada de clientes
/// donde la consulta en minúsculas es substring de nombre, email, calle o
/// ciudad, la consulta cruda es substring del teléfono crudo, o la
/// consulta en minúsculas es substring de matrícula, marca o modelo de
/// alguno de sus vehículos.
pub fn filter_customers(customers: &[Customer], query: &str) -> Vec<Customer> {
    if query.is_empty() {
        return customers.to_vec();
    }

    let needle = query.to_lowercase();
    customers
        .iter()
        .filter(|customer| customer_matches(customer, query, &needle))
        .cloned()
        .collect()
}

fn customer_matches(customer: &Customer, raw_query: &str, needle: &str) -> bool {
    customer.name.to_lowercase().contains(needle)
        || customer.email.to_lowercase().contains(needle)
        || customer.phone.contains(raw_query)
        || customer.address.street.to_lowercase().contains(needle)
        || customer.address.city.to_lowercase().contains(needle)
        || customer.vehicles.iter().any(|vehicle| {
            vehicle.license.to_lowercase().contains(needle)
                || vehicle.make.to_lowercase().contains(needle)
                || vehicle.model.to_lowercase().contains(needle)
        })
}

/// Directorio en memoria de clientes para búsquedas rápidas
pub struct CustomerSearchService {
    repository: CustomerRepository,
    directory: Arc<RwLock<Vec<Customer>>>,
}

impl CustomerSearchService {
    /// Crea el servicio y carga todos los clientes en memoria
    pub async fn new(pool: PgPool) -> AppResult<Self> {
        let service = Self {
            repository: CustomerRepository::new(pool),
            directory: Arc::new(RwLock::new(Vec::new())),
        };

        service.reload().await?;

        Ok(service)
    }

    /// Recarga el directorio completo desde la base de datos
    pub async fn reload(&self) -> AppResult<()> {
        let customers = self.repository.find_all().await?;
        let mut directory = self.directory.write().await;
        *directory = customers;

        log::info!("📇 {} clientes cargados en el directorio", directory.len());
        Ok(())
    }

    /// Busca clientes por texto libre sobre el directorio en memoria
    pub async fn search(&self, query: &str) -> Vec<Customer> {
        let directory = self.directory.read().await;
        filter_customers(&directory, query)
    }

    /// Reconcilia el directorio con un cliente creado o actualizado
    pub async fn upsert(&self, customer: Customer) {
        let mut directory = self.directory.write().await;
        match directory.iter().position(|existing| existing.id == customer.id) {
            Some(index) => directory[index] = customer,
            None => directory.push(customer),
        }
    }

    /// Elimina un cliente del directorio
    pub async fn remove(&self, id: &str) {
        let mut directory = self.directory.write().await;
        directory.retain(|customer| customer.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customer::CustomerAddress;
    use crate::models::vehicle::Vehicle;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            phone: "070-123 45 67".to_string(),
            notes: String::new(),
            address: CustomerAddress {
                street: "Verkstadsgatan 1".to_string(),
                zip_code: "41250".to_string(),
                city: "Göteborg".to_string(),
            },
            vehicles: vec![Vehicle {
                id: format!("{}-v1", id),
                make: "Volvo".to_string(),
                model: "V70".to_string(),
                year: 2018,
                license: "ABC123".to_string(),
                vin: "YV1SW61R521739218".to_string(),
                car_id: "FLEET-9".to_string(),
            }],
        }
    }

    #[test]
    fn test_empty_query_is_identity() {
        let customers = vec![customer("a", "Anna"), customer("b", "Bertil")];
        let result = filter_customers(&customers, "");

        assert_eq!(result, customers);
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let customers = vec![customer("a", "Anna")];
        // Ningún campo contiene dos espacios seguidos
        assert!(filter_customers(&customers, "  ").is_empty());
        // El espacio simple sí aparece en "Verkstadsgatan 1" etc.
        assert!(!filter_customers(&customers, " ").is_empty());
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let customers = vec![customer("a", "Anna Berg"), customer("b", "Bertil Ek")];
        let result = filter_customers(&customers, "anna");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a");
    }

    #[test]
    fn test_matches_vehicle_license() {
        let mut second = customer("b", "Bertil");
        second.vehicles[0].license = "XYZ789".to_string();
        let customers = vec![customer("a", "Anna"), second];

        let result = filter_customers(&customers, "xyz78");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b");
    }

    #[test]
    fn test_matches_phone_raw_substring() {
        let customers = vec![customer("a", "Anna")];

        assert_eq!(filter_customers(&customers, "123 45").len(), 1);
        // El teléfono se compara sin normalizar: los dígitos pegados no aparecen
        assert!(filter_customers(&customers, "1234567").is_empty());
    }

    #[test]
    fn test_vin_is_not_a_search_field() {
        let customers = vec![customer("a", "Anna")];
        assert!(filter_customers(&customers, "YV1SW61R").is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let customers = vec![
            customer("c", "Cesar Volvo"),
            customer("a", "Anna Volvo"),
            customer("b", "Bertil Volvo"),
        ];

        let result = filter_customers(&customers, "volvo");
        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty_fields_do_not_match() {
        let mut bare = customer("a", "Anna");
        bare.email = String::new();
        bare.vehicles = Vec::new();

        assert!(filter_customers(&[bare], "example.com").is_empty());
    }

    #[test]
    fn test_no_mutation_of_input() {
        let customers = vec![customer("a", "Anna")];
        let before = customers.clone();
        let _ = filter_customers(&customers, "anna");
        assert_eq!(customers, before);
    }
}
