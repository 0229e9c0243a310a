//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: la
//! búsqueda sobre el directorio de clientes y la agenda de citas.

pub mod customer_search_service;
pub mod schedule_service;

pub use customer_search_service::*;
pub use schedule_service::*;
