//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula el SQL de su entidad contra PostgreSQL.

pub mod appointment_repository;
pub mod customer_repository;
pub mod loaner_repository;
pub mod vehicle_repository;
