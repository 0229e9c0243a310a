//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! identificadores locales y otras funcionalidades comunes.

pub mod errors;
pub mod ids;
pub mod validation;
