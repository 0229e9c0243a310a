//! Generación de identificadores locales
//!
//! Identificadores base-36 de vida corta para entidades creadas en memoria
//! antes de que la persistencia asigne su identificador definitivo.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Longitud fija de los identificadores locales
pub const LOCAL_ID_LEN: usize = 9;

/// Genera un identificador local base-36.
///
/// No garantiza unicidad global: solo evita colisiones dentro de una sesión
/// hasta que la persistencia devuelve el identificador real. Nunca debe
/// usarse como clave primaria durable.
pub fn local_id() -> String {
    let mut rng = rand::thread_rng();
    (0..LOCAL_ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_id_length() {
        assert_eq!(local_id().len(), LOCAL_ID_LEN);
    }

    #[test]
    fn test_local_id_alphabet() {
        let id = local_id();
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_local_id_varies() {
        let ids: std::collections::HashSet<String> = (0..100).map(|_| local_id()).collect();
        assert!(ids.len() > 1);
    }
}
