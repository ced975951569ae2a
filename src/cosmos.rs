//! 🌌 Conceptual universe generation
//!
//! Builds a structured universe record from a seed phrase using static
//! lookup tables. Generation never fails: unknown seed tokens simply
//! contribute nothing beyond the base dimensions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound on dimension count per universe
const MAX_DIMENSIONES: usize = 7;

const DIMENSIONES_BASE: [&str; 4] = ["tiempo", "espacio", "consciencia", "creatividad"];

/// Extra dimensions contributed by known seed tokens
fn dimensiones_de_palabra(palabra: &str) -> Option<[&'static str; 3]> {
    match palabra {
        "amor" => Some(["emoción", "conexión", "armonía"]),
        "código" => Some(["lógica", "estructura", "elegancia"]),
        "música" => Some(["ritmo", "melodía", "resonancia"]),
        "sueño" => Some(["imaginación", "posibilidad", "trascendencia"]),
        _ => None,
    }
}

/// A generated conceptual universe. Ephemeral: serialized into the
/// bridge reply, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Universo {
    pub id: u64,
    pub semilla: String,
    pub creado_en: DateTime<Utc>,
    pub dimensiones: Vec<String>,
    pub habitantes: Vec<String>,
    pub leyes_fisicas: Vec<String>,
    pub estado: String,
}

impl Universo {
    /// Generates a universe from a seed phrase and the running counter.
    pub fn generar(semilla: &str, id: u64) -> Self {
        let semilla_lower = semilla.to_lowercase();

        Self {
            id,
            semilla: semilla.to_string(),
            creado_en: Utc::now(),
            dimensiones: generar_dimensiones(&semilla_lower),
            habitantes: vec![
                format!("Entidades de {semilla_lower}"),
                "Susurros cristalizados".to_string(),
                "Memorias danzantes".to_string(),
                "Ecos de creatividad".to_string(),
            ],
            leyes_fisicas: vec![
                "La belleza se conserva en todas las transformaciones".to_string(),
                "Los pensamientos viajan más rápido que la luz".to_string(),
                "La creatividad genera energía infinita".to_string(),
                format!("Todo {semilla_lower} tiende hacia la armonía"),
            ],
            estado: "floreciendo".to_string(),
        }
    }
}

/// Base dimensions plus lookups for each whitespace token of the
/// (lowercased) seed, deduplicated in first-seen order, capped at 7.
fn generar_dimensiones(semilla_lower: &str) -> Vec<String> {
    let mut dimensiones: Vec<String> = DIMENSIONES_BASE.iter().map(|d| d.to_string()).collect();

    for palabra in semilla_lower.split_whitespace() {
        if let Some(extra) = dimensiones_de_palabra(palabra) {
            dimensiones.extend(extra.iter().map(|d| d.to_string()));
        }
    }

    let mut vistas = HashSet::new();
    dimensiones.retain(|d| vistas.insert(d.clone()));
    dimensiones.truncate(MAX_DIMENSIONES);
    dimensiones
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_dimensions_for_unknown_seed() {
        let universo = Universo::generar("xyzzy", 1);
        assert_eq!(
            universo.dimensiones,
            vec!["tiempo", "espacio", "consciencia", "creatividad"]
        );
    }

    #[test]
    fn test_seed_tokens_add_dimensions() {
        let universo = Universo::generar("amor y código", 1);
        assert!(universo.dimensiones.iter().any(|d| d == "armonía"));
        assert!(universo.dimensiones.iter().any(|d| d == "lógica"));
    }

    #[test]
    fn test_dimensions_capped_and_unique() {
        // Three known tokens would produce 4 + 9 dimensions before the cap
        let universo = Universo::generar("amor música sueño", 1);
        assert!(universo.dimensiones.len() <= 7);

        let unique: HashSet<_> = universo.dimensiones.iter().collect();
        assert_eq!(unique.len(), universo.dimensiones.len());
    }

    #[test]
    fn test_seed_matching_is_lowercased() {
        let universo = Universo::generar("AMOR", 1);
        assert!(universo.dimensiones.iter().any(|d| d == "emoción"));
    }

    #[test]
    fn test_fixed_shape_lists() {
        let universo = Universo::generar("Música", 3);
        assert_eq!(universo.id, 3);
        assert_eq!(universo.habitantes.len(), 4);
        assert_eq!(universo.habitantes[0], "Entidades de música");
        assert_eq!(universo.leyes_fisicas.len(), 4);
        assert_eq!(universo.leyes_fisicas[3], "Todo música tiende hacia la armonía");
        assert_eq!(universo.estado, "floreciendo");
        assert_eq!(universo.semilla, "Música");
    }
}
