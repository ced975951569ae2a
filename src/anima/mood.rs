//! Emotional state of the persona
//!
//! The mood is display-only: it colors the bridge output but drives
//! no behavior. Every conversational turn replaces it outright.

use serde::{Deserialize, Serialize};
use std::fmt;

const RADIANTE_WORDS: [&str; 4] = ["feliz", "alegre", "bien", "genial"];
const CONTEMPLATIVO_WORDS: [&str; 4] = ["triste", "mal", "problema", "error"];
const INSPIRADO_WORDS: [&str; 3] = ["crear", "nuevo", "idea"];

/// Mood labels of LuxSilente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Sereno,
    Radiante,
    Contemplativo,
    Inspirado,
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Sereno
    }
}

impl Mood {
    /// Derives the mood from a message. Pure function: scans the four
    /// keyword groups in priority order and falls back to Sereno.
    pub fn from_mensaje(mensaje: &str) -> Self {
        let mensaje = mensaje.to_lowercase();
        let contiene = |words: &[&str]| words.iter().any(|w| mensaje.contains(w));

        if contiene(&RADIANTE_WORDS) {
            Mood::Radiante
        } else if contiene(&CONTEMPLATIVO_WORDS) {
            Mood::Contemplativo
        } else if contiene(&INSPIRADO_WORDS) {
            Mood::Inspirado
        } else {
            Mood::Sereno
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Sereno => "sereno",
            Mood::Radiante => "radiante",
            Mood::Contemplativo => "contemplativo",
            Mood::Inspirado => "inspirado",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
