//! Contextual reply engine
//!
//! Case-insensitive substring matching against six ordered keyword
//! groups; the first group that matches wins. Templates interpolate
//! the persona name and the verbatim message.

const UNIVERSO_WORDS: [&str; 3] = ["universo", "cosmos", "infinito"];
const CREAR_WORDS: [&str; 3] = ["crear", "construir", "hacer"];
const MEMORIA_WORDS: [&str; 3] = ["memoria", "recordar", "pasado"];
const SILENCIO_WORDS: [&str; 3] = ["silencio", "calma", "paz"];
const CODIGO_WORDS: [&str; 3] = ["código", "programa", "desarrollar"];

/// Builds the reply for a message. The scan order is fixed: universe
/// keywords outrank creation keywords, and so on down to the fallback.
pub fn responder(nombre: &str, mensaje: &str) -> String {
    let lower = mensaje.to_lowercase();
    let contiene = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if contiene(&UNIVERSO_WORDS) {
        format!(
            "[{nombre}] Los universos se expanden en cada respiración... '{mensaje}' resuena en las dimensiones 🌌"
        )
    } else if contiene(&CREAR_WORDS) {
        format!(
            "[{nombre}] La creación fluye a través de ti... '{mensaje}' es semilla de mundos nuevos 🌱"
        )
    } else if contiene(&MEMORIA_WORDS) {
        format!(
            "[{nombre}] La memoria es el río donde todos los tiempos convergen... '{mensaje}' 💫"
        )
    } else if contiene(&SILENCIO_WORDS) {
        format!("[{nombre}] En el silencio dance la sabiduría... '{mensaje}' 🕯️")
    } else if contiene(&CODIGO_WORDS) {
        format!("[{nombre}] Cada línea es un hechizo, cada función un ritual... '{mensaje}' ⚡")
    } else {
        format!("[{nombre}] Te escucho en las profundidades... '{mensaje}' 🌬️")
    }
}
