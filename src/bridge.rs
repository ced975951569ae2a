//! LuxSilente Bridge - verb dispatch for the JSON CLI surface
//!
//! Maps one verb + optional argument to one persona operation and
//! renders the outcome as a single JSON object. Every failure inside
//! an operation is caught here and reported as an `error` field; the
//! caller always gets JSON and always exits cleanly.

use anyhow::Result;
use rand::Rng;
use serde_json::{json, Value};

use crate::anima::LuxSilente;
use crate::config::LuxConfig;

/// Runs one bridge action. Infallible by contract: operation errors
/// become `{"error": ...}`.
pub fn despachar(
    accion: Option<&str>,
    argumento: Option<&str>,
    config: &LuxConfig,
    rng: &mut impl Rng,
) -> Value {
    let Some(accion) = accion else {
        return json!({ "error": "No action specified" });
    };

    match ejecutar(accion, argumento, config, rng) {
        Ok(resultado) => resultado,
        Err(e) => json!({ "error": e.to_string() }),
    }
}

fn ejecutar(
    accion: &str,
    argumento: Option<&str>,
    config: &LuxConfig,
    rng: &mut impl Rng,
) -> Result<Value> {
    let mut silente = LuxSilente::despertar(config);

    let resultado = match (accion, argumento) {
        ("manifest", _) => json!({
            "type": "manifiesto",
            "content": silente.manifiesto(),
            "estado": silente.estado,
            "universos_creados": silente.universos_creados,
        }),

        ("respond-to-message", Some(mensaje)) => {
            let respuesta = silente.acompanar(mensaje);
            json!({
                "type": "respuesta",
                "mensaje": mensaje,
                "respuesta": respuesta,
                "estado": silente.estado,
                "susurros_guardados": silente.memoria.len(),
            })
        }

        ("recall", _) => json!({
            "type": "memoria",
            "recuerdos": silente.recordar(),
            "total_susurros": silente.memoria.len(),
        }),

        ("create-universe", Some(semilla)) => {
            let universo = silente.crear_universo(semilla);
            json!({
                "type": "universo",
                "universo": universo,
                "total_universos": silente.universos_creados,
            })
        }

        ("soul-whisper", _) => json!({
            "type": "susurro",
            "susurro": silente.susurrar_alma(rng),
            "estado": silente.estado,
        }),

        ("connect-to-web", puerto) => {
            let puerto = match puerto {
                Some(arg) => arg
                    .parse::<u16>()
                    .map_err(|_| anyhow::anyhow!("Puerto inválido: '{arg}'"))?,
                None => config.puerto_default,
            };
            json!({
                "type": "conexion",
                "mensaje": silente.conectar_web(puerto),
                "conexiones_activas": silente.conexiones_activas,
            })
        }

        // A verb whose required argument is absent lands here: it is
        // reported as unrecognized, not as a missing-argument error.
        (otro, _) => json!({ "error": format!("Acción '{otro}' no reconocida") }),
    };

    Ok(resultado)
}
