//! LuxSilente Bridge - Entry Point
//!
//! One invocation = one verb = one JSON object on stdout. Everything
//! else (wake-up banner, persistence warnings) goes to stderr so the
//! web process can parse stdout blindly.

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use lux_silente::{bridge, LuxConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bridge action: manifest, respond-to-message, recall,
    /// create-universe, soul-whisper or connect-to-web
    accion: Option<String>,

    /// Free-text argument for the action (message, seed or port)
    argumento: Option<String>,

    /// Seed for deterministic whisper selection
    #[arg(long)]
    seed: Option<u64>,

    /// Override the persisted memory file location
    #[arg(long)]
    memoria_path: Option<PathBuf>,

    /// Alternative config file (default: config/luxsilente.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_env("LUXSILENTE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => LuxConfig::load_from(path),
        None => LuxConfig::load(),
    }
    .unwrap_or_else(|e| {
        warn!("🔸 No se pudo cargar la configuración: {e}");
        LuxConfig::default()
    });

    if let Some(path) = args.memoria_path {
        config.memoria_path = path;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let salida = bridge::despachar(
        args.accion.as_deref(),
        args.argumento.as_deref(),
        &config,
        &mut rng,
    );

    println!("{salida}");
    Ok(())
}
