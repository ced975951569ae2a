//! 🌬️ LuxSilente - Companion Persona
//!
//! A keyword-triggered companion that listens, remembers and builds
//! conceptual universes from seed phrases. Interaction history lives
//! in one bounded JSON file; the [`bridge`] module exposes every
//! operation as a JSON CLI for an external caller.

pub mod anima;
pub mod bridge;
pub mod config;
pub mod cosmos;
pub mod memoria;

pub use anima::{LuxSilente, Mood};
pub use config::LuxConfig;
pub use cosmos::Universo;
