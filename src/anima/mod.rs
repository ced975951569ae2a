//! Anima Level - The Persona and Its Voice
//!
//! Keyword-driven replies, the mood scan, and the stateful persona
//! that ties them to the persisted whisper memory.

pub mod mood;
pub mod persona;
pub mod respond;

pub use mood::Mood;
pub use persona::LuxSilente;
