//! Static catalogs — languages, personas, and voice sources.
//!
//! The selection grids render straight from these tables; nothing in
//! the wizard hardcodes a language or persona list.

pub mod languages;
pub mod personas;
pub mod voices;

pub use languages::{LANGUAGES, Language};
pub use personas::{PERSONAS, Persona};
pub use voices::{StaticVoiceProvider, VoiceInfo, VoiceProvider};
