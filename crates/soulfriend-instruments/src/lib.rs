//! soulfriend-instruments
//!
//! Vietnamese mental health questionnaire definitions and scoring. Pure data
//! and pure computation — the only I/O is reading definitions embedded at
//! compile time. Configs are immutable after load and safe to share across
//! concurrent scoring calls.

pub mod config;
pub mod error;
pub mod instruments;
pub mod scoring;

use config::QuestionnaireConfig;
use error::ConfigError;

/// Identifiers of all registered instruments.
pub const SCALES: &[&str] = &["DASS-21", "PHQ-9", "GAD-7", "EPDS", "PSS-10"];

pub fn available_scales() -> &'static [&'static str] {
    SCALES
}

/// Load and validate a questionnaire definition by scale identifier.
pub fn load(scale: &str) -> Result<QuestionnaireConfig, ConfigError> {
    match scale {
        "DASS-21" => instruments::dass21::load(),
        "PHQ-9" => instruments::phq9::load(),
        "GAD-7" => instruments::gad7::load(),
        "EPDS" => instruments::epds::load(),
        "PSS-10" => instruments::pss10::load(),
        other => Err(ConfigError::UnknownScale(other.to_string())),
    }
}
