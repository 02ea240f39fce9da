//! Current-weather lookups against the Open-Meteo forecast API.
//!
//! Fetches a single current variable (temperature or WMO weather code) for a
//! fixed coordinate and maps weather codes to human-readable labels.

pub mod condition;
pub mod provider;
pub mod types;

pub use condition::{condition_label, WeatherCondition, UNKNOWN_CONDITION_LABEL};
pub use provider::WeatherProvider;
pub use types::*;
