pub mod weather_risk;
pub mod yield_band;

pub use weather_risk::{assess_snapshot, RiskLevel, WeatherRisk};
pub use yield_band::{evaluate_yield, CropReference, CROP_REFERENCES, SEASONS, STATES};
