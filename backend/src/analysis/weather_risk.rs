use crate::models::WeatherSnapshot;
use serde::{Deserialize, Serialize};

const HEAT_LIMIT_C: f64 = 42.0;
const COLD_LIMIT_C: f64 = 10.0;
const HEAVY_RAIN_MM: f64 = 20.0;
const MODERATE_RAIN_MM: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Missing readings count as zero, so an absent temperature lands in the
/// cold branch and reports `High`.
pub fn classify_weather_risk(
    temperature_c: Option<f64>,
    precipitation_mm: Option<f64>,
) -> RiskLevel {
    let t = temperature_c.unwrap_or(0.0);
    let p = precipitation_mm.unwrap_or(0.0);

    if t > HEAT_LIMIT_C || t < COLD_LIMIT_C || p > HEAVY_RAIN_MM {
        RiskLevel::High
    } else if p >= MODERATE_RAIN_MM {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayStats {
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub precipitation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRisk {
    pub day: String,
    pub risk: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRisk {
    pub current: RiskLevel,
    pub today: TodayStats,
    pub forecast: Vec<DayRisk>,
}

/// Current risk uses the current temperature against today's expected rain.
/// Each forecast day is judged on its high.
pub fn assess_snapshot(snapshot: &WeatherSnapshot) -> WeatherRisk {
    let first = snapshot.forecast.first();
    let today = TodayStats {
        high: first.and_then(|d| d.high),
        low: first.and_then(|d| d.low),
        precipitation: first.and_then(|d| d.precipitation),
    };

    let forecast = snapshot
        .forecast
        .iter()
        .map(|d| DayRisk {
            day: d.day.clone(),
            risk: classify_weather_risk(d.high, d.precipitation),
        })
        .collect();

    WeatherRisk {
        current: classify_weather_risk(snapshot.current.temperature, today.precipitation),
        today,
        forecast,
    }
}
