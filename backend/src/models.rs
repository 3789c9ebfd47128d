use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// --- Marketplace ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sell,
    Buy,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sell => "sell",
            ListingType::Buy => "buy",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sell" => Ok(ListingType::Sell),
            "buy" => Ok(ListingType::Buy),
            other => Err(format!("Unknown listing type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub crop: String,
    pub variety: String,
    pub quantity: f64,
    /// INR
    pub price: f64,
    /// "<city>, <state>"
    pub location: String,
    pub description: String,
    pub listing_type: ListingType,
    pub seller_name: String,
    pub seller_phone: String,
    pub created_at: DateTime<Utc>,
    pub rating: f32,
}

impl Listing {
    pub fn unit(&self) -> &'static str {
        if self.crop == "Coconut" {
            "pieces"
        } else {
            "quintals"
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.location
            .split(',')
            .nth(1)
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_term: Option<String>,
    pub crop: Option<String>,
    pub listing_type: Option<ListingType>,
    pub location_substring: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.listing_type.is_none()
            && [&self.search_term, &self.crop, &self.location_substring]
                .iter()
                .all(|f| f.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

// --- Weather ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub visibility: Option<f64>,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub current: CurrentWeather,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Severe,
    Moderate,
    Mild,
}

// Unrecognised severities are shown as mild.
impl<'de> Deserialize<'de> for AlertSeverity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.to_lowercase().as_str() {
            "severe" => AlertSeverity::Severe,
            "moderate" => AlertSeverity::Moderate,
            _ => AlertSeverity::Mild,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub id: serde_json::Value,
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub impact: String,
}

// --- Yield ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YieldRequest {
    pub crop: String,
    pub state: String,
    pub district: String,
    pub season: String,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPrediction {
    pub crop: String,
    pub state: String,
    pub season: String,
    /// hectares
    pub area: f64,
    /// quintals per hectare
    pub yield_per_hectare: f64,
    pub total_production: f64,
    pub min_yield: f64,
    pub max_yield: f64,
    pub is_realistic: bool,
    /// Width of the comparison bar, in [0, 1].
    pub bar_fraction: f64,
}

// --- Insect identification ---

#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarImage {
    pub url: Option<String>,
    pub url_small: Option<String>,
    pub citation: Option<String>,
    pub license_name: Option<String>,
    pub license_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesCandidate {
    pub id: String,
    pub name: String,
    pub probability: f64,
    pub similar_images: Vec<SimilarImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub model_version: Option<String>,
    pub analysed_at: Option<String>,
    pub suggestions: Vec<SpeciesCandidate>,
}

// --- Assistant ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantAnswer {
    pub language: String,
    pub response: String,
}

// --- Geocoding ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPlace {
    pub name: String,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl GeoPlace {
    pub fn display_name(&self) -> String {
        let region = self
            .state
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.country.as_deref())
            .unwrap_or_default();
        if region.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, region)
        }
    }
}
