use crate::error::BhoomiResult;
use crate::models::{
    ClassificationResult, GeoPlace, ImageUpload, WeatherAlert, WeatherSnapshot, YieldRequest,
};
use async_trait::async_trait;

pub mod adapters;
pub mod http;

#[cfg(test)]
pub mod testing;

pub use http::HttpFarmServices;

/// One method per external call. Implementations make exactly one attempt
/// and translate every failure into a `BhoomiError`.
#[async_trait]
pub trait FarmServices: Send + Sync {
    /// Host the calls go to, used in connectivity messages.
    fn base_url(&self) -> &str;

    /// Predicted yield in quintals per hectare.
    async fn predict(&self, request: &YieldRequest) -> BhoomiResult<f64>;

    async fn current_weather(&self, city: &str) -> BhoomiResult<WeatherSnapshot>;

    async fn active_alerts(&self) -> BhoomiResult<Vec<WeatherAlert>>;

    async fn identify(&self, upload: ImageUpload) -> BhoomiResult<ClassificationResult>;

    async fn ask(&self, prompt: &str) -> BhoomiResult<String>;

    async fn reverse_geocode(&self, lat: f64, lon: f64) -> BhoomiResult<Vec<GeoPlace>>;
}
