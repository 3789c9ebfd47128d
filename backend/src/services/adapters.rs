use super::FarmServices;
use crate::analysis::{assess_snapshot, evaluate_yield, WeatherRisk};
use crate::error::{ActionError, BhoomiError, BhoomiResult, ErrorKind};
use crate::models::{
    AssistantAnswer, ClassificationResult, GeoPlace, ImageUpload, WeatherAlert, WeatherSnapshot,
    YieldPrediction, YieldRequest,
};
use crate::reference;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub async fn request_yield_prediction(
    services: &dyn FarmServices,
    request: YieldRequest,
) -> BhoomiResult<YieldPrediction> {
    let missing: Vec<&str> = [
        ("crop", &request.crop),
        ("state", &request.state),
        ("district", &request.district),
        ("season", &request.season),
    ]
    .iter()
    .filter(|(_, v)| v.trim().is_empty())
    .map(|(name, _)| *name)
    .collect();

    if !missing.is_empty() {
        return Err(BhoomiError::validation(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )));
    }
    if !request.area.is_finite() || request.area <= 0.0 {
        return Err(BhoomiError::validation("Area must be greater than zero"));
    }

    let request = YieldRequest {
        crop: request.crop.trim().to_string(),
        state: request.state.trim().to_string(),
        district: request.district.trim().to_string(),
        season: request.season.trim().to_string(),
        area: request.area,
    };

    let predicted = services.predict(&request).await.map_err(|e| {
        tracing::warn!("Yield prediction failed for {}: {}", request.crop, e);
        e
    })?;
    evaluate_yield(&request, predicted)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub weather: Option<WeatherSnapshot>,
    pub alerts: Vec<WeatherAlert>,
    pub risk: Option<WeatherRisk>,
    pub weather_error: Option<ActionError>,
    pub alerts_error: Option<ActionError>,
    pub fetched_at: DateTime<Utc>,
}

fn scoped_network_error(what: &str, e: &BhoomiError) -> ActionError {
    ActionError {
        error_kind: ErrorKind::NetworkError,
        message: format!("Failed to fetch {}: {}", what, e),
    }
}

/// Fetches the snapshot and the alert list together. One half failing still
/// yields a report with the other half; only a double failure is an error.
pub async fn request_weather_and_alerts(
    services: &dyn FarmServices,
    location: &str,
) -> BhoomiResult<WeatherReport> {
    let location = location.trim();
    let city = location.split(',').next().unwrap_or_default().trim();
    if city.is_empty() {
        return Err(BhoomiError::validation("Location is required"));
    }

    let (weather, alerts) = tokio::join!(services.current_weather(city), services.active_alerts());

    match (weather, alerts) {
        (Err(we), Err(ae)) => {
            tracing::warn!("Weather and alerts both failed for {}: {} / {}", city, we, ae);
            Err(BhoomiError::Network(format!(
                "Failed to fetch weather or alerts: {}",
                we
            )))
        }
        (weather, alerts) => {
            let weather_error = weather.as_ref().err().map(|e| {
                tracing::warn!("Weather fetch failed for {}: {}", city, e);
                scoped_network_error("weather", e)
            });
            let alerts_error = alerts.as_ref().err().map(|e| {
                tracing::warn!("Alerts fetch failed: {}", e);
                scoped_network_error("alerts", e)
            });
            let weather = weather.ok();
            let risk = weather.as_ref().map(assess_snapshot);

            Ok(WeatherReport {
                location: location.to_string(),
                weather,
                alerts: alerts.unwrap_or_default(),
                risk,
                weather_error,
                alerts_error,
                fetched_at: Utc::now(),
            })
        }
    }
}

pub fn validate_image(upload: &ImageUpload) -> BhoomiResult<()> {
    if upload.bytes.is_empty() {
        return Err(BhoomiError::validation("Please select an image to upload"));
    }
    if !upload.mime_type.trim().to_lowercase().starts_with("image/") {
        return Err(BhoomiError::validation(format!(
            "'{}' is not an image file",
            upload.mime_type
        )));
    }
    Ok(())
}

pub async fn request_insect_identification(
    services: &dyn FarmServices,
    upload: ImageUpload,
) -> BhoomiResult<ClassificationResult> {
    validate_image(&upload)?;

    let mut result = services.identify(upload).await?;
    for s in result.suggestions.iter_mut() {
        s.probability = if s.probability.is_finite() {
            s.probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
    result.suggestions.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(result)
}

/// Non-English codes prefix a reply-language instruction. Codes missing
/// from the language table still get one, naming no language.
pub fn localized_prompt(prompt: &str, language_code: &str) -> String {
    if language_code == "en" {
        return prompt.to_string();
    }
    let name = reference::language(language_code)
        .map(|l| l.name)
        .unwrap_or("the selected language");
    format!("Please respond in {}. {}", name, prompt)
}

pub async fn request_assistant_answer(
    services: &dyn FarmServices,
    prompt: &str,
    language_code: &str,
) -> BhoomiResult<AssistantAnswer> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(BhoomiError::validation("Please enter your question"));
    }
    let full_prompt = localized_prompt(prompt, language_code);

    match services.ask(&full_prompt).await {
        Ok(response) => Ok(AssistantAnswer {
            language: language_code.to_string(),
            response,
        }),
        Err(BhoomiError::Network(detail)) => {
            tracing::warn!("Assistant unreachable: {}", detail);
            Err(BhoomiError::Network(format!(
                "Cannot connect to the assistant service at {}",
                services.base_url()
            )))
        }
        Err(BhoomiError::Validation(msg)) => Err(BhoomiError::Validation(msg)),
        Err(other) => Err(BhoomiError::Server(format!(
            "The assistant service failed: {}",
            other
        ))),
    }
}

pub async fn locate(services: &dyn FarmServices, lat: f64, lon: f64) -> BhoomiResult<GeoPlace> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(BhoomiError::validation(format!(
            "Coordinates out of range: {}, {}",
            lat, lon
        )));
    }

    services
        .reverse_geocode(lat, lon)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| BhoomiError::Server("Could not determine city from coordinates".to_string()))
}
