use super::FarmServices;
use crate::config::AppConfig;
use crate::error::{BhoomiError, BhoomiResult};
use crate::models::{
    ClassificationResult, GeoPlace, ImageUpload, SimilarImage, SpeciesCandidate, WeatherAlert,
    WeatherSnapshot, YieldRequest,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

pub struct HttpFarmServices {
    client: reqwest::Client,
    api_base_url: String,
    geocoding_base_url: String,
    geocoding_api_key: Option<String>,
}

impl HttpFarmServices {
    pub fn new(config: &AppConfig) -> BhoomiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BhoomiError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.clone(),
            geocoding_base_url: config.geocoding_base_url.clone(),
            geocoding_api_key: config.geocoding_api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predicted_production: Option<f64>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    response: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawIdentification {
    model_version: Option<String>,
    input: Option<RawInput>,
    result: Option<RawResult>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawInput {
    datetime: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    classification: Option<RawClassification>,
}

#[derive(Debug, Deserialize)]
struct RawClassification {
    #[serde(default)]
    suggestions: Vec<RawSuggestion>,
}

#[derive(Debug, Deserialize)]
struct RawSuggestion {
    #[serde(default)]
    id: Value,
    name: String,
    #[serde(default)]
    probability: f64,
    #[serde(default)]
    similar_images: Vec<RawSimilarImage>,
}

#[derive(Debug, Deserialize)]
struct RawSimilarImage {
    url: Option<String>,
    url_small: Option<String>,
    citation: Option<String>,
    license_name: Option<String>,
    license_url: Option<String>,
}

impl From<RawIdentification> for ClassificationResult {
    fn from(raw: RawIdentification) -> Self {
        let suggestions = raw
            .result
            .and_then(|r| r.classification)
            .map(|c| c.suggestions)
            .unwrap_or_default()
            .into_iter()
            .map(|s| SpeciesCandidate {
                id: match s.id {
                    Value::String(id) => id,
                    Value::Null => String::new(),
                    other => other.to_string(),
                },
                name: s.name,
                probability: s.probability,
                similar_images: s
                    .similar_images
                    .into_iter()
                    .map(|img| SimilarImage {
                        url: img.url,
                        url_small: img.url_small,
                        citation: img.citation,
                        license_name: img.license_name,
                        license_url: img.license_url,
                    })
                    .collect(),
            })
            .collect();

        ClassificationResult {
            model_version: raw.model_version,
            analysed_at: raw.input.and_then(|i| i.datetime),
            suggestions,
        }
    }
}

/// Non-2xx becomes a ServerError carrying the body's `error` field when there is one.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> BhoomiResult<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v["error"].as_str().map(str::to_string));
        return Err(BhoomiError::Server(match detail {
            Some(msg) => format!("Service responded with status {}: {}", status, msg),
            None => format!("Service responded with status: {}", status),
        }));
    }
    Ok(resp.json::<T>().await?)
}

#[async_trait]
impl FarmServices for HttpFarmServices {
    fn base_url(&self) -> &str {
        &self.api_base_url
    }

    async fn predict(&self, request: &YieldRequest) -> BhoomiResult<f64> {
        tracing::debug!("POST /predict crop={} area={}", request.crop, request.area);
        let resp = self
            .client
            .post(self.url("/predict"))
            .json(request)
            .send()
            .await?;
        let body: PredictResponse = read_json(resp).await?;

        if let Some(err) = body.error {
            return Err(BhoomiError::Server(err));
        }
        body.predicted_production.ok_or_else(|| {
            BhoomiError::Server("Prediction response missing predicted_production".to_string())
        })
    }

    async fn current_weather(&self, city: &str) -> BhoomiResult<WeatherSnapshot> {
        let url = format!("{}?location={}", self.url("/weather"), urlencoding::encode(city));
        tracing::debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;
        read_json(resp).await
    }

    async fn active_alerts(&self) -> BhoomiResult<Vec<WeatherAlert>> {
        tracing::debug!("GET /alerts");
        let resp = self.client.get(self.url("/alerts")).send().await?;
        read_json(resp).await
    }

    async fn identify(&self, upload: ImageUpload) -> BhoomiResult<ClassificationResult> {
        tracing::debug!(
            "POST /identify file={} ({} bytes, {})",
            upload.file_name,
            upload.bytes.len(),
            upload.mime_type
        );
        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime_type)
            .map_err(|e| BhoomiError::validation(format!("Invalid image type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let resp = self
            .client
            .post(self.url("/identify"))
            .multipart(form)
            .send()
            .await?;
        let raw: RawIdentification = read_json(resp).await?;

        if let Some(err) = raw.error.clone() {
            return Err(BhoomiError::Server(err));
        }
        Ok(raw.into())
    }

    async fn ask(&self, prompt: &str) -> BhoomiResult<String> {
        tracing::debug!("POST /ask-gemini ({} chars)", prompt.len());
        let resp = self
            .client
            .post(self.url("/ask-gemini"))
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await?;
        let body: AskResponse = read_json(resp).await?;

        if let Some(err) = body.error {
            return Err(BhoomiError::Server(err));
        }
        Ok(body
            .response
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| "No response received from AI".to_string()))
    }

    async fn reverse_geocode(&self, lat: f64, lon: f64) -> BhoomiResult<Vec<GeoPlace>> {
        let key = self.geocoding_api_key.as_deref().ok_or_else(|| {
            BhoomiError::validation("Location detection is not configured (OPENWEATHER_API_KEY)")
        })?;
        let url = format!(
            "{}/geo/1.0/reverse?lat={}&lon={}&limit=1&appid={}",
            self.geocoding_base_url,
            lat,
            lon,
            urlencoding::encode(key)
        );
        tracing::debug!("GET {}/geo/1.0/reverse lat={} lon={}", self.geocoding_base_url, lat, lon);
        let resp = self.client.get(&url).send().await?;
        read_json(resp).await
    }
}
