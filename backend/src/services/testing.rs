use super::FarmServices;
use crate::error::{BhoomiError, BhoomiResult};
use crate::models::{
    AlertSeverity, ClassificationResult, CurrentWeather, ForecastDay, GeoPlace, ImageUpload,
    SpeciesCandidate, WeatherAlert, WeatherSnapshot, YieldRequest,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory stand-in for the external services. Records every call.
#[derive(Default)]
pub struct FakeServices {
    pub predict_error: Option<String>,
    pub weather_down: bool,
    pub alerts_down: bool,
    pub assistant_down: bool,
    pub assistant_error: Option<String>,
    pub(crate) calls: AtomicUsize,
    pub(crate) prompts: Mutex<Vec<String>>,
    pub(crate) cities: Mutex<Vec<String>>,
}

impl FakeServices {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    pub fn weather_cities(&self) -> Vec<String> {
        self.cities.lock().unwrap().clone()
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn sample_snapshot(city: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        location: city.to_string(),
        current: CurrentWeather {
            temperature: Some(31.0),
            humidity: Some(68.0),
            wind_speed: Some(11.0),
            visibility: Some(9.0),
            condition: "Light Rain".into(),
            icon: "rain".into(),
        },
        forecast: vec![
            ForecastDay {
                day: "Today".into(),
                high: Some(33.0),
                low: Some(25.0),
                precipitation: Some(8.0),
                condition: "Light Rain".into(),
                icon: "rain".into(),
            },
            ForecastDay {
                day: "Tomorrow".into(),
                high: Some(35.0),
                low: Some(26.0),
                precipitation: Some(0.0),
                condition: "Sunny".into(),
                icon: "sunny".into(),
            },
        ],
    }
}

pub fn sample_alerts() -> Vec<WeatherAlert> {
    vec![
        WeatherAlert {
            id: serde_json::json!(1),
            severity: AlertSeverity::Severe,
            title: "Heavy Rainfall Warning".into(),
            description: "Heavy to very heavy rainfall expected".into(),
            duration: "Next 48 hours".into(),
            timestamp: "2 hours ago".into(),
            impact: "Harvesting may be delayed".into(),
        },
        WeatherAlert {
            id: serde_json::json!(2),
            severity: AlertSeverity::Mild,
            title: "High Humidity".into(),
            description: "Humidity above 80% in the mornings".into(),
            duration: "3 days".into(),
            timestamp: "5 hours ago".into(),
            impact: "Watch for fungal disease".into(),
        },
    ]
}

fn candidate(id: &str, name: &str, probability: f64) -> SpeciesCandidate {
    SpeciesCandidate {
        id: id.into(),
        name: name.into(),
        probability,
        similar_images: Vec::new(),
    }
}

#[async_trait]
impl FarmServices for FakeServices {
    fn base_url(&self) -> &str {
        "http://fake.bhoomi"
    }

    async fn predict(&self, _request: &YieldRequest) -> BhoomiResult<f64> {
        self.record();
        match &self.predict_error {
            Some(err) => Err(BhoomiError::Server(err.clone())),
            None => Ok(42.0),
        }
    }

    async fn current_weather(&self, city: &str) -> BhoomiResult<WeatherSnapshot> {
        self.record();
        self.cities.lock().unwrap().push(city.to_string());
        if self.weather_down {
            return Err(BhoomiError::Network("connection refused".into()));
        }
        Ok(sample_snapshot(city))
    }

    async fn active_alerts(&self) -> BhoomiResult<Vec<WeatherAlert>> {
        self.record();
        if self.alerts_down {
            return Err(BhoomiError::Network("connection refused".into()));
        }
        Ok(sample_alerts())
    }

    async fn identify(&self, _upload: ImageUpload) -> BhoomiResult<ClassificationResult> {
        self.record();
        Ok(ClassificationResult {
            model_version: Some("insect_id:fake".into()),
            analysed_at: Some("2024-03-01T10:00:00+00:00".into()),
            suggestions: vec![
                candidate("s1", "Spodoptera frugiperda", 0.64),
                candidate("s2", "Helicoverpa armigera", 1.3),
                candidate("s3", "Aphis gossypii", -0.2),
            ],
        })
    }

    async fn ask(&self, prompt: &str) -> BhoomiResult<String> {
        self.record();
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.assistant_down {
            return Err(BhoomiError::Network("connection refused".into()));
        }
        if let Some(err) = &self.assistant_error {
            return Err(BhoomiError::Server(err.clone()));
        }
        Ok("Sow wheat between late October and mid November.".into())
    }

    async fn reverse_geocode(&self, _lat: f64, _lon: f64) -> BhoomiResult<Vec<GeoPlace>> {
        self.record();
        Ok(vec![GeoPlace {
            name: "Bareilly".into(),
            state: Some("Uttar Pradesh".into()),
            country: Some("IN".into()),
        }])
    }
}
