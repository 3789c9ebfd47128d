use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5050;
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_GEOCODING_BASE_URL: &str = "https://api.openweathermap.org";
const DEFAULT_LOCATION: &str = "Bareilly, UP";
const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Host serving /predict, /weather, /alerts, /identify and /ask-gemini.
    pub api_base_url: String,
    pub geocoding_base_url: String,
    pub geocoding_api_key: Option<String>,
    pub default_location: String,
    /// `None` keeps requests open until the service answers.
    pub request_timeout: Option<Duration>,
    pub jwt_secret: Option<Vec<u8>>,
    /// Upper bound on sessions with retained view state.
    pub max_sessions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
            geocoding_api_key: None,
            default_location: DEFAULT_LOCATION.to_string(),
            request_timeout: None,
            jwt_secret: None,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let request_timeout = non_empty("BHOOMI_REQUEST_TIMEOUT_SECS").and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    tracing::warn!("BHOOMI_REQUEST_TIMEOUT_SECS '{}' ignored", raw);
                    None
                }
            }
        });

        let max_sessions = match non_empty("BHOOMI_MAX_SESSIONS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!("BHOOMI_MAX_SESSIONS '{}' ignored", raw);
                    defaults.max_sessions
                }
            },
            None => defaults.max_sessions,
        };

        Self {
            port,
            api_base_url: non_empty("BHOOMI_API_BASE_URL")
                .map(|u| normalize_base_url(&u))
                .unwrap_or(defaults.api_base_url),
            geocoding_base_url: non_empty("BHOOMI_GEOCODING_BASE_URL")
                .map(|u| normalize_base_url(&u))
                .unwrap_or(defaults.geocoding_base_url),
            geocoding_api_key: non_empty("OPENWEATHER_API_KEY").map(|k| k.trim().to_string()),
            default_location: non_empty("BHOOMI_DEFAULT_LOCATION")
                .map(|l| l.trim().to_string())
                .unwrap_or(defaults.default_location),
            request_timeout,
            jwt_secret: non_empty("JWT_SECRET").map(String::into_bytes),
            max_sessions,
        }
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
