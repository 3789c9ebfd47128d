use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// The three failure kinds a caller ever sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    ValidationError,
    NetworkError,
    ServerError,
}

#[derive(Error, Debug)]
pub enum BhoomiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Server(String),

    #[error("A newer request replaced this one")]
    Superseded,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BhoomiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BhoomiError::Validation(_) => ErrorKind::ValidationError,
            BhoomiError::Network(_) | BhoomiError::Superseded => ErrorKind::NetworkError,
            BhoomiError::Server(_)
            | BhoomiError::Json(_)
            | BhoomiError::Io(_)
            | BhoomiError::Internal(_) => ErrorKind::ServerError,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        BhoomiError::Validation(msg.into())
    }
}

// Status and decode failures mean the service answered; anything else never reached it.
impl From<reqwest::Error> for BhoomiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            BhoomiError::Server(format!("Service responded with status: {}", status))
        } else if e.is_decode() {
            BhoomiError::Server(format!("Malformed response from service: {}", e))
        } else {
            BhoomiError::Network(format!("Failed to reach service: {}", e))
        }
    }
}

impl Serialize for BhoomiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type BhoomiResult<T> = Result<T, BhoomiError>;

/// Error half of a discriminated result, kept by view state after a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionError {
    pub error_kind: ErrorKind,
    pub message: String,
}

impl From<&BhoomiError> for ActionError {
    fn from(e: &BhoomiError) -> Self {
        ActionError {
            error_kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// `{ ok: true, data }` or `{ ok: false, errorKind, message }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Success { ok: bool, data: T },
    Failure {
        ok: bool,
        #[serde(flatten)]
        error: ActionError,
    },
}

impl<T> From<BhoomiResult<T>> for Outcome<T> {
    fn from(result: BhoomiResult<T>) -> Self {
        match result {
            Ok(data) => Outcome::Success { ok: true, data },
            Err(e) => Outcome::Failure {
                ok: false,
                error: ActionError::from(&e),
            },
        }
    }
}

impl IntoResponse for BhoomiError {
    fn into_response(self) -> Response {
        let status = match self {
            BhoomiError::Validation(_) => StatusCode::BAD_REQUEST,
            BhoomiError::Network(ref msg) => {
                tracing::warn!("Network error: {}", msg);
                StatusCode::BAD_GATEWAY
            }
            BhoomiError::Server(ref msg) => {
                tracing::warn!("Upstream error: {}", msg);
                StatusCode::BAD_GATEWAY
            }
            BhoomiError::Superseded => StatusCode::CONFLICT,
            _ => {
                tracing::error!("Unhandled error: {:?}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body: Outcome<()> = Outcome::Failure {
            ok: false,
            error: ActionError::from(&self),
        };
        (status, Json(body)).into_response()
    }
}
