use serde::Deserialize;
use thiserror::Error;

use super::transport::HttpResponse;

/// Failure of a backend call
///
/// Every variant displays as the message meant for the user; 4xx and 5xx
/// responses are not told apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Non-2xx response
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response
    #[error("Error de red: {0}")]
    Network(String),

    /// A 2xx response whose body is not the expected JSON
    #[error("Respuesta inválida: {0}")]
    Decode(String),

    /// The operation does not exist for the entity type
    #[error("{0}")]
    Unsupported(String),
}

/// Error body sent by the backend: `{"error": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl RequestError {
    /// Build the error for a non-success response.
    ///
    /// Uses the backend `error` field when the body carries a non-empty one,
    /// otherwise `"Error: {status} {status_text}"`.
    pub fn from_response(response: &HttpResponse) -> Self {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.error)
            .filter(|error| !error.is_empty())
            .unwrap_or_else(|| {
                format!("Error: {} {}", response.status, response.status_text)
            });

        RequestError::Status {
            status: response.status,
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
