use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

pub const NETWORK_ERROR: &str = "Network Error: Could not connect to server";

/// Everything a dashboard operation can report back to the user.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum ApiError {
    /// Rejected before any network call.
    #[display(fmt = "{}", _0)]
    Validation(String),

    /// No response from the backend.
    #[display(fmt = "{}", _0)]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[display(fmt = "{}", message)]
    Http { status: u16, message: String },

    /// The backend answered 2xx but the body was not the expected shape.
    #[display(fmt = "Unexpected response from server: {}", _0)]
    Decode(String),

    #[display(fmt = "Session storage failed: {}", _0)]
    Storage(String),

    #[display(fmt = "{}", _0)]
    Forbidden(String),
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Builds the HTTP variant, preferring the body's `message` field.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .filter(|m| !m.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| Self::generic_message(status));

        ApiError::Http { status, message }
    }

    /// Shown when the backend's error body has no usable `message`.
    pub fn generic_message(status: u16) -> String {
        format!("Server Error: {status}")
    }

    /// The backend rejected our credentials or token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::from_response(status.as_u16(), "")
        } else {
            ApiError::Network(NETWORK_ERROR.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Storage(e.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Network(_) | ApiError::Decode(_) => StatusCode::BAD_GATEWAY,
            ApiError::Http { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
