use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    UpstreamUnavailable(String),
    #[error("Failed to save favorites: {0}")]
    Persistence(#[source] std::io::Error),
}

pub type MovieResult<T> = Result<T, MovieError>;

impl MovieError {
    pub fn validation(msg: impl Into<String>) -> Self {
        MovieError::Validation(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            MovieError::Validation(_) => StatusCode::BAD_REQUEST,
            // Duplicates are reported to clients as bad requests.
            MovieError::Conflict(_) => StatusCode::BAD_REQUEST,
            MovieError::NotFound(_) => StatusCode::NOT_FOUND,
            MovieError::Authentication(_) => StatusCode::UNAUTHORIZED,
            MovieError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            MovieError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to API clients. Persistence details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            MovieError::Persistence(_) => "Failed to save favorites".to_string(),
            other => other.to_string(),
        }
    }
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

impl IntoResponse for MovieError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            MovieError::Persistence(e) => error!(error = %e, "favorites write failed"),
            MovieError::UpstreamUnavailable(msg) | MovieError::Authentication(msg) => {
                warn!(status = status.as_u16(), "upstream error: {}", msg)
            }
            _ => {}
        }

        let body = ErrorBody {
            status_code: status.as_u16(),
            message: self.public_message(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
        };
        (status, Json(body)).into_response()
    }
}
