use thiserror::Error;

use crate::services::qr::FactorizationError;
use crate::services::validator::ValidationError;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("QR factorization failed: {0}")]
    Factorization(#[from] FactorizationError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Json(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Remedy shown to API clients next to the error text
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Unauthorized(_) => {
                Some("send the header Authorization: Bearer <token> with a non-empty token")
            }
            _ => None,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

// Conversion from reqwest::Error
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

// Convert to HTTP status codes for API responses
#[cfg(feature = "server")]
impl From<&Error> for axum::http::StatusCode {
    fn from(err: &Error) -> Self {
        use axum::http::StatusCode;
        match err {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Json(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Factorization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(feature = "server")]
impl From<Error> for axum::http::StatusCode {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from(&self);
        let mut body = crate::types::api::ErrorResponse::new(self.to_string());
        if let Some(hint) = self.hint() {
            body = body.with_message(hint);
        }
        (status, axum::Json(body)).into_response()
    }
}
