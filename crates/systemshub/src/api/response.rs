//! JSON envelopes and the API error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

pub(crate) const ITEM_NOT_FOUND: &str = "System not found";
pub(crate) const ROUTE_NOT_FOUND: &str = "Route not found";
pub(crate) const INVALID_QUERY: &str = "Invalid query string";
pub(crate) const INTERNAL_ERROR: &str = "Internal server error";

/// `{success: true, data}` envelope.
#[derive(Debug, Serialize)]
pub(crate) struct DataEnvelope<T> {
    success: bool,
    data: T,
}

/// `{success: true, message, version}` envelope.
#[derive(Debug, Serialize)]
pub(crate) struct HealthEnvelope {
    success: bool,
    message: String,
    version: &'static str,
}

/// `{success: false, error}` envelope.
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: &'static str,
}

/// Serialize `data` into a 200 success envelope.
pub(crate) fn data_response<T: Serialize>(data: T) -> Result<Response, ApiError> {
    let body = serde_json::to_value(DataEnvelope {
        success: true,
        data,
    })
    .map_err(|e| ApiError::internal(format!("failed to serialize response: {e}")))?;
    Ok(Json(body).into_response())
}

pub(crate) fn health_response(site_name: &str) -> Response {
    Json(HealthEnvelope {
        success: true,
        message: format!("{site_name} API"),
        version: env!("CARGO_PKG_VERSION"),
    })
    .into_response()
}

/// Failures surfaced to API callers.
///
/// Every variant renders as `{success: false, error}` with a fixed message;
/// internal detail is logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The requested key matches no item.
    ItemNotFound,
    /// No route matches the request path.
    RouteNotFound,
    /// The query string couldn't be parsed.
    InvalidQuery,
    /// Anything unexpected. Carries detail for the log only.
    Internal(String),
}

impl ApiError {
    /// Create an internal error with log detail.
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ItemNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::InvalidQuery => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::ItemNotFound => ITEM_NOT_FOUND,
            Self::RouteNotFound => ROUTE_NOT_FOUND,
            Self::InvalidQuery => INVALID_QUERY,
            Self::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            error!(detail = %detail, "API error");
        }
        let body = ErrorEnvelope {
            success: false,
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
