//! CORS and request-boundary middleware.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, Instrument};

use super::response::ApiError;
use super::AppState;

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Answers preflight requests and stamps CORS headers on every response.
pub(crate) async fn cors_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        state.cors_origin().clone(),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}

/// Runs the rest of the stack in its own task so a panicking handler
/// becomes a logged 500 instead of a dropped connection.
pub(crate) async fn request_boundary_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let span = tracing::debug_span!("http.request", method = %method, path = %path);

    match tokio::spawn(next.run(request).instrument(span)).await {
        Ok(response) => {
            debug!(
                method = %method,
                path = %path,
                status = response.status().as_u16(),
                "Handled request"
            );
            response
        }
        Err(err) => {
            ApiError::internal(format!("{method} {path}: handler failed: {err}")).into_response()
        }
    }
}
