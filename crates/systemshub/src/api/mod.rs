//! Read-only HTTP API over the catalogue.
//!
//! | Method  | Path              | Response                               |
//! |---------|-------------------|----------------------------------------|
//! | OPTIONS | any               | 204, empty                             |
//! | GET     | `/items`          | `{success, data: [Item]}` (`?tag=` filters) |
//! | GET     | `/items?<bad>`    | 400 `Invalid query string`             |
//! | GET     | `/items/{key}`    | `{success, data: Item}` or 404         |
//! | GET     | `/health`, `/`    | `{success, message, version}`          |
//! | GET     | anything else     | 404 `Route not found`                  |
//!
//! Every response carries CORS headers. A failing or panicking handler is
//! logged and answered with a generic 500.

mod handlers;
mod middleware;
mod response;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::catalogue::Catalogue;
use crate::config::Config;
use crate::error::{Error, Result};

pub use response::ApiError;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    catalogue: Arc<Catalogue>,
    cors_origin: HeaderValue,
}

impl AppState {
    /// Create state over an existing catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if `cors_origin` is not a valid header value.
    pub fn new(catalogue: Arc<Catalogue>, cors_origin: &str) -> Result<Self> {
        let cors_origin = HeaderValue::from_str(cors_origin).map_err(|_| {
            Error::config_validation(format!("invalid CORS origin: {cors_origin:?}"))
        })?;
        Ok(Self {
            catalogue,
            cors_origin,
        })
    }

    /// Build the catalogue and state described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue or CORS origin is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(Arc::new(config.catalogue()?), &config.server.cors_origin)
    }

    /// The catalogue being served.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub(crate) fn cors_origin(&self) -> &HeaderValue {
        &self.cors_origin
    }
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::health_handler))
        .route("/health", get(handlers::health_handler))
        .route("/items", get(handlers::list_items_handler))
        .route("/items/", get(handlers::list_items_handler))
        .route("/items/:key", get(handlers::item_handler));
    with_layers(routes, state)
}

fn with_layers(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .fallback(handlers::route_not_found_handler)
        .layer(from_fn(middleware::request_boundary_middleware))
        .layer(from_fn_with_state(state.clone(), middleware::cors_middleware))
        .with_state(state)
}

/// Bind a listener on `addr`.
///
/// # Errors
///
/// Returns [`Error::Bind`] if the address can't be bound.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|source| Error::Bind {
        addr: addr.to_string(),
        source,
    })
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        %addr,
        items = state.catalogue().len(),
        "Serving {} API",
        state.catalogue().site().name
    );
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}
