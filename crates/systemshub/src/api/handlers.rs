//! Request handlers for the catalogue routes.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::Response;
use serde::Deserialize;
use tracing::debug;

use super::response::{data_response, health_response, ApiError};
use super::AppState;
use crate::catalogue::is_valid_key;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    tag: Option<String>,
}

pub(crate) async fn list_items_handler(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        debug!(error = %rejection, "Rejected query string");
        ApiError::InvalidQuery
    })?;

    let catalogue = state.catalogue();
    match query.tag.as_deref().filter(|tag| !tag.is_empty()) {
        Some(tag) => {
            let items = catalogue.with_tag(tag);
            debug!(tag, count = items.len(), "Listing items by tag");
            data_response(items)
        }
        None => data_response(catalogue.list_all()),
    }
}

pub(crate) async fn item_handler(
    State(state): State<AppState>,
    uri: Uri,
    key: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    // Match on the raw segment: percent-encoded or non-URL-safe keys can't
    // name an item, so the path doesn't address the item route at all.
    let raw = uri.path().rsplit('/').next().unwrap_or_default();
    let Ok(Path(key)) = key else {
        return Err(ApiError::RouteNotFound);
    };
    if !is_valid_key(raw) || raw != key {
        return Err(ApiError::RouteNotFound);
    }

    let item = state
        .catalogue()
        .get_by_key(&key)
        .ok_or(ApiError::ItemNotFound)?;
    data_response(item)
}

pub(crate) async fn health_handler(State(state): State<AppState>) -> Response {
    health_response(&state.catalogue().site().name)
}

pub(crate) async fn route_not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}
