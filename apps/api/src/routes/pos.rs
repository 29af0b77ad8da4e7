//! # POS Endpoints
//!
//! HTTP handlers for `/api/pos`.
//!
//! ## Create vs. Update
//! ```text
//! POST /api/pos ─────────────┐
//!                            ├──► upsert(dto) ──► PosService::upsert ──► PosDto
//! PUT  /api/pos/{id} ──┐     │
//!                      │     │
//!        path id == body id? ┘
//!                      │ no
//!                      ▼
//!          400 INVALID_ARGUMENT (service never called)
//! ```
//!
//! The service alone decides between insert and update, based on whether
//! the DTO carries an id.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use campus_core::validation::validate_name_filter;
use campus_core::{CampusType, CoreError, PosService};
use serde::Deserialize;
use tracing::{debug, info};

use super::AppState;
use crate::dto::PosDto;
use crate::error::{ApiError, ApiResult};

/// Mount point of the POS resource.
pub const BASE_PATH: &str = "/api/pos";

/// Message returned when `PUT /api/pos/{id}` carries a different body id.
pub const ID_MISMATCH_MESSAGE: &str = "POS ID in path and body do not match.";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/filter", get(filter_by_name))
        .route("/import/osm/{node_id}", post(create_from_osm_node))
        .route("/{id}", get(get_by_id).put(update))
}

/// `Location` of a persisted POS.
pub fn location(id: i64) -> String {
    format!("{BASE_PATH}/{id}")
}

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub name: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /api/pos`
async fn get_all(State(state): State<AppState>) -> ApiResult<Json<Vec<PosDto>>> {
    debug!("Listing all POS");

    let all = state.pos_service.get_all().await?;
    Ok(Json(all.into_iter().map(PosDto::from).collect()))
}

/// `GET /api/pos/{id}`
async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<PosDto>> {
    let Path(id) = path?;
    debug!(id, "Getting POS by ID");

    let pos = state.pos_service.get_by_id(id).await?;
    Ok(Json(pos.into()))
}

/// `GET /api/pos/filter?name=<fragment>`
async fn filter_by_name(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> ApiResult<Json<Vec<PosDto>>> {
    let Query(FilterParams { name }) = query?;
    let fragment = validate_name_filter(&name)?;

    info!(name = %fragment, "Filtering POS by name");

    let matches: Vec<PosDto> = state
        .pos_service
        .get_all()
        .await?
        .into_iter()
        .filter(|pos| pos.name_contains(fragment))
        .map(PosDto::from)
        .collect();

    if matches.is_empty() {
        return Err(CoreError::PosNameNotFound(fragment.to_string()).into());
    }

    info!(name = %fragment, count = matches.len(), "Found POS");
    Ok(Json(matches))
}

/// `POST /api/pos`
async fn create(
    State(state): State<AppState>,
    body: Result<Json<PosDto>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(dto) = body?;

    let created = upsert(state.pos_service.as_ref(), dto).await?;
    Ok(created_response(created))
}

/// `POST /api/pos/import/osm/{nodeId}` with a JSON campus string as body.
async fn create_from_osm_node(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<CampusType>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(node_id) = path?;
    let Json(campus) = body?;

    info!(node_id, %campus, "Importing POS from OpenStreetMap");

    let imported = state
        .pos_service
        .import_from_osm_node(node_id, campus)
        .await?;
    Ok(created_response(imported.into()))
}

/// `PUT /api/pos/{id}`
async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<PosDto>, JsonRejection>,
) -> ApiResult<Json<PosDto>> {
    let Path(id) = path?;
    let Json(dto) = body?;

    if dto.id != Some(id) {
        debug!(path_id = id, body_id = ?dto.id, "Rejecting update with mismatched ids");
        return Err(ApiError::invalid_argument(ID_MISMATCH_MESSAGE));
    }

    Ok(Json(upsert(state.pos_service.as_ref(), dto).await?))
}

// =============================================================================
// Helpers
// =============================================================================

/// Shared create/update path.
async fn upsert(service: &dyn PosService, dto: PosDto) -> ApiResult<PosDto> {
    let saved = service.upsert(dto.into_domain()).await?;
    Ok(saved.into())
}

fn created_response(dto: PosDto) -> impl IntoResponse {
    let headers = dto.id.map(|id| [(header::LOCATION, location(id))]);
    (StatusCode::CREATED, headers, Json(dto))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location() {
        assert_eq!(location(7), "/api/pos/7");
    }
}
