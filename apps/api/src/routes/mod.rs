//! # HTTP Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Route Table                                                            │
//! │                                                                         │
//! │  GET   /health                         → health                         │
//! │  GET   /api/pos                        → pos::get_all                   │
//! │  POST  /api/pos                        → pos::create                    │
//! │  GET   /api/pos/filter?name=..         → pos::filter_by_name            │
//! │  POST  /api/pos/import/osm/{nodeId}    → pos::create_from_osm_node      │
//! │  GET   /api/pos/{id}                   → pos::get_by_id                 │
//! │  PUT   /api/pos/{id}                   → pos::update                    │
//! │                                                                         │
//! │  Every request runs inside a tower-http TraceLayer span.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod pos;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use campus_core::PosService;
use campus_db::Database;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub pos_service: Arc<dyn PosService>,

    /// Probed by `/health`; absent when the service is not database backed.
    pub database: Option<Database>,
}

impl AppState {
    pub fn new(pos_service: Arc<dyn PosService>) -> Self {
        AppState {
            pos_service,
            database: None,
        }
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }
}

/// Builds the complete application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest(pos::BASE_PATH, pos::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let healthy = match &state.database {
        Some(db) => db.health_check().await,
        None => true,
    };

    if healthy {
        (StatusCode::OK, "ok")
    } else {
        warn!("Health check failed: database unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "database unavailable")
    }
}
