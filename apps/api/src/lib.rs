//! # campus-api: REST API for Campus Coffee
//!
//! Exposes points of sale over HTTP under `/api/pos`.
//!
//! ## Module Organization
//! ```text
//! campus_api/
//! ├── config.rs      - ApiConfig from environment variables
//! ├── dto.rs         - PosDto (camelCase wire format)
//! ├── error.rs       - ApiError → HTTP status + JSON body
//! ├── osm.rs         - OsmClient (OsmDataService over reqwest)
//! └── routes/
//!     ├── mod.rs     - AppState, router, /health
//!     └── pos.rs     - /api/pos handlers
//! ```
//!
//! ## Wiring
//! ```rust,ignore
//! let db = Database::new(DbConfig::new("campus_coffee.db")).await?;
//! let osm = OsmClient::new("https://www.openstreetmap.org", Duration::from_secs(10))?;
//! let service = PosServiceImpl::new(Arc::new(db.pos()), Arc::new(osm));
//!
//! let app = campus_api::router(AppState::new(Arc::new(service)).with_database(db));
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod osm;
pub mod routes;

pub use config::{ApiConfig, ConfigError};
pub use dto::PosDto;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use osm::OsmClient;
pub use routes::{router, AppState};
