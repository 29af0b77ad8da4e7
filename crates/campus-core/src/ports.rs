//! # Ports
//!
//! Trait boundaries between the domain and the outside world.
//!
//! ```text
//! ┌───────────────┐   PosService    ┌────────────────┐  PosDataService  ┌───────────┐
//! │ HTTP handlers │ ──────────────► │ PosServiceImpl │ ───────────────► │ campus-db │
//! └───────────────┘                 └───────┬────────┘                  └───────────┘
//!                                           │ OsmDataService
//!                                           ▼
//!                                   ┌────────────────┐
//!                                   │   OsmClient    │
//!                                   └────────────────┘
//! ```
//!
//! All ports are object safe (`async_trait`) so they can be shared as
//! `Arc<dyn ...>` between request handlers.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{CampusType, OsmNode, Pos};

// =============================================================================
// Inbound Port
// =============================================================================

/// Domain operations on points of sale, consumed by the HTTP layer.
#[async_trait]
pub trait PosService: Send + Sync {
    /// Removes every POS.
    async fn clear(&self) -> CoreResult<()>;

    /// Returns all POS, ordered by identifier.
    async fn get_all(&self) -> CoreResult<Vec<Pos>>;

    /// Returns one POS or `CoreError::PosNotFound`.
    async fn get_by_id(&self, id: i64) -> CoreResult<Pos>;

    /// Creates (no id) or replaces (id present) a POS and returns the
    /// persisted state, including the assigned id.
    async fn upsert(&self, pos: Pos) -> CoreResult<Pos>;

    /// Creates a POS from an OpenStreetMap node tagged with `campus`.
    async fn import_from_osm_node(&self, node_id: i64, campus: CampusType) -> CoreResult<Pos>;
}

// =============================================================================
// Outbound Ports
// =============================================================================

/// Persistence of POS records.
#[async_trait]
pub trait PosDataService: Send + Sync {
    /// Deletes all records.
    async fn clear(&self) -> CoreResult<()>;

    /// All records, ascending id.
    async fn get_all(&self) -> CoreResult<Vec<Pos>>;

    /// `Ok(None)` when no record has this id.
    async fn get_by_id(&self, id: i64) -> CoreResult<Option<Pos>>;

    /// Inserts when `pos.id` is `None`, otherwise updates in place.
    async fn upsert(&self, pos: Pos) -> CoreResult<Pos>;
}

/// Read access to OpenStreetMap.
#[async_trait]
pub trait OsmDataService: Send + Sync {
    /// Fetches a node or fails with `CoreError::OsmNodeNotFound`.
    async fn fetch_node(&self, node_id: i64) -> CoreResult<OsmNode>;
}
