//! # campus-core: Pure Domain Logic for Campus Coffee
//!
//! This crate is the **heart** of the Campus Coffee backend. It holds the
//! point-of-sale domain model and the service that owns its rules.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Campus Coffee Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 campus-api (axum, /api/pos)                     │   │
//! │  │     list ─ get ─ filter ─ create ─ import ─ update              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dyn PosService                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ campus-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   ports   │  │  service  │  │ validation│  │   │
//! │  │   │    Pos    │  │PosService │  │PosService │  │   rules   │  │   │
//! │  │   │ CampusType│  │ DataSvc   │  │   Impl    │  │           │  │   │
//! │  │   │  OsmNode  │  │ OsmSvc    │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO DATABASE • NO NETWORK • I/O ONLY THROUGH PORTS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │              │                                   │                      │
//! │  ┌───────────▼───────────┐         ┌─────────────▼─────────────┐       │
//! │  │ campus-db (SQLite)    │         │ OsmClient (reqwest, api)  │       │
//! │  │ impl PosDataService   │         │ impl OsmDataService       │       │
//! │  └───────────────────────┘         └───────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Pos, CampusType, PosType, OsmNode)
//! - [`ports`] - Trait boundaries to the HTTP layer and the adapters
//! - [`service`] - `PosServiceImpl`, the default `PosService`
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use campus_core::{CampusType, OsmNode, Pos, PosType};
//!
//! let node = OsmNode::new(5589879349)
//!     .with_tag("name", "Rada Coffee & Rösterei")
//!     .with_tag("amenity", "cafe")
//!     .with_tag("addr:street", "Untere Straße")
//!     .with_tag("addr:housenumber", "21")
//!     .with_tag("addr:postcode", "69117")
//!     .with_tag("addr:city", "Heidelberg");
//!
//! let pos = Pos::from_osm_node(&node, CampusType::Altstadt).unwrap();
//! assert_eq!(pos.pos_type, PosType::Cafe);
//! assert_eq!(pos.osm_node_id, Some(5589879349));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ports;
pub mod service;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use ports::{OsmDataService, PosDataService, PosService};
pub use service::PosServiceImpl;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a POS name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a name filter fragment.
pub const MAX_FILTER_LENGTH: usize = 100;

/// Highest valid postal code (German five-digit codes).
pub const MAX_POSTAL_CODE: u32 = 99_999;
