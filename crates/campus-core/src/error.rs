//! # Error Types
//!
//! Domain-specific error types for campus-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  campus-core errors (this file)                                        │
//! │  ├── CoreError        - Domain errors returned by every port           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  campus-db errors (separate crate)                                     │
//! │  └── DbError          - Database failures, folded into CoreError       │
//! │                                                                         │
//! │  campus-api errors (in app)                                            │
//! │  └── ApiError         - Code + message, mapped to an HTTP status       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP response          │
//! │        DbError ────────↗                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors.
///
/// Every port (`PosService`, `PosDataService`, `OsmDataService`) returns
/// these, so the HTTP layer only has one error type to translate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No POS with the given identifier.
    #[error("POS with ID {0} does not exist.")]
    PosNotFound(i64),

    /// A name filter matched nothing.
    #[error("No POS with name containing '{0}'.")]
    PosNameNotFound(String),

    /// Another POS already uses this name.
    #[error("POS with name '{0}' already exists.")]
    DuplicatePosName(String),

    /// The OpenStreetMap node does not exist (or was deleted).
    #[error("OSM node {0} not found.")]
    OsmNodeNotFound(i64),

    /// The OpenStreetMap node lacks tags needed to build a POS.
    ///
    /// ## When This Occurs
    /// ```text
    /// import/osm/42 ──► node 42 has no "addr:street" tag
    ///       │
    ///       ▼
    /// OsmNodeMissingFields { node_id: 42, fields: ["addr:street"] }
    /// ```
    #[error("OSM node {node_id} is missing required fields: {}", fields.join(", "))]
    OsmNodeMissingFields { node_id: i64, fields: Vec<String> },

    /// The OpenStreetMap API could not be reached or returned garbage.
    #[error("OSM service unavailable: {0}")]
    OsmUnavailable(String),

    /// Persistence failure that has no domain meaning.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before anything is persisted.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
