//! # Validation Module
//!
//! Input validation for POS data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP (axum extractors)                                       │
//! │  ├── JSON shape, enum names, numeric types                             │
//! │  └── Rejected with 400/422 before any handler runs                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: PosServiceImpl::upsert                                       │
//! │  └── THIS MODULE: required fields, lengths, ranges                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE (name)                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::Pos;
use crate::{MAX_FILTER_LENGTH, MAX_NAME_LENGTH, MAX_POSTAL_CODE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a POS name.
///
/// ## Rules
/// - Must not be blank
/// - At most 255 characters
///
/// ## Example
/// ```rust
/// use campus_core::validation::validate_pos_name;
///
/// assert!(validate_pos_name("Schmelzpunkt").is_ok());
/// assert!(validate_pos_name("   ").is_err());
/// ```
pub fn validate_pos_name(name: &str) -> ValidationResult<()> {
    require("name", name)?;

    if name.trim().chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a name filter fragment.
///
/// Can be empty (matches everything). Returns the fragment unchanged;
/// whitespace is significant for substring matching.
pub fn validate_name_filter(fragment: &str) -> ValidationResult<&str> {
    if fragment.chars().count() > MAX_FILTER_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_FILTER_LENGTH,
        });
    }

    Ok(fragment)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a postal code (1..=99999).
pub fn validate_postal_code(code: u32) -> ValidationResult<()> {
    if code == 0 || code > MAX_POSTAL_CODE {
        return Err(ValidationError::OutOfRange {
            field: "postalCode".to_string(),
            min: 1,
            max: MAX_POSTAL_CODE as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validator
// =============================================================================

/// Validates every field of a POS before it is persisted.
///
/// Stops at the first violation.
pub fn validate_pos(pos: &Pos) -> ValidationResult<()> {
    validate_pos_name(&pos.name)?;
    require("street", &pos.street)?;
    require("houseNumber", &pos.house_number)?;
    validate_postal_code(pos.postal_code)?;
    require("city", &pos.city)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
