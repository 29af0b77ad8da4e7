//! # Domain Types
//!
//! Core domain types used throughout Campus Coffee.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Pos        │   │   CampusType    │   │    PosType      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  Altstadt       │   │  Cafe           │       │
//! │  │  name (unique)  │   │  Bergheim       │   │  Bakery         │       │
//! │  │  campus         │   │  Inf            │   │  VendingMachine │       │
//! │  │  address        │   │  Neuenheim      │   │  Cafeteria      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    OsmNode      │  ── Pos::from_osm_node(node, campus) ──► Pos       │
//! │  │  node_id, tags  │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is `None` until the persistence layer assigns one. The service
//! decides between create and update purely on its presence.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Campus Type
// =============================================================================

/// The campus a point of sale belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampusType {
    /// Old town campus.
    Altstadt,
    /// Bergheim campus.
    Bergheim,
    /// Im Neuenheimer Feld.
    Inf,
    /// Neuenheim (north bank).
    Neuenheim,
}

impl CampusType {
    /// All campus values, in declaration order.
    pub const ALL: [CampusType; 4] = [
        CampusType::Altstadt,
        CampusType::Bergheim,
        CampusType::Inf,
        CampusType::Neuenheim,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CampusType::Altstadt => "ALTSTADT",
            CampusType::Bergheim => "BERGHEIM",
            CampusType::Inf => "INF",
            CampusType::Neuenheim => "NEUENHEIM",
        }
    }
}

impl fmt::Display for CampusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// POS Type
// =============================================================================

/// What kind of point of sale this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosType {
    Cafe,
    Bakery,
    VendingMachine,
    Cafeteria,
}

impl PosType {
    /// Maps OSM `amenity` / `shop` values to a POS type.
    ///
    /// ```rust
    /// use campus_core::PosType;
    ///
    /// assert_eq!(PosType::from_osm_tag("bakery"), Some(PosType::Bakery));
    /// assert_eq!(PosType::from_osm_tag("bench"), None);
    /// ```
    pub fn from_osm_tag(value: &str) -> Option<Self> {
        match value {
            "cafe" | "coffee" => Some(PosType::Cafe),
            "bakery" => Some(PosType::Bakery),
            "vending_machine" => Some(PosType::VendingMachine),
            "cafeteria" | "canteen" | "restaurant" | "fast_food" => Some(PosType::Cafeteria),
            _ => None,
        }
    }
}

impl Default for PosType {
    fn default() -> Self {
        PosType::Cafe
    }
}

// =============================================================================
// Pos
// =============================================================================

/// A point of sale (a place on campus that sells coffee).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    /// Unique identifier, assigned by persistence. `None` before first save.
    pub id: Option<i64>,

    /// When the POS was first persisted.
    pub created_at: Option<DateTime<Utc>>,

    /// When the POS was last persisted.
    pub updated_at: Option<DateTime<Utc>>,

    /// Display name. Unique across all POS.
    pub name: String,

    /// Free-text description.
    pub description: String,

    pub pos_type: PosType,

    pub campus: CampusType,

    pub street: String,

    pub house_number: String,

    pub postal_code: u32,

    pub city: String,

    /// OpenStreetMap node this POS was imported from, if any.
    pub osm_node_id: Option<i64>,
}

impl Pos {
    /// Case-insensitive substring match on the name.
    ///
    /// ```rust
    /// # use campus_core::{CampusType, Pos, PosType};
    /// # let pos = Pos {
    /// #     id: None, created_at: None, updated_at: None,
    /// #     name: "Schmelzpunkt".into(), description: String::new(),
    /// #     pos_type: PosType::Cafe, campus: CampusType::Altstadt,
    /// #     street: "Hauptstraße".into(), house_number: "90".into(),
    /// #     postal_code: 69117, city: "Heidelberg".into(), osm_node_id: None,
    /// # };
    /// assert!(pos.name_contains("schmelz"));
    /// assert!(pos.name_contains("PUNKT"));
    /// assert!(!pos.name_contains("xyz"));
    /// ```
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(&fragment.to_lowercase())
    }

    /// Builds a new (unsaved) POS from an OpenStreetMap node.
    ///
    /// ## Tag Mapping
    /// ```text
    /// name              → name             (required)
    /// addr:street       → street           (required)
    /// addr:housenumber  → house_number     (required)
    /// addr:postcode     → postal_code      (required, numeric)
    /// addr:city         → city             (required)
    /// description       → description      (optional, default "")
    /// amenity | shop    → pos_type         (optional, default Cafe)
    /// ```
    ///
    /// Every missing or unparsable required tag is reported at once.
    pub fn from_osm_node(node: &OsmNode, campus: CampusType) -> CoreResult<Pos> {
        let mut missing = Vec::new();

        let mut required = |key: &str| -> String {
            match node.tag(key) {
                Some(value) => value.to_string(),
                None => {
                    missing.push(key.to_string());
                    String::new()
                }
            }
        };

        let name = required("name");
        let street = required("addr:street");
        let house_number = required("addr:housenumber");
        let postcode = required("addr:postcode");
        let city = required("addr:city");

        let postal_code = match postcode.parse::<u32>() {
            Ok(code) => Some(code),
            Err(_) => {
                if !postcode.is_empty() {
                    missing.push("addr:postcode".to_string());
                }
                None
            }
        };

        if !missing.is_empty() {
            return Err(CoreError::OsmNodeMissingFields {
                node_id: node.node_id,
                fields: missing,
            });
        }

        let pos_type = node
            .tag("amenity")
            .and_then(PosType::from_osm_tag)
            .or_else(|| node.tag("shop").and_then(PosType::from_osm_tag))
            .unwrap_or_default();

        Ok(Pos {
            id: None,
            created_at: None,
            updated_at: None,
            name,
            description: node.tag("description").unwrap_or_default().to_string(),
            pos_type,
            campus,
            street,
            house_number,
            postal_code: postal_code.unwrap_or_default(),
            city,
            osm_node_id: Some(node.node_id),
        })
    }
}

// =============================================================================
// OSM Node
// =============================================================================

/// A node as returned by the OpenStreetMap API (`/api/0.6/node/{id}.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsmNode {
    #[serde(rename = "id")]
    pub node_id: i64,

    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lon: Option<f64>,

    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl OsmNode {
    /// Creates a node without coordinates or tags.
    pub fn new(node_id: i64) -> Self {
        OsmNode {
            node_id,
            ..Default::default()
        }
    }

    /// Adds a tag (builder style).
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Returns a non-blank tag value.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rada_node() -> OsmNode {
        OsmNode::new(5589879349)
            .with_tag("name", "Rada Coffee & Rösterei")
            .with_tag("amenity", "cafe")
            .with_tag("addr:street", "Untere Straße")
            .with_tag("addr:housenumber", "21")
            .with_tag("addr:postcode", "69117")
            .with_tag("addr:city", "Heidelberg")
    }

    #[test]
    fn test_campus_wire_names() {
        assert_eq!(
            serde_json::to_string(&CampusType::Neuenheim).unwrap(),
            "\"NEUENHEIM\""
        );
        let campus: CampusType = serde_json::from_str("\"INF\"").unwrap();
        assert_eq!(campus, CampusType::Inf);
        assert!(serde_json::from_str::<CampusType>("\"MARS\"").is_err());
    }

    #[test]
    fn test_pos_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&PosType::VendingMachine).unwrap(),
            "\"VENDING_MACHINE\""
        );
    }

    #[test]
    fn test_from_osm_node() {
        let pos = Pos::from_osm_node(&rada_node(), CampusType::Altstadt).unwrap();

        assert_eq!(pos.id, None);
        assert_eq!(pos.name, "Rada Coffee & Rösterei");
        assert_eq!(pos.description, "");
        assert_eq!(pos.pos_type, PosType::Cafe);
        assert_eq!(pos.campus, CampusType::Altstadt);
        assert_eq!(pos.street, "Untere Straße");
        assert_eq!(pos.house_number, "21");
        assert_eq!(pos.postal_code, 69117);
        assert_eq!(pos.city, "Heidelberg");
        assert_eq!(pos.osm_node_id, Some(5589879349));
    }

    #[test]
    fn test_from_osm_node_uses_shop_tag() {
        let mut node = rada_node();
        node.tags.remove("amenity");
        let node = node.with_tag("shop", "bakery");

        let pos = Pos::from_osm_node(&node, CampusType::Bergheim).unwrap();
        assert_eq!(pos.pos_type, PosType::Bakery);
    }

    #[test]
    fn test_from_osm_node_reports_all_missing_fields() {
        let node = OsmNode::new(1)
            .with_tag("name", "  ")
            .with_tag("addr:street", "Im Neuenheimer Feld")
            .with_tag("addr:housenumber", "304")
            .with_tag("addr:postcode", "69a20");

        let err = Pos::from_osm_node(&node, CampusType::Inf).unwrap_err();
        match err {
            CoreError::OsmNodeMissingFields { node_id, fields } => {
                assert_eq!(node_id, 1);
                assert_eq!(fields, vec!["name", "addr:city", "addr:postcode"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let pos = Pos::from_osm_node(&rada_node(), CampusType::Altstadt).unwrap();
        assert!(pos.name_contains("rada"));
        assert!(pos.name_contains("RÖSTEREI"));
        assert!(pos.name_contains(""));
        assert!(!pos.name_contains("schmelz"));
    }
}
