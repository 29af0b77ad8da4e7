//! Wire representation of a POS.

use campus_core::{CampusType, Pos, PosType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// POS as sent and received over HTTP.
///
/// `createdAt` and `updatedAt` are output only; values sent by clients are
/// dropped in [`PosDto::into_domain`].
///
/// ```json
/// {
///   "id": 1,
///   "createdAt": "2026-10-19T08:00:00Z",
///   "updatedAt": "2026-10-19T08:00:00Z",
///   "name": "Schmelzpunkt",
///   "description": "Great waffles",
///   "type": "CAFE",
///   "campus": "ALTSTADT",
///   "street": "Hauptstraße",
///   "houseNumber": "90",
///   "postalCode": 69117,
///   "city": "Heidelberg"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type")]
    pub pos_type: PosType,

    pub campus: CampusType,

    pub street: String,

    pub house_number: String,

    pub postal_code: u32,

    pub city: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_node_id: Option<i64>,
}

impl PosDto {
    /// Converts to the domain type, discarding client-supplied timestamps.
    pub fn into_domain(self) -> Pos {
        Pos {
            id: self.id,
            created_at: None,
            updated_at: None,
            name: self.name,
            description: self.description,
            pos_type: self.pos_type,
            campus: self.campus,
            street: self.street,
            house_number: self.house_number,
            postal_code: self.postal_code,
            city: self.city,
            osm_node_id: self.osm_node_id,
        }
    }
}

impl From<Pos> for PosDto {
    fn from(pos: Pos) -> Self {
        PosDto {
            id: pos.id,
            created_at: pos.created_at,
            updated_at: pos.updated_at,
            name: pos.name,
            description: pos.description,
            pos_type: pos.pos_type,
            campus: pos.campus,
            street: pos.street,
            house_number: pos.house_number,
            postal_code: pos.postal_code,
            city: pos.city,
            osm_node_id: pos.osm_node_id,
        }
    }
}
