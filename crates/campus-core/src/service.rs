//! # POS Service
//!
//! Default [`PosService`] implementation. Owns the create/update decision,
//! timestamps, validation and the OSM import flow; storage and network go
//! through the outbound ports.
//!
//! ## Upsert Flow
//! ```text
//! upsert(pos)
//!    │
//!    ▼
//! validate_pos ──✗──► CoreError::Validation
//!    │
//!    ├── id == None ──► created_at = updated_at = now ──► data.upsert (INSERT)
//!    │
//!    └── id == Some ──► data.get_by_id ──✗──► CoreError::PosNotFound
//!                            │
//!                            ▼
//!                  keep created_at, updated_at = now ──► data.upsert (UPDATE)
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::ports::{OsmDataService, PosDataService, PosService};
use crate::types::{CampusType, Pos};
use crate::validation::validate_pos;

/// The default POS service.
#[derive(Clone)]
pub struct PosServiceImpl {
    data: Arc<dyn PosDataService>,
    osm: Arc<dyn OsmDataService>,
}

impl PosServiceImpl {
    /// Creates a service over the given adapters.
    pub fn new(data: Arc<dyn PosDataService>, osm: Arc<dyn OsmDataService>) -> Self {
        PosServiceImpl { data, osm }
    }
}

#[async_trait]
impl PosService for PosServiceImpl {
    async fn clear(&self) -> CoreResult<()> {
        warn!("Clearing all POS data");
        self.data.clear().await
    }

    async fn get_all(&self) -> CoreResult<Vec<Pos>> {
        debug!("Retrieving all POS");
        self.data.get_all().await
    }

    async fn get_by_id(&self, id: i64) -> CoreResult<Pos> {
        debug!(id, "Retrieving POS");
        self.data
            .get_by_id(id)
            .await?
            .ok_or(CoreError::PosNotFound(id))
    }

    async fn upsert(&self, mut pos: Pos) -> CoreResult<Pos> {
        validate_pos(&pos)?;

        let now = Utc::now();
        match pos.id {
            None => {
                debug!(name = %pos.name, "Creating new POS");
                pos.created_at = Some(now);
            }
            Some(id) => {
                debug!(id, name = %pos.name, "Updating POS");
                let existing = self.get_by_id(id).await?;
                pos.created_at = existing.created_at.or(Some(now));
            }
        }
        pos.updated_at = Some(now);

        let saved = self.data.upsert(pos).await?;
        info!(id = ?saved.id, name = %saved.name, "POS saved");
        Ok(saved)
    }

    async fn import_from_osm_node(&self, node_id: i64, campus: CampusType) -> CoreResult<Pos> {
        info!(node_id, %campus, "Importing POS from OSM node");

        let node = self.osm.fetch_node(node_id).await?;
        let pos = Pos::from_osm_node(&node, campus)?;

        self.upsert(pos).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OsmNode, PosType};
    use std::sync::Mutex;

    /// In-memory stand-in for the SQLite repository.
    #[derive(Default)]
    struct MemoryData {
        rows: Mutex<Vec<Pos>>,
    }

    #[async_trait]
    impl PosDataService for MemoryData {
        async fn clear(&self) -> CoreResult<()> {
            self.rows.lock().unwrap().clear();
            Ok(())
        }

        async fn get_all(&self) -> CoreResult<Vec<Pos>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: i64) -> CoreResult<Option<Pos>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == Some(id))
                .cloned())
        }

        async fn upsert(&self, mut pos: Pos) -> CoreResult<Pos> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|p| p.name == pos.name && p.id != pos.id) {
                return Err(CoreError::DuplicatePosName(pos.name));
            }
            match pos.id {
                Some(id) => {
                    let slot = rows.iter_mut().find(|p| p.id == Some(id)).unwrap();
                    *slot = pos.clone();
                }
                None => {
                    pos.id = Some(rows.len() as i64 + 1);
                    rows.push(pos.clone());
                }
            }
            Ok(pos)
        }
    }

    struct FixedOsm(Option<OsmNode>);

    #[async_trait]
    impl OsmDataService for FixedOsm {
        async fn fetch_node(&self, node_id: i64) -> CoreResult<OsmNode> {
            self.0
                .clone()
                .filter(|n| n.node_id == node_id)
                .ok_or(CoreError::OsmNodeNotFound(node_id))
        }
    }

    fn service(osm: Option<OsmNode>) -> PosServiceImpl {
        PosServiceImpl::new(Arc::new(MemoryData::default()), Arc::new(FixedOsm(osm)))
    }

    fn new_pos(name: &str) -> Pos {
        Pos {
            id: None,
            created_at: None,
            updated_at: None,
            name: name.to_string(),
            description: "Coffee and cake".to_string(),
            pos_type: PosType::Cafe,
            campus: CampusType::Neuenheim,
            street: "Brückenstraße".to_string(),
            house_number: "1".to_string(),
            postal_code: 69120,
            city: "Heidelberg".to_string(),
            osm_node_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let svc = service(None);

        let created = svc.upsert(new_pos("Cafe A")).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert!(created.created_at.is_some());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(svc.get_by_id(1).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let svc = service(None);
        let created = svc.upsert(new_pos("Cafe A")).await.unwrap();

        let mut changed = created.clone();
        changed.description = "Now with bagels".to_string();
        changed.created_at = None;
        let updated = svc.upsert(changed.clone()).await.unwrap();
        let again = svc.upsert(changed).await.unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.description, "Now with bagels");
        assert_eq!(again.name, updated.name);
        assert_eq!(again.description, updated.description);
        assert_eq!(svc.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let svc = service(None);
        let mut pos = new_pos("Ghost");
        pos.id = Some(99);

        let err = svc.upsert(pos).await.unwrap_err();
        assert!(matches!(err, CoreError::PosNotFound(99)));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let svc = service(None);
        let err = svc.get_by_id(7).await.unwrap_err();
        assert!(matches!(err, CoreError::PosNotFound(7)));
    }

    #[tokio::test]
    async fn test_upsert_rejects_invalid_pos() {
        let svc = service(None);
        let err = svc.upsert(new_pos("")).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_import_from_osm_node() {
        let node = OsmNode::new(5589879349)
            .with_tag("name", "Rada Coffee & Rösterei")
            .with_tag("amenity", "cafe")
            .with_tag("addr:street", "Untere Straße")
            .with_tag("addr:housenumber", "21")
            .with_tag("addr:postcode", "69117")
            .with_tag("addr:city", "Heidelberg");
        let svc = service(Some(node));

        let pos = svc
            .import_from_osm_node(5589879349, CampusType::Altstadt)
            .await
            .unwrap();

        assert_eq!(pos.id, Some(1));
        assert_eq!(pos.campus, CampusType::Altstadt);
        assert_eq!(pos.osm_node_id, Some(5589879349));

        let err = svc
            .import_from_osm_node(5589879349, CampusType::Altstadt)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicatePosName(_)));
    }

    #[tokio::test]
    async fn test_import_unknown_node() {
        let svc = service(None);
        let err = svc
            .import_from_osm_node(1, CampusType::Inf)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::OsmNodeNotFound(1)));
    }

    #[tokio::test]
    async fn test_clear() {
        let svc = service(None);
        svc.upsert(new_pos("Cafe A")).await.unwrap();
        svc.upsert(new_pos("Cafe B")).await.unwrap();

        svc.clear().await.unwrap();
        assert!(svc.get_all().await.unwrap().is_empty());
    }
}
