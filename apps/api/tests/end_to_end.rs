//! Full stack: router → PosServiceImpl → SQLite (in memory), with a canned
//! OpenStreetMap source.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Router;
use campus_api::{router, AppState};
use campus_core::{CoreError, CoreResult, OsmDataService, OsmNode, PosServiceImpl};
use campus_db::{Database, DbConfig};
use serde_json::json;

use common::{get, pos_body, pos_body_with_id, post, put};

struct CannedOsm;

#[async_trait]
impl OsmDataService for CannedOsm {
    async fn fetch_node(&self, node_id: i64) -> CoreResult<OsmNode> {
        match node_id {
            5589879349 => Ok(OsmNode::new(node_id)
                .with_tag("amenity", "cafe")
                .with_tag("name", "Rada")
                .with_tag("addr:street", "Untere Straße")
                .with_tag("addr:housenumber", "21")
                .with_tag("addr:postcode", "69117")
                .with_tag("addr:city", "Heidelberg")),
            1 => Ok(OsmNode::new(node_id).with_tag("name", "Nameless street")),
            _ => Err(CoreError::OsmNodeNotFound(node_id)),
        }
    }
}

async fn app() -> Router {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let service = PosServiceImpl::new(Arc::new(db.pos()), Arc::new(CannedOsm));
    router(AppState::new(Arc::new(service)).with_database(db))
}

#[tokio::test]
async fn test_create_then_get_via_location() {
    let app = app().await;

    let created = post(&app, "/api/pos", pos_body("Schmelzpunkt")).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.location(), Some("/api/pos/1"));
    assert!(created.body["createdAt"].is_string());

    let fetched = get(&app, "/api/pos/1").await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

#[tokio::test]
async fn test_update_keeps_created_at() {
    let app = app().await;
    let created = post(&app, "/api/pos", pos_body("Café Botanik")).await;

    let mut body = pos_body_with_id(1, "Café Botanik");
    body["campus"] = json!("INF");
    body["type"] = json!("CAFETERIA");

    let first = put(&app, "/api/pos/1", body.clone()).await;
    let second = put(&app, "/api/pos/1", body).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["campus"], "INF");
    assert_eq!(second.body["type"], "CAFETERIA");
    assert_eq!(second.body["createdAt"], created.body["createdAt"]);

    let all = get(&app, "/api/pos").await;
    assert_eq!(all.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_absent_is_404() {
    let app = app().await;

    let resp = put(&app, "/api/pos/7", pos_body_with_id(7, "Ghost")).await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["message"], "POS with ID 7 does not exist.");
}

#[tokio::test]
async fn test_duplicate_name_is_409() {
    let app = app().await;
    post(&app, "/api/pos", pos_body("Rada")).await;

    let resp = post(&app, "/api/pos", pos_body("Rada")).await;

    assert_eq!(resp.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_validation_failure_is_400() {
    let app = app().await;
    let mut body = pos_body("Zero");
    body["postalCode"] = json!(0);

    let resp = post(&app, "/api/pos", body).await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["code"], "VALIDATION_ERROR");
    assert!(get(&app, "/api/pos").await.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_import_from_osm() {
    let app = app().await;

    let resp = post(&app, "/api/pos/import/osm/5589879349", json!("ALTSTADT")).await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body["name"], "Rada");
    assert_eq!(resp.body["type"], "CAFE");
    assert_eq!(resp.body["postalCode"], 69117);
    assert_eq!(resp.location(), Some("/api/pos/1"));

    let filtered = get(&app, "/api/pos/filter?name=rad").await;
    assert_eq!(filtered.status, StatusCode::OK);
    assert_eq!(filtered.body[0]["osmNodeId"], 5589879349_i64);
}

#[tokio::test]
async fn test_import_incomplete_node_is_400() {
    let app = app().await;

    let resp = post(&app, "/api/pos/import/osm/1", json!("INF")).await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body["message"].as_str().unwrap().contains("addr:street"));
}

#[tokio::test]
async fn test_import_unknown_node_is_404() {
    let app = app().await;

    let resp = post(&app, "/api/pos/import/osm/2", json!("INF")).await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_with_database() {
    let app = app().await;

    let resp = get(&app, "/health").await;

    assert_eq!(resp.status, StatusCode::OK);
}
