//! # OpenStreetMap Client
//!
//! Reads single nodes from the OSM API v0.6.
//!
//! ```text
//! OsmClient::fetch_node(42)
//!      │
//!      ▼
//! GET {base}/api/0.6/node/42.json
//!      │
//!      ├── 200 ──► { "elements": [ { "id": 42, "tags": {...} } ] } ──► OsmNode
//!      ├── 404 / 410 ──► CoreError::OsmNodeNotFound(42)
//!      └── other / network / bad JSON ──► CoreError::OsmUnavailable
//! ```

use std::time::Duration;

use async_trait::async_trait;
use campus_core::{CoreError, CoreResult, OsmDataService, OsmNode};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("campus-coffee/", env!("CARGO_PKG_VERSION"));

/// Envelope of the OSM JSON API.
#[derive(Debug, Deserialize)]
struct OsmResponse {
    #[serde(default)]
    elements: Vec<OsmNode>,
}

/// HTTP client for the OpenStreetMap API.
#[derive(Debug, Clone)]
pub struct OsmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsmClient {
    /// Creates a client for `base_url` (e.g. `https://www.openstreetmap.org`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(OsmClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn node_url(&self, node_id: i64) -> String {
        format!("{}/api/0.6/node/{}.json", self.base_url, node_id)
    }
}

#[async_trait]
impl OsmDataService for OsmClient {
    async fn fetch_node(&self, node_id: i64) -> CoreResult<OsmNode> {
        let url = self.node_url(node_id);
        debug!(%url, "Fetching OSM node");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CoreError::OsmUnavailable(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::GONE => {
                return Err(CoreError::OsmNodeNotFound(node_id));
            }
            status if !status.is_success() => {
                warn!(node_id, %status, "OSM API returned an error");
                return Err(CoreError::OsmUnavailable(format!(
                    "OSM API returned {status}"
                )));
            }
            _ => {}
        }

        let body: OsmResponse = response
            .json()
            .await
            .map_err(|e| CoreError::OsmUnavailable(format!("invalid OSM response: {e}")))?;

        body.elements
            .into_iter()
            .find(|node| node.node_id == node_id)
            .ok_or(CoreError::OsmNodeNotFound(node_id))
    }
}
