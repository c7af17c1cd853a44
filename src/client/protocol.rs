//! Engine Wire Protocol
//!
//! Deserialization targets for the Elasticsearch response bodies this crate
//! consumes. Only the fields the bridge actually reads are modeled; everything
//! else the engine returns (scores, shard stats, timings) is ignored by serde.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level envelope of a `_search` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsEnvelope,
}

/// The engine's doubly nested `hits` structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct HitsEnvelope {
    pub hits: Vec<Hit>,
}

/// A single matched document.
///
/// `_source` carries the stored field/value pairs exactly as indexed, in the
/// order the engine returns them (which is not necessarily schema order).
#[derive(Debug, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "_source")]
    pub source: Map<String, Value>,
}

/// Acknowledgment for index creation and deletion requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexAck {
    pub acknowledged: bool,
}

/// Acknowledgment for a single document indexing request.
///
/// `result` is the engine's verb for what happened ("created" or "updated" —
/// re-indexing an existing identifier overwrites the stored document).
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentAck {
    #[serde(rename = "_id")]
    pub id: String,
    pub result: String,
}
