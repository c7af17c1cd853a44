//! Elasticsearch Client Module
//!
//! Provides the explicit client handle (`EsClient`) used by every other module
//! to talk to the cluster, plus the wire-format DTOs for engine responses.
//!
//! The handle is constructed once at startup and passed by reference into each
//! operation; no global connection state exists anywhere in the crate.
//!
//! ## Submodules
//! - **`es`**: The `EsClient` handle and its index/document/search operations.
//! - **`protocol`**: Deserialization targets for engine response bodies.

pub mod es;
pub mod protocol;
