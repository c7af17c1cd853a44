//! Elasticsearch Bridge Library
//!
//! This library crate defines the modules that turn tabular (CSV) data into a
//! searchable Elasticsearch index and translate search parameters into engine
//! queries. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The bridge is composed of four loosely coupled subsystems:
//!
//! - **`client`**: The HTTP client handle for the Elasticsearch cluster. Wraps
//!   index management, document indexing and search calls; every operation is a
//!   single request/response round trip against the engine.
//! - **`index`**: Schema handling and index provisioning. Builds the
//!   index-creation body (settings + field mappings) from column metadata and
//!   bulk-loads table rows as documents with sequential identifiers.
//! - **`search`**: The query construction and result normalization logic.
//!   Builds `term`/`match` conditions from typed values and flattens returned
//!   hits into human-readable text.
//! - **`table`**: CSV readers for the data table and its companion schema file.

pub mod client;
pub mod index;
pub mod search;
pub mod table;
