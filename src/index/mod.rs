//! Index Provisioning Module
//!
//! Turns column metadata into an index with a declared field mapping and loads
//! table rows into it as documents.
//!
//! ## Submodules
//! - **`types`**: The `Schema` (ordered field name / type tag pairs).
//! - **`mapping`**: Builds the index-creation body (settings + mappings).
//! - **`loader`**: Row-to-document construction and sequential bulk loading.

pub mod loader;
pub mod mapping;
pub mod types;

#[cfg(test)]
mod tests;
