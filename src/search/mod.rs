//! Search Module
//!
//! The core component responsible for translating search parameters into
//! engine queries and normalizing returned hits.
//!
//! ## Overview
//! This module bridges typed field values with the engine's query DSL. It owns
//! all of the decision-making in the crate: which condition shape a value
//! produces, how conditions combine, and how matched documents are rendered
//! for display.
//!
//! ## Responsibilities
//! - **Typed values**: Scalar values are a closed sum (`Int` or `Text`), so a
//!   value that fits neither shape cannot be constructed in the first place.
//! - **Query construction**: `Int` values become exact `term` conditions,
//!   `Text` values become analyzed `match` conditions; multi-value searches
//!   combine every condition under one boolean `should` (OR).
//! - **Field validation**: A single membership precondition, applied uniformly
//!   to single- and multi-field search, rejects fields absent from the schema
//!   before any engine call.
//! - **Result normalization**: Each hit's `_source` is flattened to
//!   newline-joined `field: value` lines in the order the engine returned the
//!   fields.
//!
//! ## Submodules
//! - **`engine`**: The engine-facing search operations.
//! - **`query`**: Pure query-body builders.
//! - **`results`**: Hit flattening and value rendering.
//! - **`types`**: The value and condition sum types.

pub mod engine;
pub mod query;
pub mod results;
pub mod types;
