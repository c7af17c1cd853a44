use super::types::Schema;
use crate::client::es::EsClient;
use anyhow::Result;
use serde_json::{Map, Value, json};

/// Index settings are fixed, not configurable.
pub const NUMBER_OF_SHARDS: u32 = 3;
pub const NUMBER_OF_REPLICAS: u32 = 2;

fn settings() -> Value {
    json!({
        "index": {
            "number_of_shards": NUMBER_OF_SHARDS,
            "number_of_replicas": NUMBER_OF_REPLICAS
        }
    })
}

/// Builds the `mappings` object for the schema: one property per field, keyed
/// by field name, carrying the field's type tag.
///
/// Returns `None` when the schema declares no fields, which is the one
/// defensive check in this module.
pub fn build_mappings(schema: &Schema) -> Option<Value> {
    if schema.is_empty() {
        return None;
    }

    let mut properties = Map::new();
    for field in schema.fields() {
        let mut type_entry = Map::new();
        type_entry.insert("type".to_string(), Value::String(field.type_tag.clone()));
        properties.insert(field.name.clone(), Value::Object(type_entry));
    }

    Some(json!({ "properties": properties }))
}

/// Builds the full index-creation body: fixed settings plus the field mapping.
pub fn build_index_body(schema: &Schema) -> Option<Value> {
    let mappings = build_mappings(schema)?;
    Some(json!({
        "settings": settings(),
        "mappings": mappings
    }))
}

/// Creates the index with the schema's mapping.
///
/// An empty computed mapping aborts the operation with a warning and the
/// engine is never called. Any engine-side failure propagates unmodified.
pub async fn create_index(client: &EsClient, index: &str, schema: &Schema) -> Result<()> {
    let Some(body) = build_index_body(schema) else {
        tracing::warn!(
            "Skipping index creation for `{}`: computed mapping is empty",
            index
        );
        return Ok(());
    };

    tracing::info!("Creating index `{}` with body: {}", index, body);
    client.create_index(index, &body).await?;
    Ok(())
}
