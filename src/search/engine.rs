use super::query::{match_all_query, multi_field_query, single_field_query};
use super::results::flatten_hits;
use super::types::{ConditionValue, FieldValue};
use crate::client::es::EsClient;
use crate::index::types::Schema;
use anyhow::Result;

/// Returns the first requested field that is not declared in the schema.
///
/// This is the shared precondition for every search operation; both the
/// single-field and the multi-field paths go through it, so field validation
/// is uniform across the two.
pub fn unknown_field<'a>(schema: &Schema, fields: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    fields.into_iter().find(|field| !schema.contains(field))
}

/// Searches one field for one value.
///
/// Returns `None` when the field is not part of the declared schema (the
/// engine is never called in that case), `Some(vec![])` when the query ran but
/// matched nothing, and `Some(records)` otherwise. Each record is the matched
/// document flattened to `field: value` lines.
pub async fn search_by_field(
    client: &EsClient,
    index: &str,
    schema: &Schema,
    field: &str,
    value: &FieldValue,
) -> Result<Option<Vec<String>>> {
    if let Some(missing) = unknown_field(schema, [field]) {
        tracing::warn!(
            "Skipping search on `{}`: field `{}` is not in the schema",
            index,
            missing
        );
        return Ok(None);
    }

    tracing::info!("Searching `{}` for `{}`: {:?}", index, field, value);
    let query = single_field_query(field, value);
    let response = client.search(index, &query).await?;
    Ok(Some(flatten_hits(&response)))
}

/// Searches several fields at once, each with one or many values.
///
/// Every scalar becomes its own condition and all conditions are OR-combined,
/// so a document matching any single one is a hit. Field validation and the
/// sentinel contract are identical to `search_by_field`.
pub async fn multi_search(
    client: &EsClient,
    index: &str,
    schema: &Schema,
    conditions: &[(String, ConditionValue)],
) -> Result<Option<Vec<String>>> {
    let requested = conditions.iter().map(|(field, _)| field.as_str());
    if let Some(missing) = unknown_field(schema, requested) {
        tracing::warn!(
            "Skipping multi-search on `{}`: field `{}` is not in the schema",
            index,
            missing
        );
        return Ok(None);
    }

    let query = multi_field_query(conditions);
    tracing::info!("Multi-search on `{}`, query: {}", index, query);
    let response = client.search(index, &query).await?;
    Ok(Some(flatten_hits(&response)))
}

/// Fetches every document of the index, flattened for display.
pub async fn get_all_docs(client: &EsClient, index: &str) -> Result<Vec<String>> {
    let response = client.search(index, &match_all_query()).await?;
    Ok(flatten_hits(&response))
}
