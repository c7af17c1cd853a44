use crate::client::protocol::SearchResponse;
use serde_json::{Map, Value};

/// Flattens every hit of a search response into one display string per
/// document, in the order the engine returned the hits.
pub fn flatten_hits(response: &SearchResponse) -> Vec<String> {
    response
        .hits
        .hits
        .iter()
        .map(|hit| flatten_source(&hit.source))
        .collect()
}

/// Renders one stored document as newline-joined `field: value` lines.
///
/// Field order is whatever the engine returned, which is not necessarily the
/// schema's column order.
pub fn flatten_source(source: &Map<String, Value>) -> String {
    source
        .iter()
        .map(|(field, value)| format!("{}: {}", field, render_value(value)))
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
