use super::types::{ConditionValue, FieldValue};
use serde_json::{Map, Value, json};

/// Builds one engine condition for a single scalar.
///
/// Integers produce an exact `term` condition; text produces an analyzed
/// `match` condition. The field name is the dynamic key of the inner object.
pub fn scalar_condition(field: &str, value: &FieldValue) -> Value {
    let (kind, rendered) = match value {
        FieldValue::Int(n) => ("term", Value::from(*n)),
        FieldValue::Text(s) => ("match", Value::String(s.clone())),
    };

    let mut by_field = Map::new();
    by_field.insert(field.to_string(), rendered);

    let mut condition = Map::new();
    condition.insert(kind.to_string(), Value::Object(by_field));
    Value::Object(condition)
}

/// Builds the query body for a single-field search.
///
/// An integer value is wrapped in a boolean `must` clause for exact matching;
/// a text value is issued as a bare `match` query.
pub fn single_field_query(field: &str, value: &FieldValue) -> Value {
    let condition = scalar_condition(field, value);
    match value {
        FieldValue::Int(_) => json!({
            "query": {
                "bool": {
                    "must": condition
                }
            }
        }),
        FieldValue::Text(_) => json!({
            "query": condition
        }),
    }
}

/// Builds the query body for a multi-field / multi-value search.
///
/// Every scalar in every condition value becomes one condition, and all
/// conditions are flattened into a single boolean `should` clause: a logical
/// OR across everything, regardless of which field or value produced it.
pub fn multi_field_query(conditions: &[(String, ConditionValue)]) -> Value {
    let flattened: Vec<Value> = conditions
        .iter()
        .flat_map(|(field, value)| value.scalars().map(|scalar| scalar_condition(field, scalar)))
        .collect();

    json!({
        "query": {
            "bool": {
                "should": flattened
            }
        }
    })
}

/// Builds the query body that matches every document in the index.
pub fn match_all_query() -> Value {
    json!({
        "query": {
            "match_all": {}
        }
    })
}
