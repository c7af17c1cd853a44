use serde::{Deserialize, Serialize};

/// A scalar value as stored in a document cell or used in a query condition.
///
/// The set of supported shapes is closed: integers map to exact `term`
/// conditions, text maps to analyzed `match` conditions. There is no variant
/// for anything else, so an unsupported value type is a compile-time
/// impossibility rather than something silently dropped at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The value side of one multi-search condition: either a single scalar or a
/// collection of scalars, each of which becomes its own condition.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    One(FieldValue),
    Many(Vec<FieldValue>),
}

impl ConditionValue {
    /// Iterates over every scalar this value expands to.
    pub fn scalars(&self) -> impl Iterator<Item = &FieldValue> {
        match self {
            Self::One(value) => std::slice::from_ref(value).iter(),
            Self::Many(values) => values.iter(),
        }
    }
}

impl From<FieldValue> for ConditionValue {
    fn from(value: FieldValue) -> Self {
        Self::One(value)
    }
}

impl From<Vec<FieldValue>> for ConditionValue {
    fn from(values: Vec<FieldValue>) -> Self {
        Self::Many(values)
    }
}
