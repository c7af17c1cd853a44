use serde::{Deserialize, Serialize};

/// One declared field of the index: the column name paired with the engine's
/// type tag for it ("integer", "text", "keyword", ...).
///
/// Type tags are opaque here; they are passed through to the engine verbatim
/// with no local validation of allowed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub type_tag: String,
}

/// The declared schema of an index: an ordered list of fields whose order
/// matches the source table's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

impl Schema {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self { fields }
    }

    /// Pairs column names with type tags positionally.
    ///
    /// When the two lists differ in length, pairing stops at the first
    /// exhausted list; the excess entries of the longer one are dropped.
    pub fn from_columns(names: &[String], type_tags: &[String]) -> Self {
        let fields = names
            .iter()
            .zip(type_tags.iter())
            .map(|(name, type_tag)| SchemaField {
                name: name.clone(),
                type_tag: type_tag.clone(),
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
