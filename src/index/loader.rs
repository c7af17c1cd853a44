use crate::client::es::EsClient;
use crate::search::types::FieldValue;
use crate::table::reader::Table;
use anyhow::Result;
use serde_json::{Map, Value};

/// Builds one document per table row by zipping column names to cell values.
///
/// Text cells are trimmed of surrounding whitespace at construction; integer
/// cells pass through unchanged. A row longer than the column list is
/// truncated to it (zip semantics).
pub fn build_documents(columns: &[String], rows: &[Vec<FieldValue>]) -> Vec<Map<String, Value>> {
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .zip(row.iter())
                .map(|(column, cell)| {
                    let value = match cell {
                        FieldValue::Int(n) => Value::from(*n),
                        FieldValue::Text(s) => Value::String(s.trim().to_string()),
                    };
                    (column.clone(), value)
                })
                .collect()
        })
        .collect()
}

/// Loads every row of the table into the index, one document at a time.
///
/// Documents get sequential identifiers starting at 0, in row order. There is
/// no batching, no retry and no rollback: the first engine failure propagates
/// and leaves the rows before it already indexed. Re-running against the same
/// index overwrites documents by position.
pub async fn fill_index(client: &EsClient, index: &str, table: &Table) -> Result<()> {
    let documents = build_documents(&table.columns, &table.rows);
    for (id, document) in documents.into_iter().enumerate() {
        client
            .index_document(index, &Value::Object(document), id as u64)
            .await?;
    }
    Ok(())
}
