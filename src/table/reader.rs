use crate::search::types::FieldValue;
use anyhow::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// An in-memory table: ordered column names plus row-major cell values.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<FieldValue>>,
}

/// Reads a data table from CSV text.
///
/// The header row supplies the column names (trimmed). Cells that parse as
/// integers become `Int` values; everything else stays `Text` with its raw
/// whitespace intact, since trimming happens later at document construction.
pub fn read_table<R: Read>(input: R) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(input);

    let columns = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(parse_cell).collect());
    }

    Ok(Table { columns, rows })
}

pub fn read_table_file(path: impl AsRef<Path>) -> Result<Table> {
    let file = File::open(path.as_ref())?;
    read_table(file)
}

/// Reads the type tags from a schema CSV: a header row followed by
/// `field name, type tag` rows. Only the second column is consumed; the field
/// names the tags pair with come from the data table's own header.
pub fn read_type_tags<R: Read>(input: R) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_reader(input);

    let mut tags = Vec::new();
    for record in reader.records() {
        let record = record?;
        let tag = record
            .get(1)
            .ok_or_else(|| anyhow::anyhow!("Schema row has no type tag column: {:?}", record))?;
        tags.push(tag.trim().to_string());
    }

    Ok(tags)
}

pub fn read_type_tags_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    read_type_tags(file)
}

fn parse_cell(raw: &str) -> FieldValue {
    match raw.trim().parse::<i64>() {
        Ok(number) => FieldValue::Int(number),
        Err(_) => FieldValue::Text(raw.to_string()),
    }
}
