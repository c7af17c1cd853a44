//! Index Module Tests
//!
//! Validates mapping construction (property count, fixed settings, truncation
//! on mismatched lengths) and document construction (zipping, trimming,
//! positional identifiers).

#[cfg(test)]
mod tests {
    use crate::index::loader::build_documents;
    use crate::index::mapping::{build_index_body, build_mappings};
    use crate::index::types::{Schema, SchemaField};
    use crate::search::types::FieldValue;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    // ============================================================
    // SCHEMA
    // ============================================================

    #[test]
    fn test_schema_from_columns_pairs_in_order() {
        let schema = Schema::from_columns(
            &strings(&["sid", "name", "age", "class"]),
            &strings(&["integer", "text", "integer", "keyword"]),
        );

        assert_eq!(schema.len(), 4);
        assert_eq!(
            schema.fields()[1],
            SchemaField {
                name: "name".to_string(),
                type_tag: "text".to_string()
            }
        );
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, ["sid", "name", "age", "class"]);
    }

    #[test]
    fn test_schema_truncates_to_shorter_list() {
        // 4 names, 2 tags: pairing stops when tags run out.
        let schema = Schema::from_columns(
            &strings(&["sid", "name", "age", "class"]),
            &strings(&["integer", "text"]),
        );
        assert_eq!(schema.len(), 2);

        // And the other way around: 2 names, 4 tags.
        let schema = Schema::from_columns(
            &strings(&["sid", "name"]),
            &strings(&["integer", "text", "integer", "keyword"]),
        );
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_schema_contains() {
        let schema = Schema::from_columns(&strings(&["sid", "name"]), &strings(&["integer", "text"]));

        assert!(schema.contains("sid"));
        assert!(schema.contains("name"));
        assert!(!schema.contains("age"));
        assert!(!schema.contains("Name"));
    }

    // ============================================================
    // MAPPING BUILDER
    // ============================================================

    #[test]
    fn test_mappings_one_property_per_field() {
        let schema = Schema::from_columns(
            &strings(&["sid", "name", "age"]),
            &strings(&["integer", "text", "integer"]),
        );

        let mappings = build_mappings(&schema).unwrap();
        let properties = mappings["properties"].as_object().unwrap();

        assert_eq!(properties.len(), 3);
        assert_eq!(properties["sid"]["type"], "integer");
        assert_eq!(properties["name"]["type"], "text");
        assert_eq!(properties["age"]["type"], "integer");
    }

    #[test]
    fn test_mappings_empty_schema_is_rejected() {
        let schema = Schema::new(vec![]);

        assert!(build_mappings(&schema).is_none());
        assert!(build_index_body(&schema).is_none());
    }

    #[test]
    fn test_mappings_type_tags_pass_through_verbatim() {
        // Tags are opaque: nothing checks them against the engine's catalog.
        let schema = Schema::from_columns(&strings(&["blob"]), &strings(&["no_such_type"]));

        let mappings = build_mappings(&schema).unwrap();
        assert_eq!(mappings["properties"]["blob"]["type"], "no_such_type");
    }

    #[test]
    fn test_index_body_fixed_settings() {
        let schema = Schema::from_columns(&strings(&["name"]), &strings(&["text"]));

        let body = build_index_body(&schema).unwrap();
        assert_eq!(body["settings"]["index"]["number_of_shards"], 3);
        assert_eq!(body["settings"]["index"]["number_of_replicas"], 2);
        assert_eq!(body["mappings"]["properties"]["name"]["type"], "text");
    }

    #[test]
    fn test_index_body_mismatched_lengths_min_properties() {
        let schema = Schema::from_columns(
            &strings(&["a", "b", "c", "d", "e"]),
            &strings(&["integer", "text", "keyword"]),
        );

        let body = build_index_body(&schema).unwrap();
        let properties = body["mappings"]["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 3);
    }

    // ============================================================
    // DOCUMENT BUILDER
    // ============================================================

    #[test]
    fn test_build_documents_one_per_row_in_order() {
        let columns = strings(&["sid", "name"]);
        let rows = vec![
            vec![FieldValue::Int(1), FieldValue::text("Ann")],
            vec![FieldValue::Int(2), FieldValue::text("Bo")],
        ];

        let documents = build_documents(&columns, &rows);

        // Row i becomes document i; the loader assigns id = position.
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["sid"], 1);
        assert_eq!(documents[0]["name"], "Ann");
        assert_eq!(documents[1]["sid"], 2);
        assert_eq!(documents[1]["name"], "Bo");
    }

    #[test]
    fn test_build_documents_trims_text_cells_only() {
        let columns = strings(&["sid", "name", "class"]);
        let rows = vec![vec![
            FieldValue::Int(7),
            FieldValue::text("  Ann  "),
            FieldValue::text("\tB1\n"),
        ]];

        let documents = build_documents(&columns, &rows);

        assert_eq!(documents[0]["sid"], 7);
        assert_eq!(documents[0]["name"], "Ann");
        assert_eq!(documents[0]["class"], "B1");
    }

    #[test]
    fn test_build_documents_row_truncated_to_columns() {
        let columns = strings(&["sid"]);
        let rows = vec![vec![FieldValue::Int(1), FieldValue::text("extra")]];

        let documents = build_documents(&columns, &rows);

        assert_eq!(documents[0].len(), 1);
        assert!(!documents[0].contains_key("extra"));
    }

    #[test]
    fn test_build_documents_empty_table() {
        let documents = build_documents(&strings(&["sid"]), &[]);
        assert!(documents.is_empty());
    }
}
