//! Integration tests for the build workflow: schema file in, dictionary file out

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use sql_data_dictionary::output::json::from_json_str;
use sql_data_dictionary::DictionaryError;

use crate::common::TestContext;

// ============================================================================
// JSON Output
// ============================================================================

#[test]
fn test_build_json_from_fixture() {
    let ctx = TestContext::with_fixture("openemr_subset");
    let content = ctx.build_successfully("json");
    let json: Value = serde_json::from_str(&content).expect("Output should be valid JSON");
    let dictionary = from_json_str(&content).unwrap();

    let tables: Vec<&str> = dictionary.table_names().collect();
    assert_eq!(
        tables,
        vec!["addresses", "patient_data", "form_vitals", "lists_touch"],
        "Tables should keep source order and drop tables without columns"
    );

    assert_eq!(
        json["addresses"]["id"],
        json!({"type": "int(11)", "nullable": "NO", "default": "0"})
    );
    assert_eq!(
        json["addresses"]["line1"],
        json!({"type": "varchar(255)", "nullable": "YES", "default": null})
    );
    assert_eq!(
        json["patient_data"]["id"],
        json!({"type": "bigint(20)", "nullable": "NO"})
    );
    assert_eq!(
        json["patient_data"]["financial"],
        json!({"type": "enum('','1','2','3','4','5')", "nullable": "NO", "default": ""})
    );
    assert_eq!(
        json["patient_data"]["last_updated"]["default"],
        json!("CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP")
    );
    assert_eq!(
        json["form_vitals"]["weight"],
        json!({"type": "DECIMAL(12,6)", "nullable": "YES", "default": "0.00"})
    );
}

#[test]
fn test_build_json_column_order() {
    let ctx = TestContext::with_fixture("openemr_subset");
    let content = ctx.build_successfully("json");
    let dictionary = from_json_str(&content).unwrap();

    let columns: Vec<&str> = dictionary
        .table("patient_data")
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        columns,
        vec![
            "id",
            "uuid",
            "title",
            "fname",
            "DOB",
            "sex",
            "financial",
            "date",
            "regdate",
            "pid",
            "deceased_date",
            "last_updated",
        ]
    );

    // Key clauses never show up as columns
    let lists_touch: Vec<&str> = dictionary
        .table("lists_touch")
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(lists_touch, vec!["pid", "type", "date"]);
}

#[test]
fn test_build_json_is_indented_with_four_spaces() {
    let ctx = TestContext::with_schema(
        "CREATE TABLE `patient` (`id` INT NOT NULL AUTO_INCREMENT, `name` VARCHAR(100) DEFAULT NULL, PRIMARY KEY (`id`)) ENGINE=InnoDB;",
    );
    let content = ctx.build_successfully("json");
    let expected = r#"{
    "patient": {
        "id": {
            "type": "INT",
            "nullable": "NO"
        },
        "name": {
            "type": "VARCHAR(100)",
            "nullable": "YES",
            "default": null
        }
    }
}"#;
    assert_eq!(content, expected);
}

#[test]
fn test_build_writes_expected_file_name() {
    let ctx = TestContext::with_fixture("openemr_subset");
    let result = ctx.build("json");
    assert!(result.success, "Errors: {:?}", result.errors);
    assert_eq!(
        result.output_path.unwrap(),
        ctx.work_dir.join("data_dictionary.json")
    );
}

// ============================================================================
// Text Output
// ============================================================================

#[test]
fn test_build_text_report() {
    let ctx = TestContext::with_fixture("openemr_subset");
    let content = ctx.build_successfully("txt");

    assert!(content.starts_with("Table: addresses\n  id:\n    type: int(11)\n    nullable: NO\n    default: 0\n"));
    assert!(content.contains("\nTable: lists_touch\n"));
    assert!(content.contains("  line1:\n    type: varchar(255)\n    nullable: YES\n    default: NULL\n"));
    assert!(!content.contains("Table: keys_only"));
    assert!(content.ends_with("\n\n"));
    assert!(ctx.work_dir.join("data_dictionary.txt").exists());
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_unsupported_format_writes_nothing() {
    let ctx = TestContext::with_fixture("openemr_subset");
    let result = sql_data_dictionary::build_data_dictionary(&ctx.options("xml"));

    let err = result.expect_err("xml should be rejected");
    assert!(matches!(
        err.downcast_ref::<DictionaryError>(),
        Some(DictionaryError::UnsupportedFormat { .. })
    ));
    assert_eq!(ctx.file_names(), vec!["schema.sql"]);
}

#[test]
fn test_missing_schema_reports_not_found() {
    let ctx = TestContext::with_schema("");
    let mut options = ctx.options("json");
    options.schema_path = ctx.work_dir.join("does_not_exist.sql");

    let err = sql_data_dictionary::build_data_dictionary(&options).unwrap_err();
    match err.downcast_ref::<DictionaryError>() {
        Some(DictionaryError::InputNotFound { path }) => {
            assert!(path.ends_with("does_not_exist.sql"));
        }
        other => panic!("Expected InputNotFound, got {:?}", other),
    }
    assert_eq!(ctx.file_names(), vec!["schema.sql"]);
}

#[test]
fn test_schema_without_tables_writes_empty_dictionary() {
    let ctx = TestContext::with_schema("SET NAMES utf8mb4;\n");
    assert_eq!(ctx.build_successfully("json"), "{}");
}

// ============================================================================
// Input Encoding
// ============================================================================

#[test]
fn test_windows_1252_schema() {
    let ctx = TestContext::with_fixture("latin1_comments");
    let content = ctx.build_successfully("json");
    let json: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["codes"]["code_text"]["default"], json!("café"));
}
