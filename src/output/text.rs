//! Plain-text data dictionary report

use std::fmt::Write;

use crate::model::{ColumnDescriptor, DataDictionary};

/// Render one block per table:
///
/// ```text
/// Table: patient
///   id:
///     type: INT
///     nullable: NO
///
/// ```
pub fn render_text_report(dictionary: &DataDictionary) -> String {
    let mut out = String::new();

    for (table, columns) in dictionary.tables() {
        let _ = writeln!(out, "Table: {}", table);
        for (name, column) in columns {
            let _ = writeln!(out, "  {}:", name);
            write_column_fields(&mut out, column);
        }
        out.push('\n');
    }

    out
}

fn write_column_fields(out: &mut String, column: &ColumnDescriptor) {
    let _ = writeln!(out, "    type: {}", column.data_type);
    let _ = writeln!(out, "    nullable: {}", column.nullable_label());
    if let Some(default) = &column.default {
        let _ = writeln!(out, "    default: {}", default);
    }
}
