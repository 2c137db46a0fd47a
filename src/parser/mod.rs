//! MySQL/MariaDB schema dump parsing

mod column_parser;
mod default_value;
mod schema_extractor;
mod schema_parser;

pub use column_parser::{
    describe_column, normalize_columns, strip_key_clauses, tokenize_columns, RawColumn,
};
pub use default_value::normalize_default;
pub use schema_extractor::{extract_tables, normalize_line_breaks, TableBlock};
pub use schema_parser::{parse_schema, parse_schema_file};
