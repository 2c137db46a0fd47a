//! Data dictionary model

mod column;
mod data_dictionary;

pub use column::{ColumnDefault, ColumnDescriptor};
pub use data_dictionary::{DataDictionary, TableColumns};
