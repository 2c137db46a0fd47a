use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sql_data_dictionary::{build_data_dictionary, DictionaryOptions};

#[derive(Parser)]
#[command(name = "sql-data-dictionary")]
#[command(author, version, about = "Extract a data dictionary from a MySQL/MariaDB schema dump")]
struct Cli {
    /// Path to the schema.sql dump
    #[arg(short, long, default_value = "schema.sql")]
    schema: PathBuf,

    /// Output file path without extension
    #[arg(short, long, default_value = "openemr_data_dictionary")]
    output: PathBuf,

    /// Output format (json, txt)
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Table to print as a sample after parsing
    #[arg(long, default_value = "patient_data")]
    sample_table: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("sql_data_dictionary={}", default_level).into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = DictionaryOptions {
        schema_path: cli.schema,
        output_stem: cli.output,
        format: cli.format,
        sample_table: cli.sample_table,
    };

    let output_path = build_data_dictionary(&options)?;
    println!("Data dictionary saved as {}", output_path.display());

    Ok(())
}
