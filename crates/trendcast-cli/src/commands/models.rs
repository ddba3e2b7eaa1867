//! Models command implementation.

use anyhow::Result;
use trendcast_core::models::ModelKind;

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output, KeyValue};

/// Execute the models command.
pub fn execute(format: OutputFormat) -> Result<()> {
    let rows: Vec<KeyValue> = ModelKind::ALL
        .iter()
        .map(|kind| KeyValue::new(kind.as_str(), kind.description()))
        .collect();

    if format == OutputFormat::Table {
        print_header("Prediction Models");
    }
    print_output(&rows, format)
}
