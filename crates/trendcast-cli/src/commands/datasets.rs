//! Datasets command implementation.
//!
//! Lists the built-in sample series.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::datasets::DATASETS;
use crate::output::{print_header, print_output};

#[derive(Debug, Serialize, Tabled)]
struct DatasetRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "Description")]
    description: &'static str,
}

/// Execute the datasets command.
pub fn execute(format: OutputFormat) -> Result<()> {
    let rows: Vec<DatasetRow> = DATASETS
        .iter()
        .map(|d| DatasetRow {
            name: d.name,
            points: d.observations(),
            description: d.description,
        })
        .collect();

    if format == OutputFormat::Table {
        print_header("Sample Datasets");
    }
    print_output(&rows, format)
}
