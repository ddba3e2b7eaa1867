//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No sample dataset with this name.
    #[error("Unknown dataset: {0}. Run `trendcast datasets` to list them.")]
    UnknownDataset(String),

    /// Neither a dataset nor an input file was given.
    #[error("Missing input: pass --dataset <NAME> or --input <FILE>")]
    MissingInput,

    /// Input file extension is not recognised.
    #[error("Unsupported input format: {}. Use .csv or .json.", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Input file could not be parsed.
    #[error("Cannot parse {}: {reason}", .path.display())]
    Parse {
        /// File being read.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
