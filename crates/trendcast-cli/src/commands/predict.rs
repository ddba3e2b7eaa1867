//! Predict command implementation.
//!
//! Fits the selected model to a series and prints the projection.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use trendcast_core::models::{ModelKind, PredictionModel};
use trendcast_core::pipeline::PredictionPipeline;
use trendcast_core::types::Series;

use crate::cli::OutputFormat;
use crate::commands::load_config;
use crate::datasets;
use crate::error::CliError;
use crate::input::load_series;
use crate::output::{print_header, print_info, print_output, Origin, PointRow};

/// Arguments for the predict command.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Built-in sample dataset (see `trendcast datasets`)
    #[arg(short, long, conflicts_with = "input")]
    pub dataset: Option<String>,

    /// Series file (.csv with x,y header, or .json array of {x, y})
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Prediction model: linear, polynomial or exponential
    #[arg(short, long, value_parser = parse_model)]
    pub model: Option<ModelKind>,

    /// Polynomial degree (polynomial model only)
    #[arg(long)]
    pub degree: Option<usize>,

    /// Number of future points to project
    #[arg(short, long)]
    pub points: Option<usize>,

    /// Include the input series ahead of the projection
    #[arg(long)]
    pub with_history: bool,
}

fn parse_model(s: &str) -> Result<ModelKind, String> {
    s.parse::<ModelKind>().map_err(|e| e.to_string())
}

/// Execute the predict command.
pub fn execute(args: PredictArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(degree) = args.degree {
        config.degree = degree;
    }
    if let Some(points) = args.points {
        config.future_points = points;
    }

    let pipeline = PredictionPipeline::from_config(&config)?;
    let (label, series) = read_input(&args)?;

    tracing::info!(
        source = %label,
        model = pipeline.model().name(),
        points = series.len(),
        future_points = pipeline.future_points(),
        "running prediction"
    );

    let predictions = pipeline.run(&series)?;

    let (shown, history_len) = if args.with_history {
        (PredictionPipeline::with_history(&series, &predictions), series.len())
    } else {
        (Series::new(predictions), 0)
    };
    let rows: Vec<PointRow> = shown
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let origin = if i < history_len {
                Origin::History
            } else {
                Origin::Prediction
            };
            PointRow::new(p, origin)
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("{} Prediction: {}", pipeline.model().name(), label));
        print_info(config.model.description());
    }
    print_output(&rows, format)
}

fn read_input(args: &PredictArgs) -> Result<(String, Series)> {
    if let Some(path) = &args.input {
        return Ok((path.display().to_string(), load_series(path)?));
    }
    match &args.dataset {
        Some(name) => {
            let dataset = datasets::find(name)?;
            Ok((dataset.name.to_string(), dataset.series()))
        }
        None => Err(CliError::MissingInput.into()),
    }
}
