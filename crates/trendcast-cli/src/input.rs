//! Series loading from CSV and JSON files.

use std::path::Path;

use trendcast_core::types::{Point, Series};

use crate::error::{CliError, CliResult};

/// Reads a series from `path`, choosing the parser by extension.
///
/// - `.csv`: header row with `x` and `y` columns
/// - `.json`: array of `{ "x": .., "y": .. }` objects
///
/// Points are kept in file order.
pub fn load_series(path: &Path) -> CliResult<Series> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let series = match extension.as_deref() {
        Some("csv") => read_csv(path)?,
        Some("json") => read_json(path)?,
        _ => return Err(CliError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::debug!(path = %path.display(), points = series.len(), "loaded series");
    Ok(series)
}

fn read_csv(path: &Path) -> CliResult<Series> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| parse_error(path, e))?;

    reader
        .deserialize::<Point>()
        .map(|row| row.map_err(|e| parse_error(path, e)))
        .collect()
}

fn read_json(path: &Path) -> CliResult<Series> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| parse_error(path, e))
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> CliError {
    CliError::Parse {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_csv() {
        let file = temp_file(".csv", "x,y\n1,2\n2, 4\n3,6\n");
        let series = load_series(file.path()).unwrap();
        assert_eq!(series.ys(), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_load_json() {
        let file = temp_file(".json", r#"[{"x": 1, "y": 2.5}, {"x": 2, "y": 3.5}]"#);
        let series = load_series(file.path()).unwrap();
        assert_eq!(series.points(), &[Point::new(1.0, 2.5), Point::new(2.0, 3.5)]);
    }

    #[test]
    fn test_bad_csv_row() {
        let file = temp_file(".csv", "x,y\n1,abc\n");
        assert!(matches!(load_series(file.path()), Err(CliError::Parse { .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_file(".txt", "1 2\n");
        assert!(matches!(
            load_series(file.path()),
            Err(CliError::UnsupportedFormat(_))
        ));
    }
}
