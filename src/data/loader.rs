use std::fs::File;
use std::io;
use std::path::Path;

use thiserror::Error;

use super::model::{IrisDataset, Record};

// ---------------------------------------------------------------------------
// Required header schema
// ---------------------------------------------------------------------------

const COL_SEPAL_LENGTH: &str = "SepalLengthCm";
const COL_SEPAL_WIDTH: &str = "SepalWidthCm";
const COL_PETAL_LENGTH: &str = "PetalLengthCm";
const COL_PETAL_WIDTH: &str = "PetalWidthCm";
const COL_SPECIES: &str = "Species";

// ---------------------------------------------------------------------------
// LoadError – the only error kind in the system
// ---------------------------------------------------------------------------

/// Fatal dataset loading failure. Surfaced to the user, never retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("opening {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// Numeric coercion failure. The whole file is rejected rather than
    /// letting a NaN flow into the cached domain bounds.
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the Iris dataset from a file. Dispatch by extension.
///
/// Only `.csv` is supported: a header row naming the four measurement
/// columns and the species column, one observation per row. Extra columns
/// (e.g. an `Id` counter) are ignored.
pub fn load_file(path: &Path) -> Result<IrisDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

fn load_csv(path: &Path) -> Result<IrisDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_csv_reader(file)
}

// ---------------------------------------------------------------------------
// CSV parsing core
// ---------------------------------------------------------------------------

/// Parse CSV from any reader. One pass coerces the measurement fields to
/// `f64`; any non-numeric value rejects the whole file.
pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<IrisDataset, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let sepal_length_idx = column_index(&headers, COL_SEPAL_LENGTH)?;
    let sepal_width_idx = column_index(&headers, COL_SEPAL_WIDTH)?;
    let petal_length_idx = column_index(&headers, COL_PETAL_LENGTH)?;
    let petal_width_idx = column_index(&headers, COL_PETAL_WIDTH)?;
    let species_idx = column_index(&headers, COL_SPECIES)?;

    let mut records = Vec::new();

    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;

        records.push(Record {
            sepal_length: parse_field(&record, sepal_length_idx, row, COL_SEPAL_LENGTH)?,
            sepal_width: parse_field(&record, sepal_width_idx, row, COL_SEPAL_WIDTH)?,
            petal_length: parse_field(&record, petal_length_idx, row, COL_PETAL_LENGTH)?,
            petal_width: parse_field(&record, petal_width_idx, row, COL_PETAL_WIDTH)?,
            species: record.get(species_idx).unwrap_or("").trim().to_string(),
        });
    }

    Ok(IrisDataset::from_records(records))
}

fn column_index(
    headers: &csv::StringRecord,
    name: &'static str,
) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or(LoadError::MissingColumn(name))
}

fn parse_field(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<f64, LoadError> {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        row,
        column,
        value: raw.to_string(),
    })
}
