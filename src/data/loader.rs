use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a numeric table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – flat Float64 / Float32 / Int64 / Int32 columns
/// * `.json`    – `[{ "a": 1.0, "b": 2.0 }, ...]` or `{ "a": [...], "b": [...] }`
/// * `.csv`     – header row of column names, one number per cell
///
/// Missing cells (`null`, empty CSV fields, Parquet nulls) load as `NaN`.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// The two layouts pandas writes with `orient='records'` and
/// `orient='list'`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTable {
    Records(Vec<BTreeMap<String, Option<f64>>>),
    Columns(BTreeMap<String, Vec<Option<f64>>>),
}

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Parse a JSON table. Columns come out sorted by name; a key missing from
/// some records loads as `NaN` in those rows.
pub fn parse_json(text: &str) -> Result<Dataset> {
    let table: JsonTable = serde_json::from_str(text)
        .context("parsing JSON (expected an array of records or an object of columns)")?;

    let columns: Vec<(String, Vec<f64>)> = match table {
        JsonTable::Columns(columns) => columns
            .into_iter()
            .map(|(name, values)| (name, values.into_iter().map(nan_if_null).collect()))
            .collect(),
        JsonTable::Records(records) => {
            let names: BTreeSet<&String> = records.iter().flat_map(|r| r.keys()).collect();
            names
                .into_iter()
                .map(|name| {
                    let values = records
                        .iter()
                        .map(|r| nan_if_null(r.get(name).copied().flatten()))
                        .collect();
                    (name.clone(), values)
                })
                .collect()
        }
    };

    Dataset::from_columns(columns).context("building dataset from JSON")
}

fn nan_if_null(v: Option<f64>) -> f64 {
    v.unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

/// Read a CSV table: header row with column names, every other cell a
/// number or empty.
pub fn read_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        for ((cell, name), values) in record.iter().zip(&headers).zip(columns.iter_mut()) {
            let value = parse_cell(cell)
                .with_context(|| format!("Row {row_no}, column '{name}': '{cell}' is not a number"))?;
            values.push(value);
        }
    }

    Dataset::from_columns(headers.into_iter().zip(columns)).context("building dataset from CSV")
}

fn parse_cell(s: &str) -> Result<f64, std::num::ParseFloatError> {
    let s = s.trim();
    if s.is_empty() {
        Ok(f64::NAN)
    } else {
        s.parse::<f64>()
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of flat numeric columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for ((name, values), array) in names.iter().zip(columns.iter_mut()).zip(batch.columns()) {
            extend_f64(array, values).with_context(|| format!("Parquet column '{name}'"))?;
        }
    }

    Dataset::from_columns(names.into_iter().zip(columns)).context("building dataset from Parquet")
}

// -- Parquet / Arrow helpers --

/// Append a numeric Arrow column to `out` as `f64`, nulls as `NaN`.
fn extend_f64(col: &ArrayRef, out: &mut Vec<f64>) -> Result<()> {
    out.reserve(col.len());
    match col.data_type() {
        DataType::Float64 => {
            out.extend(downcast::<Float64Array>(col)?.iter().map(nan_if_null));
        }
        DataType::Float32 => {
            out.extend(
                downcast::<Float32Array>(col)?
                    .iter()
                    .map(|v| nan_if_null(v.map(f64::from))),
            );
        }
        DataType::Int64 => {
            out.extend(
                downcast::<Int64Array>(col)?
                    .iter()
                    .map(|v| nan_if_null(v.map(|i| i as f64))),
            );
        }
        DataType::Int32 => {
            out.extend(
                downcast::<Int32Array>(col)?
                    .iter()
                    .map(|v| nan_if_null(v.map(f64::from))),
            );
        }
        other => bail!("unsupported type {other:?}, expected a numeric column"),
    }
    Ok(())
}

fn downcast<T: Array + 'static>(col: &ArrayRef) -> Result<&T> {
    col.as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("unexpected array layout for {:?}", col.data_type()))
}
