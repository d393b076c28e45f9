use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use wavescale::data::model::Dataset;
use wavescale::data::standardize::standardize;

const ROWS: usize = 20;
const SEED: u64 = 42;

/// Columns `a`, `b`, `c` of standard-normal draws plus an offset, wider
/// column `wide`, and a constant column `flat`.
fn sample_dataset(rng: &mut StdRng) -> Result<Dataset> {
    let standard = Normal::new(0.0, 1.0).context("standard normal")?;
    let wide = Normal::new(50.0, 12.5).context("wide normal")?;

    let mut draw = |dist: &Normal<f64>| -> Vec<f64> {
        (0..ROWS).map(|_| dist.sample(&mut *rng)).collect()
    };

    let columns = vec![
        ("a", draw(&standard)),
        ("b", draw(&standard)),
        ("c", draw(&standard)),
        ("wide", draw(&wide)),
        ("flat", vec![3.0; ROWS]),
    ];
    Ok(Dataset::from_columns(columns)?)
}

fn write_parquet(dataset: &Dataset, path: &str) -> Result<()> {
    let schema = Arc::new(Schema::new(
        dataset
            .columns()
            .iter()
            .map(|c| Field::new(&c.name, DataType::Float64, false))
            .collect::<Vec<_>>(),
    ));
    let arrays: Vec<ArrayRef> = dataset
        .columns()
        .iter()
        .map(|c| Arc::new(Float64Array::from(c.values.clone())) as ArrayRef)
        .collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays).context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn write_csv(dataset: &Dataset, path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record(dataset.column_names())?;
    for row in 0..dataset.n_rows() {
        writer.write_record(dataset.columns().iter().map(|c| c.values[row].to_string()))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let dataset = sample_dataset(&mut rng)?;

    write_parquet(&dataset, "sample_data.parquet")?;
    write_csv(&dataset, "sample_data.csv")?;

    println!(
        "Wrote {} rows × {} columns to sample_data.parquet and sample_data.csv\n",
        dataset.n_rows(),
        dataset.n_cols()
    );
    println!("{}\n", dataset.head(5));

    let standardized = standardize(dataset, &["a", "b", "flat"])?;
    println!("After standardizing a, b, flat:\n{}", standardized.head(5));
    Ok(())
}
