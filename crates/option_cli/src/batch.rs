//! Batch pricing of CSV input files.
//!
//! Each input row describes one contract. Rows are priced in parallel and
//! written back as a CSV or JSON report. A row that cannot be parsed does
//! not abort the batch; it becomes a failure row carrying the parse error.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use option_pricer::{price_inputs, OptionInputs, PricingResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CliError, Result};
use crate::naming::output_file_name;

/// Batch output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    /// One flat CSV row per contract
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl BatchFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            BatchFormat::Csv => "csv",
            BatchFormat::Json => "json",
        }
    }
}

impl FromStr for BatchFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(BatchFormat::Csv),
            "json" => Ok(BatchFormat::Json),
            other => Err(CliError::invalid_argument(format!(
                "Unknown format: {}. Supported: csv, json",
                other
            ))),
        }
    }
}

/// One CSV input row as read from disk.
#[derive(Debug, Deserialize)]
struct InputRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(alias = "S")]
    spot: f64,
    #[serde(alias = "K")]
    strike: f64,
    #[serde(alias = "T")]
    expiry: f64,
    #[serde(alias = "r")]
    rate: f64,
    #[serde(alias = "sigma")]
    volatility: f64,
    #[serde(alias = "q", default)]
    dividend_yield: Option<f64>,
}

/// A parsed input row, or the reason it could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchInput {
    /// Row identifier (the `id` column, else the 1-based row number)
    pub id: String,
    /// Contract inputs, or the parse error text
    pub inputs: std::result::Result<OptionInputs, String>,
}

/// A priced row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    /// Row identifier
    pub id: String,
    /// Contract inputs, absent when the row failed to parse
    pub inputs: Option<OptionInputs>,
    /// Pricing outcome
    pub result: PricingResult,
}

/// Column order of the CSV report; matches `OutputRecord`.
const OUTPUT_COLUMNS: [&str; 19] = [
    "id",
    "spot",
    "strike",
    "expiry",
    "rate",
    "volatility",
    "dividend_yield",
    "success",
    "call_price",
    "put_price",
    "delta_call",
    "delta_put",
    "gamma",
    "vega",
    "theta_call",
    "theta_put",
    "rho_call",
    "rho_put",
    "message",
];

/// Flat CSV output row.
#[derive(Debug, Serialize)]
struct OutputRecord<'a> {
    id: &'a str,
    spot: Option<f64>,
    strike: Option<f64>,
    expiry: Option<f64>,
    rate: Option<f64>,
    volatility: Option<f64>,
    dividend_yield: Option<f64>,
    success: bool,
    call_price: Option<f64>,
    put_price: Option<f64>,
    delta_call: Option<f64>,
    delta_put: Option<f64>,
    gamma: Option<f64>,
    vega: Option<f64>,
    theta_call: Option<f64>,
    theta_put: Option<f64>,
    rho_call: Option<f64>,
    rho_put: Option<f64>,
    message: &'a str,
}

impl<'a> From<&'a BatchRow> for OutputRecord<'a> {
    fn from(row: &'a BatchRow) -> Self {
        let inputs = row.inputs.as_ref();
        let greeks = row.result.greeks();
        Self {
            id: &row.id,
            spot: inputs.map(|i| i.spot),
            strike: inputs.map(|i| i.strike),
            expiry: inputs.map(|i| i.expiry),
            rate: inputs.map(|i| i.rate),
            volatility: inputs.map(|i| i.volatility),
            dividend_yield: inputs.map(|i| i.dividend_yield),
            success: row.result.is_success(),
            call_price: row.result.call_price(),
            put_price: row.result.put_price(),
            delta_call: greeks.map(|g| g.delta_call),
            delta_put: greeks.map(|g| g.delta_put),
            gamma: greeks.map(|g| g.gamma),
            vega: greeks.map(|g| g.vega),
            theta_call: greeks.map(|g| g.theta_call),
            theta_put: greeks.map(|g| g.theta_put),
            rho_call: greeks.map(|g| g.rho_call),
            rho_put: greeks.map(|g| g.rho_put),
            message: row.result.message(),
        }
    }
}

/// Summary of a completed batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Path of the written report
    pub output_path: PathBuf,
    /// Number of rows processed
    pub rows: usize,
    /// Rows priced successfully
    pub succeeded: usize,
    /// Rows reported as failures
    pub failed: usize,
}

/// Reads contract rows from CSV text.
///
/// Only an unreadable header aborts; per-row errors are kept in
/// [`BatchInput::inputs`].
pub fn parse_inputs<R: io::Read>(source: R) -> Result<Vec<BatchInput>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    // Surface a missing or malformed header as a hard error.
    reader.headers()?;

    let rows = reader
        .deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, record)| {
            let row_number = (idx + 1).to_string();
            match record {
                Ok(row) => {
                    let inputs = OptionInputs::new(
                        row.spot,
                        row.strike,
                        row.expiry,
                        row.rate,
                        row.volatility,
                    )
                    .with_dividend_yield(row.dividend_yield.unwrap_or(0.0));
                    let id = row.id.filter(|id| !id.is_empty()).unwrap_or(row_number);
                    BatchInput {
                        id,
                        inputs: Ok(inputs),
                    }
                }
                Err(err) => {
                    debug!(row = idx + 1, error = %err, "input row failed to parse");
                    BatchInput {
                        id: row_number,
                        inputs: Err(err.to_string()),
                    }
                }
            }
        })
        .collect();

    Ok(rows)
}

/// Prices every row in parallel, preserving input order.
pub fn price_batch(inputs: Vec<BatchInput>) -> Vec<BatchRow> {
    inputs
        .into_par_iter()
        .map(|input| match input.inputs {
            Ok(inputs) => BatchRow {
                id: input.id,
                result: price_inputs(&inputs),
                inputs: Some(inputs),
            },
            Err(reason) => BatchRow {
                id: input.id,
                inputs: None,
                result: PricingResult::failure_with(reason),
            },
        })
        .collect()
}

/// Writes rows as flat CSV.
///
/// The header is always written, so an input without data rows still
/// produces a non-empty report.
pub fn write_csv<W: Write>(rows: &[BatchRow], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.serialize(OutputRecord::from(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(rows: &[BatchRow], mut sink: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, rows)?;
    writeln!(sink)?;
    sink.flush()?;
    Ok(())
}

/// Prices the CSV file at `input` and writes the report into `output_dir`.
///
/// The report is named by [`output_file_name`]; `original_name` overrides
/// the stem taken from `input`. The written file must exist and be
/// non-empty, otherwise `CliError::Output` is returned.
pub fn process_file(
    input: &Path,
    original_name: Option<&str>,
    output_dir: &Path,
    format: BatchFormat,
) -> Result<BatchSummary> {
    let file = File::open(input)?;
    let inputs = parse_inputs(file)?;
    info!(path = %input.display(), rows = inputs.len(), "loaded batch input");

    let rows = price_batch(inputs);

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(output_file_name(input, original_name, format.extension()));

    {
        let sink = BufWriter::new(File::create(&output_path)?);
        match format {
            BatchFormat::Csv => write_csv(&rows, sink)?,
            BatchFormat::Json => write_json(&rows, sink)?,
        }
    }

    verify_output(&output_path)?;

    let succeeded = rows.iter().filter(|row| row.result.is_success()).count();
    let summary = BatchSummary {
        output_path,
        rows: rows.len(),
        succeeded,
        failed: rows.len() - succeeded,
    };

    info!(
        path = %summary.output_path.display(),
        rows = summary.rows,
        failed = summary.failed,
        "batch report written"
    );

    Ok(summary)
}

fn verify_output(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path)
        .map_err(|_| CliError::output(format!("{} does not exist", path.display())))?;
    if metadata.len() == 0 {
        return Err(CliError::output(format!("{} is empty", path.display())));
    }
    debug!(path = %path.display(), size = metadata.len(), "verified batch output");
    Ok(())
}
