//! Batch command implementation
//!
//! Prices every row of a CSV file and writes a processed report.

use std::path::Path;

use tracing::info;

use crate::batch::{process_file, BatchFormat, BatchSummary};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the batch command
pub fn run(
    input: &str,
    original_name: Option<&str>,
    output_dir: Option<&str>,
    format: &str,
    config: &CliConfig,
) -> Result<BatchSummary> {
    let format: BatchFormat = format.parse()?;
    let input_path = Path::new(input);

    if !input_path.exists() {
        return Err(CliError::invalid_argument(format!(
            "Input file not found: {}",
            input
        )));
    }

    let output_dir = output_dir
        .map(Path::new)
        .unwrap_or(config.output_dir.as_path());

    info!("Starting batch pricing...");
    info!("  Input: {}", input);
    info!("  Output directory: {}", output_dir.display());
    info!("  Output format: {}", format.extension());

    let summary = process_file(input_path, original_name, output_dir, format)?;

    info!(
        "Batch complete: {} rows, {} succeeded, {} failed",
        summary.rows, summary.succeeded, summary.failed
    );

    Ok(summary)
}
