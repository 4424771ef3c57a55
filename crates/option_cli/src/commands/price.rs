//! Price command implementation
//!
//! Prices a single contract given on the command line.

use option_pricer::{price_inputs, OptionInputs, PricingResult};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::render::{render, ReportFormat};
use crate::{CliError, Result};

/// Rendered report together with the result it was rendered from
#[derive(Debug, Clone)]
pub struct PriceOutcome {
    /// Text to print
    pub report: String,
    /// Underlying pricing result
    pub result: PricingResult,
}

impl PriceOutcome {
    /// Maps a `Failure` result to `CliError::Pricing`.
    pub fn ensure_success(&self) -> Result<()> {
        if self.result.is_success() {
            Ok(())
        } else {
            Err(CliError::Pricing(self.result.message().to_string()))
        }
    }
}

/// Run the price command
///
/// A `Failure` result is still rendered; the caller decides the exit code.
pub fn run(inputs: &OptionInputs, format: &str, config: &CliConfig) -> Result<PriceOutcome> {
    let format: ReportFormat = format.parse()?;

    info!(
        spot = inputs.spot,
        strike = inputs.strike,
        expiry = inputs.expiry,
        "Pricing single contract"
    );

    if inputs.is_degenerate() {
        info!("Expiry or volatility is non-positive; all outputs are zero");
    }

    let result = price_inputs(inputs);
    if !result.is_success() {
        warn!(message = result.message(), "Pricing failed");
    }

    let report = render(inputs, &result, format, config.decimals)?;
    Ok(PriceOutcome { report, result })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_table() {
        let inputs = OptionInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
        let outcome = run(&inputs, "table", &CliConfig::default()).unwrap();
        assert!(outcome.ensure_success().is_ok());
        assert!(outcome.report.contains("10.4506"));
    }

    #[test]
    fn test_run_json() {
        let inputs = OptionInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
        let outcome = run(&inputs, "json", &CliConfig::default()).unwrap();
        assert!(outcome.report.trim_start().starts_with('{'));
    }

    #[test]
    fn test_run_rejects_unknown_format() {
        let inputs = OptionInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
        let err = run(&inputs, "xml", &CliConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_failure_maps_to_pricing_error() {
        let outcome = PriceOutcome {
            report: String::new(),
            result: PricingResult::failure_with("boom"),
        };
        let err = outcome.ensure_success().unwrap_err();
        assert_eq!(err.to_string(), "Pricing failed: Calculation error: boom");
    }
}
