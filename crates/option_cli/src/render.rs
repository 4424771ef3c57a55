//! Report rendering for single-contract results.

use std::str::FromStr;

use option_pricer::{OptionInputs, PricingResult};
use serde::Serialize;

use crate::error::{CliError, Result};

const LABEL_WIDTH: usize = 14;
const VALUE_WIDTH: usize = 18;

/// Output format for the `price` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Box-drawn table
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for ReportFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            other => Err(CliError::invalid_argument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            ))),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    inputs: &'a OptionInputs,
    result: &'a PricingResult,
}

/// Renders `result` for `inputs` in the requested format.
pub fn render(
    inputs: &OptionInputs,
    result: &PricingResult,
    format: ReportFormat,
    decimals: usize,
) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(inputs, result, decimals)),
        ReportFormat::Json => render_json(inputs, result),
    }
}

/// Pretty JSON `{ "inputs": …, "result": … }`.
pub fn render_json(inputs: &OptionInputs, result: &PricingResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report { inputs, result })?)
}

/// Two-column box table of inputs, prices and Greeks.
pub fn render_table(inputs: &OptionInputs, result: &PricingResult, decimals: usize) -> String {
    let mut rows: Vec<(&str, String)> = vec![
        ("Spot (S)", fmt_value(inputs.spot, decimals)),
        ("Strike (K)", fmt_value(inputs.strike, decimals)),
        ("Expiry (T)", fmt_value(inputs.expiry, decimals)),
        ("Rate (r)", fmt_value(inputs.rate, decimals)),
        ("Vol (σ)", fmt_value(inputs.volatility, decimals)),
        ("Dividend (q)", fmt_value(inputs.dividend_yield, decimals)),
    ];

    let mut sections = vec![rows.len()];

    if let PricingResult::Success {
        call_price,
        put_price,
        greeks,
        ..
    } = result
    {
        rows.push(("Call price", fmt_value(*call_price, decimals)));
        rows.push(("Put price", fmt_value(*put_price, decimals)));
        sections.push(rows.len());
        for (name, value) in greeks.entries() {
            rows.push((name, fmt_value(value, decimals)));
        }
    }

    let horizontal = |left: char, mid: char, right: char| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(LABEL_WIDTH + 2),
            mid,
            "─".repeat(VALUE_WIDTH + 2),
            right
        )
    };

    let mut out = horizontal('┌', '┬', '┐');
    out.push('\n');
    for (idx, (label, value)) in rows.iter().enumerate() {
        if sections.contains(&idx) {
            out.push_str(&horizontal('├', '┼', '┤'));
            out.push('\n');
        }
        out.push_str(&format!(
            "│ {:<lw$} │ {:>vw$} │\n",
            label,
            value,
            lw = LABEL_WIDTH,
            vw = VALUE_WIDTH
        ));
    }
    out.push_str(&horizontal('└', '┴', '┘'));
    out.push('\n');
    out.push_str(result.message());
    out.push('\n');
    out
}

fn fmt_value(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use option_pricer::price_inputs;

    fn reference() -> (OptionInputs, PricingResult) {
        let inputs = OptionInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
        let result = price_inputs(&inputs);
        (inputs, result)
    }

    #[test]
    fn test_table_contains_prices_and_greeks() {
        let (inputs, result) = reference();
        let table = render_table(&inputs, &result, 4);
        assert!(table.contains("Call price"));
        assert!(table.contains("10.4506"));
        assert!(table.contains("5.5735"));
        assert!(table.contains("theta_call"));
        assert!(table.contains("-0.0176"));
        assert!(table.ends_with("Calculation successful\n"));
    }

    #[test]
    fn test_table_line_layout() {
        let (inputs, result) = reference();
        let table = render_table(&inputs, &result, 4);
        let lines: Vec<&str> = table.lines().collect();
        // top, 6 inputs, separator, 2 prices, separator, 8 greeks, bottom, message
        assert_eq!(lines.len(), 21);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[7].starts_with('├'));
        assert!(lines[10].starts_with('├'));
        assert!(lines[19].starts_with('└'));
        assert_eq!(lines[20], "Calculation successful");
    }

    #[test]
    fn test_table_decimals() {
        let (inputs, result) = reference();
        let table = render_table(&inputs, &result, 2);
        assert!(table.contains("10.45"));
        assert!(!table.contains("10.4506"));
    }

    #[test]
    fn test_table_failure_shows_message_only() {
        let (inputs, _) = reference();
        let failure = PricingResult::failure_with("boom");
        let table = render_table(&inputs, &failure, 4);
        assert!(!table.contains("Call price"));
        assert!(table.contains("Calculation error: boom"));
    }

    #[test]
    fn test_table_rows_are_aligned() {
        let (inputs, result) = reference();
        let table = render_table(&inputs, &result, 4);
        let widths: Vec<usize> = table
            .lines()
            .filter(|l| l.starts_with('│') || l.starts_with('┌'))
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_json_report() {
        let (inputs, result) = reference();
        let json = render(&inputs, &result, ReportFormat::Json, 4).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["inputs"]["spot"], 100.0);
        assert_eq!(value["result"]["success"], true);
        assert_eq!(value["result"]["message"], "Calculation successful");
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!("TABLE".parse::<ReportFormat>().unwrap(), ReportFormat::Table);
        assert!("csv".parse::<ReportFormat>().is_err());
    }
}
