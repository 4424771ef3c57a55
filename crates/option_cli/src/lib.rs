//! # option_cli: Command-Line Adapter for option_pricer
//!
//! Feeds scalar inputs into `option_pricer::price_option` and renders the
//! resulting `PricingResult`s.
//!
//! # Commands
//!
//! - `option-pricer price --spot .. --strike .. --expiry .. --rate .. --volatility ..`
//!   prices one contract and prints a table or JSON report
//! - `option-pricer batch --input quotes.csv` prices every CSV row and writes
//!   `quotes_processed.csv` (or `.json`)
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate owns all file, terminal and
//! environment I/O; the pricer crate stays pure.

#![deny(missing_docs)]

pub mod batch;
pub mod commands;
pub mod config;
pub mod error;
pub mod naming;
pub mod render;

pub use error::{CliError, Result};
