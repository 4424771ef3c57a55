//! # option_pricer: Closed-Form European Option Pricing
//!
//! Black-Scholes-Merton valuation of European calls and puts together with
//! the associated sensitivities ("Greeks").
//!
//! This crate provides:
//! - Standard normal CDF/PDF (`distributions`)
//! - The six-scalar input record `OptionInputs` (`inputs`)
//! - Call/put prices and the full Greek set (`black_scholes`, `greeks`)
//! - A non-panicking aggregate entry point returning `PricingResult` (`pricer`, `result`)
//!
//! ## Model Assumptions
//!
//! Constant volatility, constant risk-free rate, continuous dividend yield,
//! log-normal underlying, frictionless markets. One contract per call.
//!
//! ## Degenerate Inputs
//!
//! When `T <= 0` or `σ <= 0` every price and every Greek is exactly `0.0`.
//! Non-positive spot or strike is not validated and propagates NaN.
//!
//! ## Usage Examples
//!
//! ```rust
//! use option_pricer::{price_option, OptionInputs};
//!
//! let result = price_option(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
//! assert!(result.is_success());
//! assert!((result.call_price().unwrap() - 10.4506).abs() < 1e-3);
//!
//! let inputs = OptionInputs::new(100.0, 100.0, 1.0, 0.05, 0.2).with_dividend_yield(0.02);
//! let greeks = inputs.greeks();
//! assert!(greeks.delta_call > 0.0);
//! ```
//!
//! ## Thread Safety
//!
//! Every function is pure over `f64` scalars; calls may be issued from any
//! number of threads without coordination.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;
pub mod inputs;
pub mod pricer;
pub mod result;

pub use black_scholes::{compute_greeks, price_call, price_put};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::PricingFault;
pub use greeks::{GreekSet, OptionType};
pub use inputs::OptionInputs;
pub use pricer::{price_inputs, price_option};
pub use result::PricingResult;
