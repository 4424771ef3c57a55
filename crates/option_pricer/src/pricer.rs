//! Aggregate pricing entry point.
//!
//! `price_option` evaluates the call price, the put price and the Greek set
//! and wraps them into one `PricingResult`. Unlike the single-purpose
//! functions in `black_scholes`, it never lets a fault escape: any panic
//! raised while evaluating the formulas is caught and turned into
//! `PricingResult::Failure`.
//!
//! NaN is not a fault. Non-positive spot or strike yields a `Success` whose
//! fields are NaN.

use std::panic::{self, UnwindSafe};

use tracing::{debug, warn};

use crate::black_scholes::{compute_greeks, price_call, price_put};
use crate::error::PricingFault;
use crate::inputs::OptionInputs;
use crate::result::PricingResult;

/// Prices one European call/put pair and its Greeks.
///
/// # Arguments
/// * `s` - Spot price
/// * `k` - Strike price
/// * `t` - Time to expiry in years
/// * `r` - Risk-free rate
/// * `sigma` - Volatility
/// * `q` - Continuous dividend yield (pass `0.0` for none)
///
/// # Examples
/// ```
/// use option_pricer::price_option;
///
/// let result = price_option(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// assert!(result.is_success());
/// assert_eq!(result.message(), "Calculation successful");
///
/// // Garbage in, NaN out: still a returned value
/// let nan = price_option(-1.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// assert!(nan.call_price().map_or(true, f64::is_nan));
/// ```
pub fn price_option(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> PricingResult {
    debug!(s, k, t, r, sigma, q, "pricing option");

    evaluate_guarded(move || {
        let call_price = price_call(s, k, t, r, sigma, q);
        let put_price = price_put(s, k, t, r, sigma, q);
        let greeks = compute_greeks(s, k, t, r, sigma, q);
        PricingResult::success(call_price, put_price, greeks)
    })
}

/// `price_option` over an `OptionInputs` record.
pub fn price_inputs(inputs: &OptionInputs) -> PricingResult {
    price_option(
        inputs.spot,
        inputs.strike,
        inputs.expiry,
        inputs.rate,
        inputs.volatility,
        inputs.dividend_yield,
    )
}

/// Runs `compute`, mapping a panic into `PricingResult::Failure`.
pub(crate) fn evaluate_guarded<F>(compute: F) -> PricingResult
where
    F: FnOnce() -> PricingResult + UnwindSafe,
{
    match panic::catch_unwind(compute) {
        Ok(result) => result,
        Err(payload) => {
            let fault = PricingFault::from_panic(payload);
            warn!(%fault, "pricing fault converted to failure result");
            PricingResult::failure(&fault)
        }
    }
}
