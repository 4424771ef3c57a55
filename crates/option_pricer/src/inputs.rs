//! Pricing inputs for a single European option contract.

use serde::{Deserialize, Serialize};

use crate::black_scholes::{compute_greeks, price_call, price_put};
use crate::greeks::GreekSet;
use crate::pricer::price_inputs;
use crate::result::PricingResult;

/// The six Black-Scholes-Merton scalars for one contract.
///
/// No invariant is enforced on construction. `T <= 0` or `σ <= 0` is the
/// degenerate case (every output is zero); non-positive spot or strike
/// propagates NaN through every formula.
///
/// # Examples
/// ```
/// use option_pricer::OptionInputs;
///
/// let inputs = OptionInputs::new(100.0, 105.0, 0.5, 0.03, 0.25);
/// assert_eq!(inputs.dividend_yield, 0.0);
///
/// let with_q = inputs.with_dividend_yield(0.01);
/// assert!(with_q.price_call() < inputs.price_call());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionInputs {
    /// Spot price of the underlying (S)
    #[serde(alias = "S")]
    pub spot: f64,
    /// Strike price (K)
    #[serde(alias = "K")]
    pub strike: f64,
    /// Time to expiry in years (T)
    #[serde(alias = "T")]
    pub expiry: f64,
    /// Continuously-compounded risk-free rate (r), may be negative
    #[serde(alias = "r")]
    pub rate: f64,
    /// Annualised volatility (σ)
    #[serde(alias = "sigma")]
    pub volatility: f64,
    /// Continuous dividend yield (q)
    #[serde(alias = "q", default)]
    pub dividend_yield: f64,
}

impl OptionInputs {
    /// Creates inputs with a zero dividend yield.
    pub fn new(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            dividend_yield: 0.0,
        }
    }

    /// Sets the continuous dividend yield.
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// True when `T <= 0` or `σ <= 0`.
    ///
    /// NaN expiry or volatility is not degenerate.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.expiry <= 0.0 || self.volatility <= 0.0
    }

    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        d1(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.dividend_yield,
        )
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.volatility * self.expiry.sqrt()
    }

    /// Call price for these inputs.
    pub fn price_call(&self) -> f64 {
        price_call(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.dividend_yield,
        )
    }

    /// Put price for these inputs.
    pub fn price_put(&self) -> f64 {
        price_put(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.dividend_yield,
        )
    }

    /// Greek set for these inputs.
    pub fn greeks(&self) -> GreekSet {
        compute_greeks(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.dividend_yield,
        )
    }

    /// Aggregate result for these inputs; never panics.
    pub fn price(&self) -> PricingResult {
        price_inputs(self)
    }
}

#[inline]
pub(crate) fn d1(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    ((s / k).ln() + (r - q + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}
