//! Black-Scholes-Merton closed forms for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! `T <= 0` or `σ <= 0` short-circuits before any `ln`/`sqrt` is evaluated:
//! prices are exactly `0.0` and every Greek is exactly `0.0`. This is not
//! intrinsic value; callers needing intrinsic value at expiry layer it on top.
//!
//! Results are not clamped at zero, so a price may come out as a tiny
//! negative number from rounding.

use crate::distributions::{norm_cdf, norm_pdf};
use crate::greeks::{GreekSet, RHO_SCALE, THETA_DAYS_PER_YEAR, VEGA_SCALE};
use crate::inputs::d1;

/// Quantities shared by every formula for one set of valid inputs.
struct Terms {
    sqrt_t: f64,
    d1: f64,
    d2: f64,
    /// e^(-qT)
    dividend_discount: f64,
    /// e^(-rT)
    discount: f64,
}

impl Terms {
    #[inline]
    fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> Self {
        let sqrt_t = t.sqrt();
        let d1 = d1(s, k, t, r, sigma, q);
        Self {
            sqrt_t,
            d1,
            d2: d1 - sigma * sqrt_t,
            dividend_discount: (-q * t).exp(),
            discount: (-r * t).exp(),
        }
    }
}

#[inline]
fn is_degenerate(t: f64, sigma: f64) -> bool {
    t <= 0.0 || sigma <= 0.0
}

/// European call price.
///
/// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
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
/// use option_pricer::price_call;
///
/// let price = price_call(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// assert!((price - 10.4506).abs() < 1e-3);
///
/// // Expired: exactly zero, not intrinsic value
/// assert_eq!(price_call(120.0, 100.0, 0.0, 0.05, 0.2, 0.0), 0.0);
/// ```
pub fn price_call(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    if is_degenerate(t, sigma) {
        return 0.0;
    }

    let terms = Terms::new(s, k, t, r, sigma, q);
    s * terms.dividend_discount * norm_cdf(terms.d1) - k * terms.discount * norm_cdf(terms.d2)
}

/// European put price.
///
/// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
///
/// Arguments as for [`price_call`].
///
/// # Examples
/// ```
/// use option_pricer::price_put;
///
/// let price = price_put(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// assert!((price - 5.5735).abs() < 1e-3);
/// ```
pub fn price_put(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    if is_degenerate(t, sigma) {
        return 0.0;
    }

    let terms = Terms::new(s, k, t, r, sigma, q);
    k * terms.discount * norm_cdf(-terms.d2) - s * terms.dividend_discount * norm_cdf(-terms.d1)
}

/// Full Greek set for the call/put pair.
///
/// - Delta: call e^(-qT)·N(d₁), put -e^(-qT)·N(-d₁)
/// - Gamma: e^(-qT)·φ(d₁) / (S·σ·√T)
/// - Vega: S·e^(-qT)·φ(d₁)·√T / 100
/// - Theta: see below, divided by 365
/// - Rho: call K·T·e^(-rT)·N(d₂) / 100, put -K·T·e^(-rT)·N(-d₂) / 100
///
/// Call theta = -S·e^(-qT)·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·N(d₂) + q·S·e^(-qT)·N(d₁)
/// Put theta = -S·e^(-qT)·φ(d₁)·σ/(2√T) + r·K·e^(-rT)·N(-d₂) - q·S·e^(-qT)·N(-d₁)
///
/// # Examples
/// ```
/// use option_pricer::compute_greeks;
///
/// let g = compute_greeks(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// assert!((g.delta_call - 0.6368).abs() < 1e-3);
/// assert!((g.vega - 0.3752).abs() < 1e-3);
///
/// assert!(compute_greeks(100.0, 100.0, 0.0, 0.05, 0.2, 0.0).is_zero());
/// ```
pub fn compute_greeks(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> GreekSet {
    if is_degenerate(t, sigma) {
        return GreekSet::zero();
    }

    let terms = Terms::new(s, k, t, r, sigma, q);
    let pdf_d1 = norm_pdf(terms.d1);
    let n_d1 = norm_cdf(terms.d1);
    let n_minus_d1 = norm_cdf(-terms.d1);
    let n_d2 = norm_cdf(terms.d2);
    let n_minus_d2 = norm_cdf(-terms.d2);

    let spot_discounted = s * terms.dividend_discount;
    let strike_discounted = k * terms.discount;

    // -S·e^(-qT)·φ(d₁)·σ / (2√T), common to both thetas
    let time_decay = -spot_discounted * pdf_d1 * sigma / (2.0 * terms.sqrt_t);

    GreekSet {
        delta_call: terms.dividend_discount * n_d1,
        delta_put: -terms.dividend_discount * n_minus_d1,
        gamma: terms.dividend_discount * pdf_d1 / (s * sigma * terms.sqrt_t),
        vega: spot_discounted * pdf_d1 * terms.sqrt_t / VEGA_SCALE,
        theta_call: (time_decay - r * strike_discounted * n_d2 + q * spot_discounted * n_d1)
            / THETA_DAYS_PER_YEAR,
        theta_put: (time_decay + r * strike_discounted * n_minus_d2
            - q * spot_discounted * n_minus_d1)
            / THETA_DAYS_PER_YEAR,
        rho_call: k * t * terms.discount * n_d2 / RHO_SCALE,
        rho_put: -k * t * terms.discount * n_minus_d2 / RHO_SCALE,
    }
}
