//! Property-based tests for the closed-form pricer.
//!
//! Covers put-call parity, monotonicity, shared gamma/vega and the
//! non-panicking contract of `price_option`.

use option_pricer::{compute_greeks, price_call, price_option, price_put, OptionInputs};
use proptest::prelude::*;

fn spot_strategy() -> impl Strategy<Value = f64> {
    1.0..1_000.0
}

fn expiry_strategy() -> impl Strategy<Value = f64> {
    0.01..10.0
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    -0.05..0.20
}

fn volatility_strategy() -> impl Strategy<Value = f64> {
    0.01..2.0
}

fn dividend_strategy() -> impl Strategy<Value = f64> {
    0.0..0.10
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_put_call_parity(
        s in spot_strategy(),
        k in spot_strategy(),
        t in expiry_strategy(),
        r in rate_strategy(),
        sigma in volatility_strategy(),
        q in dividend_strategy(),
    ) {
        let call = price_call(s, k, t, r, sigma, q);
        let put = price_put(s, k, t, r, sigma, q);
        let forward = s * (-q * t).exp() - k * (-r * t).exp();
        let scale = s.max(k);
        prop_assert!(
            (call - put - forward).abs() <= 1e-9 * scale,
            "parity violated: C - P = {}, forward = {}", call - put, forward
        );
    }

    #[test]
    fn test_call_non_decreasing_in_spot(
        s in spot_strategy(),
        bump in 0.01..0.5_f64,
        k in spot_strategy(),
        t in expiry_strategy(),
        r in rate_strategy(),
        sigma in volatility_strategy(),
        q in dividend_strategy(),
    ) {
        let low = price_call(s, k, t, r, sigma, q);
        let high = price_call(s * (1.0 + bump), k, t, r, sigma, q);
        prop_assert!(high >= low - 1e-9 * s.max(k), "{} < {}", high, low);
    }

    #[test]
    fn test_put_non_decreasing_in_strike(
        s in spot_strategy(),
        k in spot_strategy(),
        bump in 0.01..0.5_f64,
        t in expiry_strategy(),
        r in rate_strategy(),
        sigma in volatility_strategy(),
        q in dividend_strategy(),
    ) {
        let low = price_put(s, k, t, r, sigma, q);
        let high = price_put(s, k * (1.0 + bump), t, r, sigma, q);
        prop_assert!(high >= low - 1e-9 * s.max(k), "{} < {}", high, low);
    }

    #[test]
    fn test_prices_non_decreasing_in_volatility(
        s in spot_strategy(),
        k in spot_strategy(),
        t in expiry_strategy(),
        r in rate_strategy(),
        sigma in volatility_strategy(),
        bump in 0.01..0.5_f64,
        q in dividend_strategy(),
    ) {
        let tolerance = 1e-9 * s.max(k);
        prop_assert!(
            price_call(s, k, t, r, sigma + bump, q) >= price_call(s, k, t, r, sigma, q) - tolerance
        );
        prop_assert!(
            price_put(s, k, t, r, sigma + bump, q) >= price_put(s, k, t, r, sigma, q) - tolerance
        );
    }

    #[test]
    fn test_gamma_vega_shared_between_sides(
        s in spot_strategy(),
        k in spot_strategy(),
        t in expiry_strategy(),
        r in rate_strategy(),
        sigma in volatility_strategy(),
        q in dividend_strategy(),
    ) {
        let g = compute_greeks(s, k, t, r, sigma, q);
        prop_assert!(g.gamma >= 0.0);
        prop_assert!(g.vega >= 0.0);
        // Δc - Δp = e^(-qT)
        prop_assert!((g.delta_call - g.delta_put - (-q * t).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_price_option_never_panics(
        s in -1e6..1e6_f64,
        k in -1e6..1e6_f64,
        t in -10.0..10.0_f64,
        r in -1.0..1.0_f64,
        sigma in -2.0..2.0_f64,
        q in -1.0..1.0_f64,
    ) {
        let result = price_option(s, k, t, r, sigma, q);
        if result.is_success() {
            prop_assert!(result.call_price().is_some());
            prop_assert!(result.put_price().is_some());
            prop_assert!(result.greeks().is_some());
        } else {
            prop_assert!(!result.message().is_empty());
        }
    }

    #[test]
    fn test_degenerate_inputs_give_zero(
        s in spot_strategy(),
        k in spot_strategy(),
        t in -5.0..=0.0_f64,
        r in rate_strategy(),
        sigma in volatility_strategy(),
    ) {
        let inputs = OptionInputs::new(s, k, t, r, sigma);
        prop_assert_eq!(inputs.price_call(), 0.0);
        prop_assert_eq!(inputs.price_put(), 0.0);
        prop_assert!(inputs.greeks().is_zero());
    }
}

#[test]
fn test_price_option_handles_non_finite_inputs() {
    for (s, k, t, sigma) in [
        (f64::NAN, 100.0, 1.0, 0.2),
        (100.0, 0.0, 1.0, 0.2),
        (f64::INFINITY, 100.0, 1.0, 0.2),
        (100.0, 100.0, f64::INFINITY, 0.2),
        (100.0, 100.0, 1.0, f64::NAN),
    ] {
        let result = price_option(s, k, t, 0.05, sigma, 0.0);
        assert!(result.is_success(), "unexpected failure: {}", result.message());
    }
}

#[test]
fn test_concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let k = 80.0 + 5.0 * i as f64;
                (k, price_option(100.0, k, 1.0, 0.05, 0.2, 0.0))
            })
        })
        .collect();

    for handle in handles {
        let (k, result) = handle.join().unwrap();
        assert_eq!(result, price_option(100.0, k, 1.0, 0.05, 0.2, 0.0));
    }
}
