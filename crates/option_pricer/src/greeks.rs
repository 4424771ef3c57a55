//! Option Greeks.
//!
//! First and second order sensitivities for a European call/put pair
//! written on the same inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Vega is reported per one percentage point of volatility.
pub const VEGA_SCALE: f64 = 100.0;

/// Rho is reported per one percentage point of the risk-free rate.
pub const RHO_SCALE: f64 = 100.0;

/// Theta is reported per calendar day.
pub const THETA_DAYS_PER_YEAR: f64 = 365.0;

/// Option payoff side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl FromStr for OptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(format!("Unknown option type: {}. Expected call or put", s)),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Full Black-Scholes-Merton Greek set for a call/put pair.
///
/// Gamma and vega are identical for the call and the put and are stored once.
///
/// # Units
/// - `vega`: price change per 1 percentage point of volatility
/// - `theta_*`: price change per calendar day
/// - `rho_*`: price change per 1 percentage point of the rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GreekSet {
    /// Call delta: e^(-qT)·N(d₁)
    pub delta_call: f64,
    /// Put delta: -e^(-qT)·N(-d₁)
    pub delta_put: f64,
    /// Gamma (shared)
    pub gamma: f64,
    /// Vega (shared), per 1% volatility
    pub vega: f64,
    /// Call theta, per day
    pub theta_call: f64,
    /// Put theta, per day
    pub theta_put: f64,
    /// Call rho, per 1% rate
    pub rho_call: f64,
    /// Put rho, per 1% rate
    pub rho_put: f64,
}

impl GreekSet {
    /// The all-zero set returned for degenerate inputs.
    pub const fn zero() -> Self {
        Self {
            delta_call: 0.0,
            delta_put: 0.0,
            gamma: 0.0,
            vega: 0.0,
            theta_call: 0.0,
            theta_put: 0.0,
            rho_call: 0.0,
            rho_put: 0.0,
        }
    }

    /// Delta for the given side.
    pub fn delta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.delta_call,
            OptionType::Put => self.delta_put,
        }
    }

    /// Theta for the given side.
    pub fn theta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.theta_call,
            OptionType::Put => self.theta_put,
        }
    }

    /// Rho for the given side.
    pub fn rho(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.rho_call,
            OptionType::Put => self.rho_put,
        }
    }

    /// True when every field is exactly zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Field names paired with values, in declaration order.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("delta_call", self.delta_call),
            ("delta_put", self.delta_put),
            ("gamma", self.gamma),
            ("vega", self.vega),
            ("theta_call", self.theta_call),
            ("theta_put", self.theta_put),
            ("rho_call", self.rho_call),
            ("rho_put", self.rho_put),
        ]
    }
}
