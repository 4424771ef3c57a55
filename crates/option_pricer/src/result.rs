//! Result of the aggregate pricing operation.
//!
//! `PricingResult` is a tagged union: either both prices plus the Greek set,
//! or a failure message. It serialises to a flat record
//! `{ success, call_price?, put_price?, greeks?, message }` in which the
//! optional fields are present only on success.

use serde::{Deserialize, Serialize};

use crate::error::PricingFault;
use crate::greeks::GreekSet;

/// Message attached to every successful result.
pub const SUCCESS_MESSAGE: &str = "Calculation successful";

/// Prefix of every failure message.
pub const FAILURE_PREFIX: &str = "Calculation error";

/// Outcome of one `price_option` call.
///
/// # Examples
/// ```
/// use option_pricer::{price_option, PricingResult};
///
/// let result = price_option(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// match &result {
///     PricingResult::Success { call_price, put_price, .. } => {
///         assert!(call_price > put_price);
///     }
///     PricingResult::Failure { message } => panic!("{}", message),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PricingRecord", try_from = "PricingRecord")]
pub enum PricingResult {
    /// Prices and Greeks were computed.
    Success {
        /// European call price
        call_price: f64,
        /// European put price
        put_price: f64,
        /// Greek set shared by the call/put pair
        greeks: GreekSet,
        /// Human-readable confirmation
        message: String,
    },
    /// A fault occurred while computing.
    Failure {
        /// Error detail including the fault text
        message: String,
    },
}

impl PricingResult {
    /// Builds a success result with the fixed confirmation message.
    pub fn success(call_price: f64, put_price: f64, greeks: GreekSet) -> Self {
        Self::Success {
            call_price,
            put_price,
            greeks,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Builds a failure result embedding the fault text.
    pub fn failure(fault: &PricingFault) -> Self {
        Self::failure_with(fault.to_string())
    }

    /// Builds a failure result from arbitrary detail text.
    pub fn failure_with(detail: impl std::fmt::Display) -> Self {
        Self::Failure {
            message: format!("{}: {}", FAILURE_PREFIX, detail),
        }
    }

    /// True for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Call price, present iff success.
    pub fn call_price(&self) -> Option<f64> {
        match self {
            Self::Success { call_price, .. } => Some(*call_price),
            Self::Failure { .. } => None,
        }
    }

    /// Put price, present iff success.
    pub fn put_price(&self) -> Option<f64> {
        match self {
            Self::Success { put_price, .. } => Some(*put_price),
            Self::Failure { .. } => None,
        }
    }

    /// Greek set, present iff success.
    pub fn greeks(&self) -> Option<&GreekSet> {
        match self {
            Self::Success { greeks, .. } => Some(greeks),
            Self::Failure { .. } => None,
        }
    }

    /// Status or error message.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message } => message,
        }
    }
}

/// Flat wire form of `PricingResult`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PricingRecord {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    call_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    put_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    greeks: Option<GreekSet>,
    message: String,
}

impl From<PricingResult> for PricingRecord {
    fn from(result: PricingResult) -> Self {
        match result {
            PricingResult::Success {
                call_price,
                put_price,
                greeks,
                message,
            } => Self {
                success: true,
                call_price: Some(call_price),
                put_price: Some(put_price),
                greeks: Some(greeks),
                message,
            },
            PricingResult::Failure { message } => Self {
                success: false,
                call_price: None,
                put_price: None,
                greeks: None,
                message,
            },
        }
    }
}

impl TryFrom<PricingRecord> for PricingResult {
    type Error = String;

    fn try_from(record: PricingRecord) -> Result<Self, Self::Error> {
        if !record.success {
            return Ok(Self::Failure {
                message: record.message,
            });
        }

        match (record.call_price, record.put_price, record.greeks) {
            (Some(call_price), Some(put_price), Some(greeks)) => Ok(Self::Success {
                call_price,
                put_price,
                greeks,
                message: record.message,
            }),
            _ => Err("successful result requires call_price, put_price and greeks".to_string()),
        }
    }
}
