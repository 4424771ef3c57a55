//! Error types for the aggregate pricing operation.
//!
//! This module provides:
//! - `PricingFault`: a fault raised while evaluating the closed forms and
//!   caught at the `price_option` boundary

use std::any::Any;

use thiserror::Error;

/// A fault caught while computing a `PricingResult`.
///
/// The display text is embedded into the failure message of the result.
///
/// # Examples
/// ```
/// use option_pricer::PricingFault;
///
/// let fault = PricingFault::Panicked("attempt to divide by zero".to_string());
/// assert_eq!(fault.to_string(), "attempt to divide by zero");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingFault {
    /// A panic carrying a string payload.
    #[error("{0}")]
    Panicked(String),

    /// A panic whose payload is not a string.
    #[error("unknown fault during pricing")]
    Unknown,
}

impl PricingFault {
    /// Builds a fault from a panic payload returned by `catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<String>() {
            Ok(msg) => Self::Panicked(*msg),
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(msg) => Self::Panicked((*msg).to_string()),
                Err(_) => Self::Unknown,
            },
        }
    }
}
