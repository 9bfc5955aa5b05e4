//! Nominal interest rate with its compounding frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Frequency;
use crate::error::{CoreError, CoreResult};

/// A nominal annual rate paired with the number of times it compounds per
/// year.
///
/// The value is a decimal fraction (`0.01` for 1%). The frequency is always
/// positive because [`Frequency`] cannot hold zero.
///
/// # Example
///
/// ```rust
/// use tvm_core::types::{Frequency, Rate};
///
/// let rate = Rate::new(0.01, Frequency::Monthly).unwrap();
/// assert_eq!(rate.value(), 0.01);
/// assert_eq!(rate.frequency().periods_per_year(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    value: f64,
    frequency: Frequency,
}

impl Rate {
    /// Creates a new rate.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRate` if `value` is NaN or infinite.
    pub fn new(value: f64, frequency: Frequency) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::invalid_rate(value, "rate must be finite"));
        }
        Ok(Self { value, frequency })
    }

    /// Creates a rate from a percentage (`7.25` for 7.25%).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRate` if `percent` is NaN or infinite.
    pub fn from_percent(percent: f64, frequency: Frequency) -> CoreResult<Self> {
        Self::new(percent / 100.0, frequency)
    }

    /// Nominal annual value as a decimal fraction.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Nominal annual value as a percentage.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.value * 100.0
    }

    /// Compounding frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Compounding periods per year as a float.
    #[must_use]
    pub fn cap(&self) -> f64 {
        self.frequency.as_f64()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}% {}", self.percent(), self.frequency)
    }
}
