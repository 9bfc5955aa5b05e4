//! Compounding conversions on typed [`Rate`] values.
//!
//! [`RateConversions`] wraps the raw formulas in [`crate::functions`] so the
//! frequencies always come from a [`Frequency`], which cannot be zero.

use tvm_core::types::{Frequency, Rate};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::functions::{checked_equivalent_rate, equivalent_annual_interest};

/// Frequency conversions for nominal rates.
///
/// # Example
///
/// ```rust
/// use tvm_analytics::conversions::RateConversions;
/// use tvm_core::types::{Frequency, Rate};
///
/// let monthly = Rate::new(0.12, Frequency::Monthly).unwrap();
/// let annual = monthly.to_frequency(Frequency::Annual).unwrap();
/// assert!((annual.value() - monthly.effective_annual()).abs() < 1e-12);
/// ```
pub trait RateConversions {
    /// The same annual growth expressed as a nominal rate at `target`.
    fn to_frequency(&self, target: Frequency) -> AnalyticsResult<Rate>;

    /// Effective annual rate, `(1 + r/m)^m - 1`.
    fn effective_annual(&self) -> f64;

    /// Rate earned per compounding period, `r/m`.
    fn periodic(&self) -> f64;

    /// Rate earned per period once re-expressed at `target`.
    fn periodic_at(&self, target: Frequency) -> AnalyticsResult<f64> {
        Ok(self.to_frequency(target)?.periodic())
    }
}

impl RateConversions for Rate {
    fn to_frequency(&self, target: Frequency) -> AnalyticsResult<Rate> {
        if target == self.frequency() {
            return Ok(*self);
        }
        let value = checked_equivalent_rate(self.value(), self.cap(), target.as_f64())?;
        Rate::new(value, target).map_err(|e| AnalyticsError::NonFinite(e.to_string()))
    }

    fn effective_annual(&self) -> f64 {
        equivalent_annual_interest(self.value(), self.cap())
    }

    fn periodic(&self) -> f64 {
        self.value() / self.cap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_same_frequency_is_identity() {
        let rate = Rate::new(0.0725, Frequency::Quarterly).unwrap();
        assert_eq!(rate.to_frequency(Frequency::Quarterly).unwrap(), rate);
    }

    #[test]
    fn test_monthly_to_daily() {
        let monthly = Rate::new(0.01, Frequency::Monthly).unwrap();
        let daily = monthly.to_frequency(Frequency::Daily).unwrap();

        assert_eq!(daily.frequency(), Frequency::Daily);
        assert!(daily.value() < monthly.value());
        assert_relative_eq!(
            daily.effective_annual(),
            monthly.effective_annual(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_periodic() {
        let rate = Rate::new(0.12, Frequency::Monthly).unwrap();
        assert_relative_eq!(rate.periodic(), 0.01, epsilon = 1e-15);

        let quarterly = rate.periodic_at(Frequency::Quarterly).unwrap();
        assert_relative_eq!(quarterly, 1.01_f64.powi(3) - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_below_minus_cap_fails() {
        let rate = Rate::new(-2.0, Frequency::Annual).unwrap();
        assert!(rate.to_frequency(Frequency::Monthly).is_err());
    }
}
