//! Standalone compound-interest formulas.
//!
//! These are plain `f64` functions with no validation. Degenerate inputs
//! (a zero frequency, a negative base under a fractional exponent) produce
//! NaN or infinity rather than an error; use the checked helpers or the
//! typed conversions in [`crate::conversions`] when that matters.
//!
//! # Example
//!
//! ```rust
//! use tvm_analytics::functions::*;
//!
//! assert!((future_value(1000.0, 0.10, 2.0) - 1210.0).abs() < 1e-9);
//! assert!((present_value(1210.0, 0.10, 2.0) - 1000.0).abs() < 1e-9);
//! ```

use crate::error::{AnalyticsError, AnalyticsResult};

// ============================================================================
// VALUE PROJECTION
// ============================================================================

/// Future value of `principal` after `periods` periods at `periodic_rate`.
///
/// ```text
/// FV = P * (1 + r)^n
/// ```
#[must_use]
pub fn future_value(principal: f64, periodic_rate: f64, periods: f64) -> f64 {
    principal * (1.0 + periodic_rate).powf(periods)
}

/// Present value of `amount` due in `periods` periods at `periodic_rate`.
///
/// ```text
/// PV = A * (1 + r)^(-n)
/// ```
#[must_use]
pub fn present_value(amount: f64, periodic_rate: f64, periods: f64) -> f64 {
    amount * (1.0 + periodic_rate).powf(-periods)
}

// ============================================================================
// RATE CONVERSIONS
// ============================================================================

/// Annually compounded rate that grows `initial` into `final_value` over
/// `years` years.
///
/// ```text
/// i = (F / I)^(1 / years) - 1
/// ```
#[must_use]
pub fn annual_interest(initial: f64, final_value: f64, years: f64) -> f64 {
    (final_value / initial).powf(1.0 / years) - 1.0
}

/// Effective annual rate of a nominal `rate` compounding `cap` times a year.
///
/// ```text
/// EAR = (1 + rate / cap)^cap - 1
/// ```
///
/// `cap = 1` returns `rate` unchanged. `cap = 0` is NaN.
#[must_use]
pub fn equivalent_annual_interest(rate: f64, cap: f64) -> f64 {
    compound(rate, cap, cap) - 1.0
}

/// Converts a nominal `rate` compounding `cap` times a year into the nominal
/// rate compounding `new_cap` times a year with the same annual growth.
///
/// ```text
/// r' = new_cap * ((1 + rate / cap)^(cap / new_cap) - 1)
/// ```
///
/// `cap = 0` or `new_cap = 0` is NaN.
#[must_use]
pub fn equivalent_rate(rate: f64, cap: f64, new_cap: f64) -> f64 {
    new_cap * (compound(rate, cap, cap / new_cap) - 1.0)
}

/// `(1 + rate / cap)^exponent`, NaN when the growth factor is not finite.
///
/// `powf` returns 1 for any base (NaN and infinity included) under a zero
/// exponent, so a zero `cap` has to be caught before it.
fn compound(rate: f64, cap: f64, exponent: f64) -> f64 {
    let factor = 1.0 + rate / cap;
    if factor.is_finite() {
        factor.powf(exponent)
    } else {
        f64::NAN
    }
}

// ============================================================================
// CHECKED VARIANTS
// ============================================================================

/// [`annual_interest`] with its domain enforced.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidInput` unless both amounts and `years`
/// are strictly positive.
pub fn checked_annual_interest(
    initial: f64,
    final_value: f64,
    years: f64,
) -> AnalyticsResult<f64> {
    if !(initial > 0.0 && final_value > 0.0) {
        return Err(AnalyticsError::InvalidInput(format!(
            "amounts must be positive (initial={initial}, final={final_value})"
        )));
    }
    if !(years > 0.0) {
        return Err(AnalyticsError::InvalidInput(format!(
            "years must be positive, got {years}"
        )));
    }
    finite(
        annual_interest(initial, final_value, years),
        "annual interest",
    )
}

/// [`equivalent_rate`] with its domain enforced.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidInput` for non-positive frequencies or a
/// rate at or below `-cap` (which would put a negative base under a
/// fractional power).
pub fn checked_equivalent_rate(rate: f64, cap: f64, new_cap: f64) -> AnalyticsResult<f64> {
    if !(cap > 0.0 && new_cap > 0.0) {
        return Err(AnalyticsError::InvalidInput(format!(
            "frequencies must be positive (cap={cap}, new_cap={new_cap})"
        )));
    }
    if 1.0 + rate / cap <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "rate {rate} is at or below -{cap}"
        )));
    }
    finite(equivalent_rate(rate, cap, new_cap), "equivalent rate")
}

fn finite(value: f64, what: &str) -> AnalyticsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticsError::NonFinite(format!("{what} = {value}")))
    }
}
