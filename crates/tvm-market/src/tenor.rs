//! Benchmark tenors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MarketDataError, MarketResult};

/// Day-count basis of the published CETES yields.
pub const YEAR_BASIS_DAYS: u32 = 360;

/// Maturity of a CETES benchmark issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Tenor {
    /// 28-day CETES
    Days28,
    /// 91-day CETES
    Days91,
    /// 182-day CETES
    Days182,
}

impl Tenor {
    /// All supported tenors, shortest first.
    pub const ALL: [Tenor; 3] = [Tenor::Days28, Tenor::Days91, Tenor::Days182];

    /// Looks up a tenor by its length in days.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::TenorNotFound` for anything but 28, 91 or 182.
    pub fn from_days(days: u32) -> MarketResult<Self> {
        Tenor::ALL
            .into_iter()
            .find(|t| t.days() == days)
            .ok_or(MarketDataError::TenorNotFound(days))
    }

    /// Length of the tenor in days.
    #[must_use]
    pub fn days(&self) -> u32 {
        match self {
            Tenor::Days28 => 28,
            Tenor::Days91 => 91,
            Tenor::Days182 => 182,
        }
    }

    /// How many times a year the yield compounds when rolled at maturity,
    /// on a 360-day year.
    #[must_use]
    pub fn compounding_per_year(&self) -> f64 {
        f64::from(YEAR_BASIS_DAYS) / f64::from(self.days())
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.days())
    }
}

impl FromStr for Tenor {
    type Err = MarketDataError;

    /// Accepts `28`, `28d` or `28D`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches(['d', 'D']);
        let days = digits
            .parse::<u32>()
            .map_err(|_| MarketDataError::Parse(format!("invalid tenor: {s}")))?;
        Tenor::from_days(days)
    }
}

impl TryFrom<u32> for Tenor {
    type Error = MarketDataError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Tenor::from_days(days)
    }
}

impl From<Tenor> for u32 {
    fn from(tenor: Tenor) -> Self {
        tenor.days()
    }
}
