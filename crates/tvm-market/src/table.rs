//! Benchmark rate table.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tvm_core::types::Date;

use crate::error::{MarketDataError, MarketResult};
use crate::tenor::Tenor;

/// CETES yields by tenor, as published (percent, nominal annual).
///
/// A table always holds every tenor in [`Tenor::ALL`]. It is immutable;
/// refreshing means fetching a new table from a
/// [`BenchmarkSource`](crate::source::BenchmarkSource).
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use tvm_market::{BenchmarkTable, Tenor};
///
/// let table = BenchmarkTable::new(dec!(10.25), dec!(10.40), dec!(10.55), "manual");
/// assert_eq!(table.rate(Tenor::Days91), dec!(10.40));
/// assert!(table.rate_for_days(364).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkTable {
    rates: BTreeMap<Tenor, Decimal>,
    as_of: Option<Date>,
    source: String,
}

impl BenchmarkTable {
    /// Creates a table from the three published yields.
    pub fn new(
        rate_28: Decimal,
        rate_91: Decimal,
        rate_182: Decimal,
        source: impl Into<String>,
    ) -> Self {
        let rates = Tenor::ALL
            .into_iter()
            .zip([rate_28, rate_91, rate_182])
            .collect();
        Self {
            rates,
            as_of: None,
            source: source.into(),
        }
    }

    /// Builds a table from `(tenor, rate)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::TenorNotFound` if any supported tenor is
    /// missing from `pairs`.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (Tenor, Decimal)>,
        source: impl Into<String>,
    ) -> MarketResult<Self> {
        let rates: BTreeMap<Tenor, Decimal> = pairs.into_iter().collect();
        if let Some(missing) = Tenor::ALL.into_iter().find(|t| !rates.contains_key(t)) {
            return Err(MarketDataError::TenorNotFound(missing.days()));
        }
        Ok(Self {
            rates,
            as_of: None,
            source: source.into(),
        })
    }

    /// Sets the observation date.
    #[must_use]
    pub fn with_as_of(mut self, as_of: Date) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Published yield for `tenor`, in percent.
    #[must_use]
    pub fn rate(&self, tenor: Tenor) -> Decimal {
        // Every tenor is present by construction.
        self.rates.get(&tenor).copied().unwrap_or_default()
    }

    /// Published yield for a tenor given in days, in percent.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::TenorNotFound` for unsupported day counts.
    pub fn rate_for_days(&self, days: u32) -> MarketResult<Decimal> {
        Tenor::from_days(days).map(|tenor| self.rate(tenor))
    }

    /// Yield for `tenor` as a decimal fraction (`0.1025` for 10.25%).
    #[must_use]
    pub fn fraction(&self, tenor: Tenor) -> f64 {
        self.rate(tenor).to_f64().unwrap_or(f64::NAN) / 100.0
    }

    /// Observation date, when the source reports one.
    #[must_use]
    pub fn as_of(&self) -> Option<Date> {
        self.as_of
    }

    /// Label of the source that produced this table.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Iterates over `(tenor, rate)` pairs, shortest tenor first.
    pub fn iter(&self) -> impl Iterator<Item = (Tenor, Decimal)> + '_ {
        self.rates.iter().map(|(t, r)| (*t, *r))
    }
}

/// On-disk form of a [`BenchmarkTable`].
///
/// ```json
/// { "as_of": "2024-10-10", "source": "eod", "rates": { "28": 10.25, "91": 10.40, "182": 10.55 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRecord {
    /// Observation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<Date>,
    /// Source label
    #[serde(default = "default_record_source")]
    pub source: String,
    /// Yields in percent, keyed by tenor in days
    pub rates: BTreeMap<String, Decimal>,
}

fn default_record_source() -> String {
    "file".to_string()
}

impl TryFrom<TableRecord> for BenchmarkTable {
    type Error = MarketDataError;

    fn try_from(record: TableRecord) -> Result<Self, Self::Error> {
        let pairs = record
            .rates
            .iter()
            .map(|(key, rate)| Tenor::from_str(key).map(|tenor| (tenor, *rate)))
            .collect::<MarketResult<Vec<_>>>()?;
        let table = BenchmarkTable::from_pairs(pairs, record.source)?;
        Ok(match record.as_of {
            Some(date) => table.with_as_of(date),
            None => table,
        })
    }
}

impl From<&BenchmarkTable> for TableRecord {
    fn from(table: &BenchmarkTable) -> Self {
        Self {
            as_of: table.as_of,
            source: table.source.clone(),
            rates: table
                .iter()
                .map(|(tenor, rate)| (tenor.days().to_string(), rate))
                .collect(),
        }
    }
}
