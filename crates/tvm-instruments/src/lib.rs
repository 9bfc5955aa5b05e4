//! # TVM Instruments
//!
//! Debt instruments valued against the CETES risk-free benchmark.
//!
//! A [`Debt`] is built from an issue date, a maturity date, a principal, a
//! reference [`Rate`](tvm_core::Rate) and a
//! [`BenchmarkTable`](tvm_market::BenchmarkTable). The table is injected:
//! fetch it once from any [`BenchmarkSource`](tvm_market::BenchmarkSource)
//! and share it across instruments.
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tvm_instruments::prelude::*;
//!
//! let source = StaticBenchmarkSource::new(
//!     BenchmarkTable::new(dec!(10.25), dec!(10.40), dec!(10.55), "manual"),
//! );
//!
//! let debt = Debt::builder()
//!     .issue_date(Date::parse("Jan 15 2024").unwrap())
//!     .maturity_date(Date::parse("Jan 15 2025").unwrap())
//!     .principal(10_000.0)
//!     .reference_rate(Rate::new(0.12, Frequency::Monthly).unwrap())
//!     .benchmarks_from(&source)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! // 12% monthly beats a ~10.8% effective CETES yield
//! assert!(debt.risk_free_spread(28).unwrap() > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

pub mod debt;
pub mod error;

pub use debt::{Debt, DebtBuilder, DebtSummary};
pub use error::{InstrumentError, InstrumentResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::debt::{Debt, DebtBuilder, DebtSummary};
    pub use crate::error::{InstrumentError, InstrumentResult};
    pub use tvm_analytics::conversions::RateConversions;
    pub use tvm_core::types::{Date, Frequency, Rate};
    pub use tvm_market::{BenchmarkSource, BenchmarkTable, StaticBenchmarkSource, Tenor};
}
