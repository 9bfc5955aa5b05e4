//! # TVM Market
//!
//! Risk-free benchmark rates for the TVM analytics library: the yields of
//! Mexican federal treasury certificates (CETES) at 28, 91 and 182 days.
//!
//! ## Sources
//!
//! - [`SieApiSource`]: Banxico SIE REST API (JSON, token required)
//! - [`LegacyPageSource`]: scraper for the Banxico CF107 HTML page
//! - [`JsonFileBenchmarkSource`]: a table stored as JSON
//! - [`StaticBenchmarkSource`]: a table supplied in memory
//!
//! Every source implements [`BenchmarkSource`] and returns an immutable
//! [`BenchmarkTable`]. Instruments receive that table at construction
//! instead of fetching it themselves:
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tvm_market::{BenchmarkSource, BenchmarkTable, StaticBenchmarkSource, Tenor};
//!
//! let source = StaticBenchmarkSource::new(BenchmarkTable::new(
//!     dec!(10.25),
//!     dec!(10.40),
//!     dec!(10.55),
//!     "manual",
//! ));
//! let table = source.fetch().unwrap();
//! assert_eq!(table.rate(Tenor::Days28), dec!(10.25));
//! ```
//!
//! [`BenchmarkConfig`] builds any of these from TOML.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod legacy;
pub mod sie;
pub mod source;
pub mod table;
pub mod tenor;

pub use config::{BenchmarkConfig, ProviderKind, StaticRates};
pub use error::{MarketDataError, MarketResult};
pub use legacy::LegacyPageSource;
pub use sie::SieApiSource;
pub use source::{BenchmarkSource, JsonFileBenchmarkSource, SourceType, StaticBenchmarkSource};
pub use table::{BenchmarkTable, TableRecord};
pub use tenor::Tenor;
