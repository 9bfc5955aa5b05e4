//! # TVM Analytics
//!
//! Time-value-of-money calculations.
//!
//! - **Functions**: future value, present value, implied annual interest and
//!   compounding-frequency conversions on plain `f64` inputs
//! - **Conversions**: the same conversions on typed [`tvm_core::Rate`] values
//!
//! ## Usage
//!
//! ```rust
//! use tvm_analytics::prelude::*;
//! use tvm_core::types::{Frequency, Rate};
//!
//! let rate = Rate::new(0.01, Frequency::Monthly).unwrap();
//! let daily = rate.periodic_at(Frequency::Daily).unwrap();
//! let maturity_value = future_value(10_000.0, daily, 366.0);
//! assert!(maturity_value > 10_000.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod conversions;
pub mod error;
pub mod functions;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::conversions::RateConversions;
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::functions::{
        annual_interest, equivalent_annual_interest, equivalent_rate, future_value,
        present_value,
    };
}
