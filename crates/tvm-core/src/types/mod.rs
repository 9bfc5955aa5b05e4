//! Domain types for time-value-of-money analytics.
//!
//! - [`Date`]: Calendar date, shown as `Jan 15 2024`
//! - [`Frequency`]: Compounding periods per year
//! - [`Rate`]: Nominal annual rate with its compounding frequency

mod date;
mod frequency;
mod rate;

pub use date::{Date, DISPLAY_FORMAT, ISO_FORMAT};
pub use frequency::Frequency;
pub use rate::Rate;
