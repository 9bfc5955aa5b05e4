//! # TVM Core
//!
//! Core types for the TVM time-value-of-money library.
//!
//! This crate provides the foundational building blocks used by the rest of
//! the workspace:
//!
//! - **Types**: `Date`, `Frequency` and `Rate`
//! - **Errors**: `CoreError` with a `CoreResult` alias
//!
//! ## Example
//!
//! ```rust
//! use tvm_core::prelude::*;
//!
//! let issue = Date::parse("Jan 15 2024").unwrap();
//! let rate = Rate::new(0.01, "monthly".parse::<Frequency>().unwrap()).unwrap();
//! assert_eq!(rate.cap(), 12.0);
//! assert_eq!(issue.year(), 2024);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Frequency, Rate};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency, Rate};
