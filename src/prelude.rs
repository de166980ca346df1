//! # FinTools Prelude
//!
//! Conveniently re-exports the most common types and functions for time-value-of-money calculations.
//! Import this module to access all primary FinTools features with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use fintools::prelude::*;
//! let eff = effective_annual_rate(0.05, 12.0)?;
//! let fv = compound_interest()
//!     .principal(10_000.0)
//!     .i(eff)
//!     .t(3.0)
//!     .call()?;
//! println!("{} grows to {}", format_currency(10_000.0, "$"), format_currency(fv, "$"));
//! # FinToolsResult::Ok(())
//! ```

// Package Result type for FinTools functions
pub use crate::FinToolsResult;

// Interest rate conversion functions
pub use crate::int_rate_convert::*;

// Compounding and discounting
pub use crate::compounding::*;

// Display helpers
pub use crate::format::{format_currency, format_percentage};
