//! # FinTools
//!
//! A small, type-safe Rust library for time-value-of-money calculations.
//!
//! ## Features
//! - **Rate Conversions**: effective annual <-> effective monthly, nominal <-> effective annual
//! - **Compounding**: discrete compounding at any frequency, and continuous compounding
//! - **Discounting**: present value as the exact inverse of compound growth
//! - **Builder Pattern**: operations with defaulted parameters use builders with automatic parameter validation
//!
//! ## Quick Start
//!
//! ```rust
//! use fintools::prelude::*;
//!
//! // Monthly rate equivalent to 5% a year (not 5% / 12)
//! let monthly = annual_to_monthly_rate(0.05)?;
//!
//! // 1,000,000 at 5% for 10 years, compounded monthly
//! let fv = compound_interest()
//!     .principal(1_000_000.0)
//!     .i(0.05)
//!     .t(10.0)
//!     .m(12.0)
//!     .call()?;
//!
//! // What is 2,000,000 in 10 years worth today at 5%? (annual compounding by default)
//! let pv = present_value().fv(2_000_000.0).i(0.05).t(10.0).call()?;
//!
//! println!("Monthly rate: {:.6}", monthly);
//! println!("Future value: {:.2}", fv);
//! println!("Present value: {:.2}", pv);
//! # FinToolsResult::Ok(())
//! ```
//!
//! ## Supported Functions
//!
//! - **Rate Conversions**: `annual_to_monthly_rate`, `monthly_to_annual_rate`, `effective_annual_rate`, `nominal_annual_rate`
//! - **Compounding**: `compound_interest`, `future_value`, `continuous_compounding`
//! - **Discounting**: `present_value`
//! - **Display**: `format_percentage`, `format_currency`
//!
//! ## Notes
//! - Rates are decimal fractions (0.05 for 5%)
//! - Rates, amounts and terms must be non-negative and frequencies strictly positive; anything else is rejected before computation
//! - All calculations use native `f64` arithmetic with no rounding

pub type FinToolsResult<T> = Result<T, Box<dyn std::error::Error>>;
pub mod compounding;
pub mod format;
pub mod int_rate_convert;
pub mod params;
pub mod prelude;
