use crate::FinToolsResult;
use crate::params::{CompoundingParams, ContinuousParams, DiscountingParams, finite, validated};
use bon::builder;
use log::trace;

/// Accumulated value of a single amount under discrete compounding.
///
/// Calculates the value after `t` years of a principal invested at a nominal annual rate `i`
/// convertible `m` times per year.
///
/// # Formula
/// ```text
/// FV = P · (1 + i⁽ᵐ⁾/m)^(m·t)
/// ```
/// where:
/// - `P` is the principal
/// - `i⁽ᵐ⁾` is the nominal annual rate convertible m times per year
/// - `t` is the term in years (fractional terms use real powers)
/// - `m` is the number of compounding periods per year (default 1)
///
/// A zero rate or a zero term returns the principal unchanged. A growth factor or
/// result outside the finite `f64` range is rejected rather than returned as `inf`/`NaN`.
///
/// # Examples
///
/// ## Annual and Monthly Compounding
/// ```rust
/// # use fintools::prelude::*;
/// let annual = compound_interest().principal(1_000_000.0).i(0.05).t(10.0).call()?;
/// let monthly = compound_interest()
///     .principal(1_000_000.0)
///     .i(0.05)
///     .t(10.0)
///     .m(12.0)
///     .call()?;
/// assert!((annual - 1_628_894.63).abs() < 0.01);
/// assert!((monthly - 1_643_619.46).abs() < 0.01);
/// # FinToolsResult::Ok(())
/// ```
///
/// # Parameters
/// - `principal`: Amount invested at time 0
/// - `i`: Nominal annual interest rate
/// - `t`: Term in years
/// - `m`: Compounding periods per year (default 1)
#[builder]
pub fn compound_interest(
    principal: f64,
    i: f64,
    t: f64,
    #[builder(default = 1.0)] m: f64,
) -> FinToolsResult<f64> {
    let CompoundingParams { principal, i, t, m } =
        validated(CompoundingParams { principal, i, t, m })?;
    let factor = finite(accumulation_factor(i, t, m), "growth factor")?;
    let fv = finite(principal * factor, "future value")?;
    trace!("compound_interest({principal}, {i}, {t}, {m}) = {fv}");
    Ok(fv)
}

/// Future value of a single amount under discrete compounding.
///
/// Same parameters and result as [`compound_interest`], to which it delegates.
///
/// # Example
/// ```rust
/// # use fintools::prelude::*;
/// let fv = future_value().principal(1_000_000.0).i(0.05).t(10.0).m(4.0).call()?;
/// let ci = compound_interest().principal(1_000_000.0).i(0.05).t(10.0).m(4.0).call()?;
/// assert_eq!(fv, ci);
/// # FinToolsResult::Ok(())
/// ```
#[builder]
pub fn future_value(
    principal: f64,
    i: f64,
    t: f64,
    #[builder(default = 1.0)] m: f64,
) -> FinToolsResult<f64> {
    compound_interest().principal(principal).i(i).t(t).m(m).call()
}

/// Present value of an amount due after `t` years.
///
/// Exact inverse of [`compound_interest`]: discounts `fv` at a nominal annual rate `i`
/// convertible `m` times per year.
///
/// # Formula
/// ```text
/// PV = FV / (1 + i⁽ᵐ⁾/m)^(m·t)
/// ```
///
/// # Example
/// ```rust
/// # use fintools::prelude::*;
/// let pv = present_value().fv(1_628_894.63).i(0.05).t(10.0).call()?;
/// assert!((pv - 1_000_000.0).abs() < 1.0);
/// # FinToolsResult::Ok(())
/// ```
///
/// # Parameters
/// - `fv`: Amount due at the end of the term
/// - `i`: Nominal annual interest rate
/// - `t`: Term in years
/// - `m`: Compounding periods per year (default 1)
#[builder]
pub fn present_value(
    fv: f64,
    i: f64,
    t: f64,
    #[builder(default = 1.0)] m: f64,
) -> FinToolsResult<f64> {
    let DiscountingParams { fv, i, t, m } = validated(DiscountingParams { fv, i, t, m })?;
    let factor = finite(accumulation_factor(i, t, m), "growth factor")?;
    let pv = finite(fv / factor, "present value")?;
    trace!("present_value({fv}, {i}, {t}, {m}) = {pv}");
    Ok(pv)
}

/// Accumulated value of a single amount under continuous compounding.
///
/// The limit of [`compound_interest`] as the compounding frequency grows without bound.
///
/// # Formula
/// ```text
/// FV = P · e^(δ·t)
/// ```
/// where `δ = i` is used as the force of interest.
///
/// # Example
/// ```rust
/// # use fintools::prelude::continuous_compounding;
/// let fv = continuous_compounding(1_000_000.0, 0.05, 10.0)?;
/// assert!((fv - 1_648_721.27).abs() < 0.01);
/// # fintools::FinToolsResult::Ok(())
/// ```
pub fn continuous_compounding(principal: f64, i: f64, t: f64) -> FinToolsResult<f64> {
    let ContinuousParams { principal, i, t } =
        validated(ContinuousParams { principal, i, t })?;
    let factor = finite((i * t).exp(), "growth factor")?;
    let fv = finite(principal * factor, "future value")?;
    trace!("continuous_compounding({principal}, {i}, {t}) = {fv}");
    Ok(fv)
}

// (1 + i/m)^(m·t), shared by accumulation and discounting so the two stay exact inverses
fn accumulation_factor(i: f64, t: f64, m: f64) -> f64 {
    (1.0 + i / m).powf(m * t)
}
