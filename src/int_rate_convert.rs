use crate::FinToolsResult;
use crate::params::{NominalRateParams, RateParams, validated};
use log::trace;

/// Months in a year, the conversion period count between annual and monthly effective rates.
const MONTHS_PER_YEAR: f64 = 12.0;

/// Convert an effective annual interest rate to the equivalent effective monthly rate.
///
/// The monthly rate compounds back to the annual rate over twelve months. It is
/// therefore smaller than the naive `annual / 12`.
///
/// # Formula
/// ```text
/// i_monthly = (1 + i)^(1/12) - 1
/// ```
/// where:
/// - `i` is the effective annual interest rate
///
/// # Errors
/// Rejects a negative (or NaN) rate.
///
/// # Example
/// ```rust
/// # use fintools::prelude::annual_to_monthly_rate;
/// let monthly = annual_to_monthly_rate(0.05)?; // 5% a year
/// assert!((monthly - 0.0040741243).abs() < 1e-10);
/// assert!(monthly < 0.05 / 12.0);
/// # fintools::FinToolsResult::Ok(())
/// ```
pub fn annual_to_monthly_rate(i: f64) -> FinToolsResult<f64> {
    let RateParams { i } = validated(RateParams { i })?;
    // i⁽¹²⁾/12 = (1 + i)^(1/12) - 1
    let monthly = (1.0 + i).powf(1.0 / MONTHS_PER_YEAR) - 1.0;
    trace!("annual_to_monthly_rate({i}) = {monthly}");
    Ok(monthly)
}

/// Convert an effective monthly interest rate to the equivalent effective annual rate.
///
/// Inverse of [`annual_to_monthly_rate`].
///
/// # Formula
/// ```text
/// i = (1 + i_monthly)^12 - 1
/// ```
///
/// # Example
/// ```rust
/// # use fintools::prelude::*;
/// let annual = monthly_to_annual_rate(0.01)?; // 1% a month
/// assert!((annual - 0.12682503013196972).abs() < 1e-12);
///
/// let round_trip = monthly_to_annual_rate(annual_to_monthly_rate(0.05)?)?;
/// assert!((round_trip - 0.05).abs() < 1e-10);
/// # FinToolsResult::Ok(())
/// ```
pub fn monthly_to_annual_rate(i_monthly: f64) -> FinToolsResult<f64> {
    let RateParams { i } = validated(RateParams { i: i_monthly })?;
    let annual = (1.0 + i).powf(MONTHS_PER_YEAR) - 1.0;
    trace!("monthly_to_annual_rate({i}) = {annual}");
    Ok(annual)
}

/// Convert a nominal annual interest rate to the effective annual rate.
///
/// # Formula
/// ```text
/// i = (1 + i⁽ᵐ⁾/m)^m - 1
/// ```
/// where:
/// - `nom_i` is the nominal interest rate convertible m times per year
/// - `m` is the number of conversion periods per year
///
/// With `m = 1` the nominal rate is already effective and is returned unchanged.
/// As `m` grows the result increases toward `e^(nom_i) - 1`, the effective rate under
/// continuous compounding.
///
/// # Example
/// ```rust
/// # use fintools::prelude::effective_annual_rate;
/// let eff = effective_annual_rate(0.05, 12.0)?; // 5% convertible monthly
/// assert!((eff - 0.05116189788173683).abs() < 1e-12);
/// assert_eq!(effective_annual_rate(0.05, 1.0)?, 0.05);
/// # fintools::FinToolsResult::Ok(())
/// ```
pub fn effective_annual_rate(nom_i: f64, m: f64) -> FinToolsResult<f64> {
    let NominalRateParams { i, m } = validated(NominalRateParams { i: nom_i, m })?;
    // (1 + i) - 1 does not round-trip exactly in floating point
    if m == 1.0 {
        return Ok(i);
    }
    let eff = (1.0 + i / m).powf(m) - 1.0;
    trace!("effective_annual_rate({i}, {m}) = {eff}");
    Ok(eff)
}

/// Convert an effective annual interest rate to the nominal rate convertible m times per year.
///
/// Inverse of [`effective_annual_rate`].
///
/// # Formula
/// ```text
/// i⁽ᵐ⁾ = m[(1 + i)¹⁄ᵐ - 1]
/// ```
/// where:
/// - `eff_i` is the effective annual interest rate
/// - `m` is the number of conversion periods per year
///
/// # Example
/// ```rust
/// # use fintools::prelude::*;
/// let nom = nominal_annual_rate(0.05116189788173683, 12.0)?;
/// assert!((nom - 0.05).abs() < 1e-12);
/// # FinToolsResult::Ok(())
/// ```
pub fn nominal_annual_rate(eff_i: f64, m: f64) -> FinToolsResult<f64> {
    let NominalRateParams { i, m } = validated(NominalRateParams { i: eff_i, m })?;
    if m == 1.0 {
        return Ok(i);
    }
    let nom = m * ((1.0 + i).powf(1.0 / m) - 1.0);
    trace!("nominal_annual_rate({i}, {m}) = {nom}");
    Ok(nom)
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fn_annual_to_monthly_rate_01() {
        let rates = [0.01, 0.05, 0.12, 0.25, 1.0];
        for rate in rates {
            let ans = annual_to_monthly_rate(rate).unwrap();
            let exp = (1.0_f64 + rate).powf(1.0 / 12.0) - 1.0;
            assert_abs_diff_eq!(ans, exp, epsilon = 1e-12);
            // Compounding-equivalent monthly rate is below naive division
            assert!(ans < rate / 12.0);
        }
        assert_abs_diff_eq!(annual_to_monthly_rate(0.05).unwrap(), 0.0040741243, epsilon = 1e-10);
    }

    #[test]
    fn test_fn_annual_to_monthly_rate_zero() {
        assert_eq!(annual_to_monthly_rate(0.0).unwrap(), 0.0);
        assert_eq!(monthly_to_annual_rate(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_fn_monthly_to_annual_rate_01() {
        let ans = monthly_to_annual_rate(0.01).unwrap();
        assert_abs_diff_eq!(ans, 1.01_f64.powi(12) - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_round_trip() {
        let rates = [0.0, 0.001, 0.03, 0.05, 0.12, 0.5, 2.0];
        for rate in rates {
            let monthly = annual_to_monthly_rate(rate).unwrap();
            assert_abs_diff_eq!(monthly_to_annual_rate(monthly).unwrap(), rate, epsilon = 1e-10);

            let annual = monthly_to_annual_rate(rate / 10.0).unwrap();
            assert_abs_diff_eq!(annual_to_monthly_rate(annual).unwrap(), rate / 10.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_negative_rates_rejected() {
        assert!(annual_to_monthly_rate(-0.05).is_err());
        assert!(monthly_to_annual_rate(-0.01).is_err());
        assert!(effective_annual_rate(-0.05, 12.0).is_err());
        assert!(nominal_annual_rate(-0.05, 12.0).is_err());
    }

    #[test]
    fn test_non_positive_frequency_rejected() {
        for m in [0.0, -1.0, -12.0] {
            assert!(effective_annual_rate(0.05, m).is_err());
            assert!(nominal_annual_rate(0.05, m).is_err());
        }
    }

    #[test]
    fn test_fn_effective_annual_rate_01() {
        let cases = [(0.05, 12.0, 0.05116189788173683), (0.1, 365.0, 0.10515578161654986)];
        for (nom, m, exp) in cases {
            assert_abs_diff_eq!(effective_annual_rate(nom, m).unwrap(), exp, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_effective_annual_rate_annual_is_identity() {
        for rate in [0.0, 0.01, 0.05, 0.1, 0.3, 1.0] {
            assert_eq!(effective_annual_rate(rate, 1.0).unwrap(), rate);
            assert_eq!(nominal_annual_rate(rate, 1.0).unwrap(), rate);
        }
    }

    #[test]
    fn test_effective_annual_rate_increasing_in_frequency() {
        let frequencies = [1.0, 2.0, 4.0, 12.0, 52.0, 365.0];
        for nom in [0.01, 0.05, 0.12] {
            let effs: Vec<f64> = frequencies
                .iter()
                .map(|&m| effective_annual_rate(nom, m).unwrap())
                .collect();
            assert!(effs.windows(2).all(|w| w[0] < w[1]), "{effs:?}");
            // Bounded above by the continuous limit
            assert!(effs.iter().all(|&e| e < nom.exp_m1()));
        }
    }

    #[test]
    fn test_effective_annual_rate_approaches_continuous() {
        for nom in [0.01, 0.05, 0.1] {
            let daily = effective_annual_rate(nom, 365.0).unwrap();
            assert_abs_diff_eq!(daily, nom.exp() - 1.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_nominal_effective_round_trip() {
        for m in [2.0, 4.0, 12.0, 365.0] {
            for nom in [0.02, 0.05, 0.2] {
                let eff = effective_annual_rate(nom, m).unwrap();
                assert_abs_diff_eq!(nominal_annual_rate(eff, m).unwrap(), nom, epsilon = 1e-10);
            }
        }
    }
}
