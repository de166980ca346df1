use crate::FinToolsResult;
use garde::Validate;
use log::debug;

// =======================================
// RATE PARAMETER STRUCTS
// =======================================
#[derive(Debug, Clone, Copy, Validate)]
pub struct RateParams {
    // Effective rate per period (annual or monthly)
    #[garde(custom(validate_rate))]
    pub i: f64,
}

#[derive(Debug, Clone, Copy, Validate)]
pub struct NominalRateParams {
    // Nominal or effective annual rate, depending on the direction of conversion
    #[garde(custom(validate_rate))]
    pub i: f64,

    // Conversion periods per year
    #[garde(custom(validate_frequency))]
    pub m: f64,
}

// =======================================
// GROWTH PARAMETER STRUCTS
// =======================================
#[derive(Debug, Clone, Copy, Validate)]
pub struct CompoundingParams {
    #[garde(custom(validate_principal))]
    pub principal: f64,

    // Nominal annual rate convertible m times per year
    #[garde(custom(validate_rate))]
    pub i: f64,

    // Term in years, fractional terms allowed
    #[garde(custom(validate_term))]
    pub t: f64,

    // Compounding periods per year
    #[garde(custom(validate_frequency))]
    pub m: f64,
}

#[derive(Debug, Clone, Copy, Validate)]
pub struct DiscountingParams {
    // Amount due at the end of the term
    #[garde(custom(validate_future_value))]
    pub fv: f64,

    #[garde(custom(validate_rate))]
    pub i: f64,

    #[garde(custom(validate_term))]
    pub t: f64,

    #[garde(custom(validate_frequency))]
    pub m: f64,
}

#[derive(Debug, Clone, Copy, Validate)]
pub struct ContinuousParams {
    #[garde(custom(validate_principal))]
    pub principal: f64,

    // Annual rate, used as the force of interest
    #[garde(custom(validate_rate))]
    pub i: f64,

    #[garde(custom(validate_term))]
    pub t: f64,
}

// =======================================
// VALIDATION ENTRY POINT
// =======================================

/// Validate a parameter struct, boxing the garde report as the crate error.
///
/// Every violated constraint is collected into one report, so a call with a
/// negative principal and a zero frequency names both fields.
pub(crate) fn validated<P>(params: P) -> FinToolsResult<P>
where
    P: Validate<Context = ()> + std::fmt::Debug,
{
    if let Err(report) = params.validate() {
        debug!(
            "rejected {params:?}: {}",
            report.to_string().trim_end()
        );
        return Err(Box::new(report));
    }
    Ok(params)
}

/// Reject a computed quantity that left the finite `f64` range.
///
/// Valid inputs can still overflow, e.g. `(1 + i/m)^(m·t)` for a long term at a high
/// rate; the result would otherwise surface as `inf`, or `NaN` for a zero principal.
pub(crate) fn finite(value: f64, what: &'static str) -> FinToolsResult<f64> {
    if value.is_finite() {
        return Ok(value);
    }
    let mut report = garde::Report::new();
    report.append(
        garde::Path::new(what),
        garde::Error::new(format!("{what} overflows the f64 range (got {value})")),
    );
    debug!("rejected result: {}", report.to_string().trim_end());
    Err(Box::new(report))
}

// =======================================
// CUSTOM VALIDATORS
// =======================================
fn validate_rate(value: &f64, _context: &()) -> garde::Result {
    non_negative(*value, "interest rate")
}

fn validate_principal(value: &f64, _context: &()) -> garde::Result {
    non_negative(*value, "principal")
}

fn validate_future_value(value: &f64, _context: &()) -> garde::Result {
    non_negative(*value, "future value")
}

fn validate_term(value: &f64, _context: &()) -> garde::Result {
    non_negative(*value, "term in years")
}

fn validate_frequency(value: &f64, _context: &()) -> garde::Result {
    if value.is_nan() {
        return Err(garde::Error::new("compounding frequency must be a number"));
    }
    if *value <= 0.0 {
        return Err(garde::Error::new(format!(
            "compounding frequency must be greater than 0 (got {value})"
        )));
    }
    Ok(())
}

fn non_negative(value: f64, what: &str) -> garde::Result {
    if value.is_nan() {
        return Err(garde::Error::new(format!("{what} must be a number")));
    }
    if value < 0.0 {
        return Err(garde::Error::new(format!(
            "{what} cannot be negative (got {value})"
        )));
    }
    Ok(())
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_compounding_params() {
        let params = CompoundingParams {
            principal: 1_000.0,
            i: 0.05,
            t: 2.5,
            m: 12.0,
        };
        assert!(validated(params).is_ok());
    }

    #[test]
    fn test_zero_values_are_accepted() {
        let params = CompoundingParams {
            principal: 0.0,
            i: 0.0,
            t: 0.0,
            m: 1.0,
        };
        assert!(validated(params).is_ok());
    }

    #[test]
    fn test_fractional_frequency_is_accepted() {
        let params = NominalRateParams { i: 0.05, m: 0.5 };
        assert!(validated(params).is_ok());
    }

    #[test]
    fn test_negative_rate_message() {
        let err = validated(RateParams { i: -0.05 }).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("interest rate cannot be negative"), "{msg}");
        assert!(msg.contains("-0.05"), "{msg}");
    }

    #[test]
    fn test_nan_is_rejected() {
        let err = validated(RateParams { i: f64::NAN }).unwrap_err();
        assert!(err.to_string().contains("must be a number"));

        let err = validated(NominalRateParams { i: 0.05, m: f64::NAN }).unwrap_err();
        assert!(err.to_string().contains("compounding frequency"));
    }

    #[test]
    fn test_all_violations_reported_together() {
        let params = DiscountingParams {
            fv: -1.0,
            i: 0.05,
            t: -3.0,
            m: 0.0,
        };
        let msg = validated(params).unwrap_err().to_string();
        assert!(msg.contains("future value cannot be negative"), "{msg}");
        assert!(msg.contains("term in years cannot be negative"), "{msg}");
        assert!(msg.contains("compounding frequency must be greater than 0"), "{msg}");
        assert!(!msg.contains("interest rate"), "{msg}");
    }

    #[test]
    fn test_continuous_params_negative_principal() {
        let params = ContinuousParams {
            principal: -10.0,
            i: 0.05,
            t: 1.0,
        };
        let msg = validated(params).unwrap_err().to_string();
        assert!(msg.contains("principal cannot be negative"), "{msg}");
    }
}
