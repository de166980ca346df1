//! # FinTools Basic Usage Example
//!
//! This example demonstrates the basic usage of the fintools crate
//! for rate conversion, compounding and discounting.

use fintools::prelude::*;

const CURRENCY: &str = "¥";

fn main() -> FinToolsResult<()> {
    println!("FinTools Basic Usage Example");
    println!("============================");
    println!();

    rate_conversion()?;
    compounding_frequencies()?;
    investment_scenarios()?;
    savings_target()?;

    println!("=== Done ===");
    Ok(())
}

fn rate_conversion() -> FinToolsResult<()> {
    println!("=== Rate Conversion ===");
    let annual_rate = 0.05;
    let monthly_rate = annual_to_monthly_rate(annual_rate)?;
    let back_to_annual = monthly_to_annual_rate(monthly_rate)?;

    println!(
        "Annual {} -> monthly {}",
        format_percentage(annual_rate, 2),
        format_percentage(monthly_rate, 4)
    );
    println!(
        "Monthly {} -> annual {}",
        format_percentage(monthly_rate, 4),
        format_percentage(back_to_annual, 2)
    );
    println!(
        "Naive annual / 12 would give {}, which overstates the compounding-equivalent rate.",
        format_percentage(annual_rate / 12.0, 4)
    );
    println!();
    Ok(())
}

fn compounding_frequencies() -> FinToolsResult<()> {
    println!("=== Compounding Frequency ===");
    let principal = 1_000_000.0;
    let annual_rate = 0.05;
    let years = 10.0;

    println!("Principal: {}", format_currency(principal, CURRENCY));
    println!("Annual rate: {}", format_percentage(annual_rate, 1));
    println!("Term: {years} years");
    println!();

    let frequencies = [
        (1.0, "Annual"),
        (2.0, "Semi-annual"),
        (4.0, "Quarterly"),
        (12.0, "Monthly"),
        (365.0, "Daily"),
    ];
    for (m, label) in frequencies {
        let fv = compound_interest()
            .principal(principal)
            .i(annual_rate)
            .t(years)
            .m(m)
            .call()?;
        println!(
            "  {label:<12}: {} (interest {})",
            format_currency(fv, CURRENCY),
            format_currency(fv - principal, CURRENCY)
        );
    }

    let continuous = continuous_compounding(principal, annual_rate, years)?;
    println!(
        "  {:<12}: {} (interest {})",
        "Continuous",
        format_currency(continuous, CURRENCY),
        format_currency(continuous - principal, CURRENCY)
    );
    println!("✓ More frequent compounding grows the principal faster, up to the continuous limit");
    println!();
    Ok(())
}

fn investment_scenarios() -> FinToolsResult<()> {
    println!("=== Investment Scenarios (20 years) ===");
    let principal = 1_000_000.0;
    let years = 20.0;
    let scenarios = [(0.02, "Low risk"), (0.05, "Medium risk"), (0.08, "High risk")];

    for (rate, label) in scenarios {
        let annual = compound_interest().principal(principal).i(rate).t(years).call()?;
        let monthly = compound_interest()
            .principal(principal)
            .i(rate)
            .t(years)
            .m(12.0)
            .call()?;
        println!("{label} ({}):", format_percentage(rate, 0));
        println!("  Annual compounding:  {}", format_currency(annual, CURRENCY));
        println!("  Monthly compounding: {}", format_currency(monthly, CURRENCY));
        println!(
            "  Effective annual rate (monthly): {}",
            format_percentage(effective_annual_rate(rate, 12.0)?, 2)
        );
    }
    println!();
    Ok(())
}

fn savings_target() -> FinToolsResult<()> {
    println!("=== Present Value of a Savings Target ===");
    let target = 2_000_000.0;
    let annual_rate = 0.05;
    let years = 10.0;

    let required = present_value().fv(target).i(annual_rate).t(years).call()?;
    let check = future_value().principal(required).i(annual_rate).t(years).call()?;

    println!("Target: {} in {years} years", format_currency(target, CURRENCY));
    println!("Required investment today: {}", format_currency(required, CURRENCY));
    println!(
        "Check: {} at {} for {years} years grows to {}",
        format_currency(required, CURRENCY),
        format_percentage(annual_rate, 1),
        format_currency(check, CURRENCY)
    );
    println!();
    Ok(())
}
