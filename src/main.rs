//! FinTools CLI - time-value-of-money calculations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Effective monthly rate for 5% a year
//! fintools annual-to-monthly 5.0
//!
//! # 1,000,000 at 5% for 10 years, compounded monthly
//! fintools compound 1000000 5.0 10 -f 12
//!
//! # What 2,000,000 due in 10 years is worth today at 5%
//! fintools present-value 2000000 5.0 10
//!
//! # Machine-readable output
//! fintools --format json continuous 1000000 5.0 10
//! ```
//!
//! Invalid inputs are reported on stderr and the process exits with status 1.

use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::Parser;
use fintools::prelude::*;
use log::debug;

mod cli;
mod output;

use cli::{Cli, Commands, percent_to_decimal};
use output::{AnnualToMonthly, Discount, EffectiveRate, Growth, MonthlyToAnnual, print_report};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    debug!("{:?}", cli.command);
    let (format, currency) = (cli.format, cli.currency.as_str());

    match cli.command {
        Commands::AnnualToMonthly(args) => {
            let annual_rate = percent_to_decimal(args.annual_rate);
            let monthly_rate = checked(annual_to_monthly_rate(annual_rate))?;
            print_report(&AnnualToMonthly { annual_rate, monthly_rate }, format, currency)
        }
        Commands::MonthlyToAnnual(args) => {
            let monthly_rate = percent_to_decimal(args.monthly_rate);
            let annual_rate = checked(monthly_to_annual_rate(monthly_rate))?;
            print_report(&MonthlyToAnnual { monthly_rate, annual_rate }, format, currency)
        }
        Commands::Compound(args) => {
            let annual_rate = percent_to_decimal(args.annual_rate);
            let future_value = checked(
                compound_interest()
                    .principal(args.principal)
                    .i(annual_rate)
                    .t(args.years)
                    .m(args.frequency as f64)
                    .call(),
            )?;
            let report = Growth {
                principal: args.principal,
                annual_rate,
                years: args.years,
                frequency: Some(args.frequency),
                future_value,
                interest: future_value - args.principal,
            };
            print_report(&report, format, currency)
        }
        Commands::PresentValue(args) => {
            let annual_rate = percent_to_decimal(args.annual_rate);
            let present_value = checked(
                present_value()
                    .fv(args.future_value)
                    .i(annual_rate)
                    .t(args.years)
                    .m(args.frequency as f64)
                    .call(),
            )?;
            let report = Discount {
                future_value: args.future_value,
                annual_rate,
                years: args.years,
                frequency: args.frequency,
                present_value,
            };
            print_report(&report, format, currency)
        }
        Commands::EffectiveRate(args) => {
            let nominal_rate = percent_to_decimal(args.nominal_rate);
            let effective_rate =
                checked(effective_annual_rate(nominal_rate, args.frequency as f64))?;
            let report = EffectiveRate {
                nominal_rate,
                frequency: args.frequency,
                effective_rate,
            };
            print_report(&report, format, currency)
        }
        Commands::Continuous(args) => {
            let annual_rate = percent_to_decimal(args.annual_rate);
            let future_value =
                checked(continuous_compounding(args.principal, annual_rate, args.years))?;
            let report = Growth {
                principal: args.principal,
                annual_rate,
                years: args.years,
                frequency: None,
                future_value,
                interest: future_value - args.principal,
            };
            print_report(&report, format, currency)
        }
    }
}

// The library error is not Send + Sync, so it is carried over as its message
fn checked(result: FinToolsResult<f64>) -> Result<f64> {
    result.map_err(|err| anyhow!("{}", err.to_string().trim_end().replace('\n', "; ")))
}
