//! CLI argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// FinTools - time-value-of-money calculations from the command line
///
/// Rates are entered as percentages (5.0 means 5%).
#[derive(Parser, Debug)]
#[command(name = "fintools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  fintools annual-to-monthly 5.0          # effective monthly rate for 5% a year
  fintools compound 1000000 5.0 10        # 1,000,000 at 5% for 10 years
  fintools compound 1000000 5.0 10 -f 12  # same, compounded monthly")]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Currency symbol for amounts in text output
    #[arg(long, default_value = "¥", global = true)]
    pub currency: String,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an effective annual rate to the equivalent effective monthly rate
    AnnualToMonthly(AnnualToMonthlyArgs),

    /// Convert an effective monthly rate to the equivalent effective annual rate
    MonthlyToAnnual(MonthlyToAnnualArgs),

    /// Future value of a principal under discrete compounding
    Compound(GrowthArgs),

    /// Present value of an amount due in the future
    PresentValue(DiscountArgs),

    /// Effective annual rate of a nominal rate compounded several times a year
    EffectiveRate(EffectiveRateArgs),

    /// Future value of a principal under continuous compounding
    Continuous(ContinuousArgs),
}

#[derive(Args, Debug)]
pub struct AnnualToMonthlyArgs {
    /// Annual rate in percent (e.g. 5.0)
    #[arg(allow_negative_numbers = true)]
    pub annual_rate: f64,
}

#[derive(Args, Debug)]
pub struct MonthlyToAnnualArgs {
    /// Monthly rate in percent (e.g. 0.4)
    #[arg(allow_negative_numbers = true)]
    pub monthly_rate: f64,
}

#[derive(Args, Debug)]
pub struct GrowthArgs {
    /// Principal amount
    #[arg(allow_negative_numbers = true)]
    pub principal: f64,

    /// Annual rate in percent (e.g. 5.0)
    #[arg(allow_negative_numbers = true)]
    pub annual_rate: f64,

    /// Term in years
    #[arg(allow_negative_numbers = true)]
    pub years: f64,

    /// Compounding periods per year
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub frequency: i64,
}

#[derive(Args, Debug)]
pub struct DiscountArgs {
    /// Amount due at the end of the term
    #[arg(allow_negative_numbers = true)]
    pub future_value: f64,

    /// Annual rate in percent (e.g. 5.0)
    #[arg(allow_negative_numbers = true)]
    pub annual_rate: f64,

    /// Term in years
    #[arg(allow_negative_numbers = true)]
    pub years: f64,

    /// Compounding periods per year
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub frequency: i64,
}

#[derive(Args, Debug)]
pub struct EffectiveRateArgs {
    /// Nominal annual rate in percent (e.g. 5.0)
    #[arg(allow_negative_numbers = true)]
    pub nominal_rate: f64,

    /// Compounding periods per year
    #[arg(short, long, default_value_t = 12, allow_negative_numbers = true)]
    pub frequency: i64,
}

#[derive(Args, Debug)]
pub struct ContinuousArgs {
    /// Principal amount
    #[arg(allow_negative_numbers = true)]
    pub principal: f64,

    /// Annual rate in percent (e.g. 5.0)
    #[arg(allow_negative_numbers = true)]
    pub annual_rate: f64,

    /// Term in years
    #[arg(allow_negative_numbers = true)]
    pub years: f64,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labelled, human-readable lines
    #[default]
    Text,
    /// Inputs and result as a JSON object (rates as decimals)
    Json,
}

/// Convert a percent-style input (5.0) to a decimal rate (0.05).
pub fn percent_to_decimal(percent: f64) -> f64 {
    percent / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compound_with_frequency() {
        let cli = Cli::parse_from(["fintools", "compound", "1000000", "5.0", "10", "-f", "12"]);
        match cli.command {
            Commands::Compound(args) => {
                assert_eq!(args.principal, 1_000_000.0);
                assert_eq!(args.annual_rate, 5.0);
                assert_eq!(args.years, 10.0);
                assert_eq!(args.frequency, 12);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_negative_positional() {
        let cli = Cli::parse_from(["fintools", "present-value", "-500", "5", "10"]);
        match cli.command {
            Commands::PresentValue(args) => {
                assert_eq!(args.future_value, -500.0);
                assert_eq!(args.frequency, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_effective_rate_defaults_to_monthly() {
        let cli = Cli::parse_from(["fintools", "--format", "json", "effective-rate", "5"]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::EffectiveRate(args) => assert_eq!(args.frequency, 12),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_frequency() {
        let cli = Cli::parse_from(["fintools", "compound", "1000", "5", "10", "-f", "-1"]);
        match cli.command {
            Commands::Compound(args) => assert_eq!(args.frequency, -1),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_percent_to_decimal() {
        assert_eq!(percent_to_decimal(5.0), 0.05);
        assert_eq!(percent_to_decimal(0.0), 0.0);
    }
}
