//! Output formatting for CLI results.

use anyhow::Result;
use fintools::format::{format_currency, format_percentage};
use serde::Serialize;

use crate::cli::OutputFormat;

/// A command result that can be printed as labelled lines or as JSON.
pub trait Report: Serialize {
    fn lines(&self, currency: &str) -> Vec<(&'static str, String)>;
}

/// Prints a single result in the requested format.
pub fn print_report<R: Report>(report: &R, format: OutputFormat, currency: &str) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (label, value) in report.lines(currency) {
                println!("{:<15} {value}", format!("{label}:"));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct AnnualToMonthly {
    pub annual_rate: f64,
    pub monthly_rate: f64,
}

impl Report for AnnualToMonthly {
    fn lines(&self, _currency: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Annual rate", format_percentage(self.annual_rate, 2)),
            ("Monthly rate", format_percentage(self.monthly_rate, 4)),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct MonthlyToAnnual {
    pub monthly_rate: f64,
    pub annual_rate: f64,
}

impl Report for MonthlyToAnnual {
    fn lines(&self, _currency: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Monthly rate", format_percentage(self.monthly_rate, 4)),
            ("Annual rate", format_percentage(self.annual_rate, 2)),
        ]
    }
}

/// Growth of a principal; `frequency` is `None` for continuous compounding.
#[derive(Debug, Serialize)]
pub struct Growth {
    pub principal: f64,
    pub annual_rate: f64,
    pub years: f64,
    pub frequency: Option<i64>,
    pub future_value: f64,
    pub interest: f64,
}

impl Report for Growth {
    fn lines(&self, currency: &str) -> Vec<(&'static str, String)> {
        let compounding = match self.frequency {
            Some(m) => format!("{m} times per year"),
            None => "continuous".to_string(),
        };
        vec![
            ("Principal", format_currency(self.principal, currency)),
            ("Annual rate", format_percentage(self.annual_rate, 2)),
            ("Term", format!("{} years", self.years)),
            ("Compounding", compounding),
            ("Future value", format_currency(self.future_value, currency)),
            ("Interest", format_currency(self.interest, currency)),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct Discount {
    pub future_value: f64,
    pub annual_rate: f64,
    pub years: f64,
    pub frequency: i64,
    pub present_value: f64,
}

impl Report for Discount {
    fn lines(&self, currency: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Future value", format_currency(self.future_value, currency)),
            ("Annual rate", format_percentage(self.annual_rate, 2)),
            ("Term", format!("{} years", self.years)),
            ("Compounding", format!("{} times per year", self.frequency)),
            ("Present value", format_currency(self.present_value, currency)),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct EffectiveRate {
    pub nominal_rate: f64,
    pub frequency: i64,
    pub effective_rate: f64,
}

impl Report for EffectiveRate {
    fn lines(&self, _currency: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Nominal rate", format_percentage(self.nominal_rate, 2)),
            ("Compounding", format!("{} times per year", self.frequency)),
            ("Effective rate", format_percentage(self.effective_rate, 4)),
        ]
    }
}
