//! Display formatting for rates and monetary amounts.
//!
//! Formatting only affects presentation; calculations never round.

/// Format a decimal rate as a percentage, e.g. `0.05` -> `"5.00%"`.
///
/// # Example
/// ```rust
/// # use fintools::format::format_percentage;
/// assert_eq!(format_percentage(0.05, 2), "5.00%");
/// assert_eq!(format_percentage(0.0040741243, 4), "0.4074%");
/// ```
pub fn format_percentage(rate: f64, decimal_places: usize) -> String {
    format!("{:.*}%", decimal_places, rate * 100.0)
}

/// Format an amount in whole currency units with thousands separators.
///
/// # Example
/// ```rust
/// # use fintools::format::format_currency;
/// assert_eq!(format_currency(1_628_894.63, "¥"), "¥1,628,895");
/// assert_eq!(format_currency(999.4, "$"), "$999");
/// ```
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = format!("{:.0}", amount.abs());
    let sign = if amount < 0.0 && rounded != "0" { "-" } else { "" };
    format!("{sign}{symbol}{}", add_thousands_separator(&rounded))
}

// Expects a string of ASCII digits
fn add_thousands_separator(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().rev().collect();
    chars
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(",")
        .chars()
        .rev()
        .collect()
}
