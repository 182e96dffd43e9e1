//! Currency formatting for display
//!
//! Two conventions are supported:
//! - IDR: Indonesian style, `Rp 1.234.568`, no minor units
//! - everything else: en-US style, `$1,234.57`, two minor units
//!   (none for zero-decimal currencies such as JPY)
//!
//! Formatting works on a copy of the amount and never feeds a rounded value
//! back into any calculation.

use crate::currency::CurrencyCode;

/// Separator between a currency prefix and the digits
pub const NBSP: char = '\u{a0}';

/// Format an amount in rupiah, rounded to whole rupiah
pub fn format_rupiah(amount: f64) -> String {
    let digits = format!("{:.0}", amount.abs().round());
    let sign = if amount < 0.0 && digits != "0" { "-" } else { "" };

    format!("{}Rp{}{}", sign, NBSP, group_thousands(&digits, '.'))
}

/// Format an amount in any currency
pub fn format_currency(amount: f64, code: CurrencyCode) -> String {
    if code.is_base() {
        return format_rupiah(amount);
    }

    let fraction_digits = if code.is_zero_decimal() { 0 } else { 2 };
    // Ties round away from zero, as in format_rupiah
    let scale = 10f64.powi(fraction_digits as i32);
    let rounded = (amount.abs() * scale).round() / scale;
    let fixed = format!("{:.*}", fraction_digits, rounded);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    let mut number = group_thousands(integer, ',');
    if let Some(fraction) = fraction {
        number.push('.');
        number.push_str(fraction);
    }

    match symbol(code) {
        Some(symbol) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{}{}{}", sign, code, NBSP, number),
    }
}

/// Format an annual rate as shown next to a projection, e.g. `12.00%`
pub fn format_rate(annual_rate_percent: f64) -> String {
    format!("{:.2}%", annual_rate_percent)
}

/// Format a year count without trailing zeros (`5`, `2.5`)
pub fn format_years(years: f64) -> String {
    format!("{}", years)
}

fn symbol(code: CurrencyCode) -> Option<&'static str> {
    match code.as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "CNY" => Some("CN¥"),
        "INR" => Some("₹"),
        "KRW" => Some("₩"),
        "AUD" => Some("A$"),
        "CAD" => Some("CA$"),
        _ => None,
    }
}

/// Insert `separator` between groups of three digits
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
