//! Display strings for the three per-product metrics.

use serde::{Deserialize, Serialize};

/// Formatted metrics shown in a product panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricStrings {
    pub average_price: String,
    pub average_margin: String,
    pub total_units: String,
}

/// Price with a currency prefix and two decimals: `$10.00`.
pub fn format_price(value: f64, currency: &str) -> String {
    format!("{currency}{value:.2}")
}

/// Margin as a whole percentage: `40%`.
pub fn format_margin(value: f64) -> String {
    format!("{value:.0}%")
}

/// Units with thousands separators. Whole numbers print without decimals.
pub fn format_units(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    let (int_part, frac_part) = if abs.fract() == 0.0 {
        (format!("{abs:.0}"), String::new())
    } else {
        let text = abs.to_string();
        match text.split_once('.') {
            Some((i, f)) => (i.to_string(), format!(".{f}")),
            None => (text, String::new()),
        }
    };

    format!("{sign}{}{frac_part}", group_thousands(&int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
