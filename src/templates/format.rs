// templates/format.rs

use num_format::{Locale, ToFormattedString};

/// Shown in place of a metric that has no value for the current selection.
pub const PLACEHOLDER: &str = "–";

/// `12345` -> `12,345`
pub fn count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Whole euros, e.g. `€812`.
pub fn euros(value: f64) -> String {
    format!("€{value:.0}")
}

pub fn maybe_euros(value: Option<f64>) -> String {
    value.map(euros).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Euros with one decimal, e.g. `€12.4`.
pub fn maybe_euros_1(value: Option<f64>) -> String {
    value
        .map(|v| format!("€{v:.1}"))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn maybe_area(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1} m²"))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Signed percentage, e.g. `+12.5%`.
pub fn signed_pct(value: f64) -> String {
    format!("{value:+.1}%")
}

pub fn pct(value: f64) -> String {
    format!("{value:.1}%")
}
