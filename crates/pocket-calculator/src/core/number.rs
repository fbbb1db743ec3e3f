//! Operand parsing and result formatting
//!
//! Operands are kept as the exact text the user typed (or the text of the
//! previous result), so parsing is a leading-prefix parse: `"5."` is `5`,
//! `"1e-"` is `1`, and `"."`, `"-"` or `"NaN"` are not numbers at all.
//! Results are rounded to 8 decimal places and printed in the shortest
//! form that round-trips, switching to exponent notation outside
//! `[1e-6, 1e21)`.

use std::sync::LazyLock;

use regex::Regex;

/// Decimal places kept in every result
pub const RESULT_DECIMALS: i32 = 8;

const RESULT_SCALE: f64 = 1e8;

#[allow(clippy::expect_used)]
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Parses the longest numeric prefix of `text`.
///
/// Returns `None` when no prefix is a number.
pub fn parse_operand(text: &str) -> Option<f64> {
    let prefix = NUMERIC_PREFIX.find(text.trim_start())?.as_str();

    match prefix.strip_suffix("Infinity") {
        Some("-") => Some(f64::NEG_INFINITY),
        Some("" | "+") => Some(f64::INFINITY),
        Some(_) => None,
        None => prefix.parse().ok(),
    }
}

/// Rounds to [`RESULT_DECIMALS`] places, half away from zero.
///
/// Non-finite values pass through unchanged.
#[must_use]
pub fn round_result(value: f64) -> f64 {
    (value * RESULT_SCALE).round() / RESULT_SCALE
}

/// Formats a result for the display.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0.0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}
