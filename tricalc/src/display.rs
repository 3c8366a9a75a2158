//! Number formatting and parsing for the calculator display
//!
//! Two formats are in use: the fixed-point display format (10 decimals,
//! trailing zeros stripped) for the calculator and converter, and a `%g`
//! style format with a fixed number of significant digits for the
//! quadratic solver.

use crate::error::{CalcError, Result};

/// Text shown in place of a number after a failed operation.
pub const ERROR_MARKER: &str = "Error";

/// Decimal places kept before trailing zeros are stripped.
const DISPLAY_DECIMALS: usize = 10;

/// Format a result for the calculator display.
///
/// `1.0 / 3.0` gives `"0.3333333333"`, `4.0` gives `"4"`, `0.125` gives
/// `"0.125"`. Negative zero (and anything rounding to it) shows as `"0"`.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let s = format!("{:.*}", DISPLAY_DECIMALS, n);
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Re-run display text through [`format_number`].
pub fn reformat(text: &str) -> Result<String> {
    parse_number(text).map(format_number)
}

/// Format with `digits` significant digits, `%g` style: fixed notation for
/// moderate exponents, scientific (`1.5e+07`) otherwise.
pub fn format_significant(n: f64, digits: usize) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    // Rounding to `digits` can bump the exponent (999999.5 -> 1e+06), so take
    // the exponent from the rounded scientific form.
    let sci = format!("{:.*e}", digits - 1, n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_fraction_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        let fixed = format!("{:.*}", decimals, n);
        let fixed = strip_fraction_zeros(&fixed);
        if fixed == "-0" { "0".to_string() } else { fixed.to_string() }
    }
}

fn strip_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Parse user-entered text (converter value, quadratic coefficients).
pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumericInput(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_strips_trailing_zeros() {
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(1000.0), "1000");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1e-12), "0");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_reformat_is_idempotent() {
        for text in ["4", "0.125", "0.3333333333", "-7", "273.15"] {
            assert_eq!(reformat(text).unwrap(), text);
        }
        assert_eq!(reformat("4.000").unwrap(), "4");
    }

    #[test]
    fn test_format_significant() {
        assert_eq!(format_significant(2.0, 6), "2");
        assert_eq!(format_significant(-1.0, 6), "-1");
        assert_eq!(format_significant(1.0 / 3.0, 6), "0.333333");
        assert_eq!(format_significant(123456.7, 6), "123457");
        assert_eq!(format_significant(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_significant(0.0001, 6), "0.0001");
        assert_eq!(format_significant(0.00001234, 6), "1.234e-05");
        assert_eq!(format_significant(-0.0, 6), "0");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_number("-3").unwrap(), -3.0);
        assert_eq!(
            parse_number("abc"),
            Err(CalcError::InvalidNumericInput("abc".to_string()))
        );
        assert!(parse_number("").is_err());
    }
}
