// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions for rendering floating point values.

/// Number of significant digits used by [`format_g`].
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a floating point value the way C's `printf("%g", value)` does.
///
/// The value is rounded to [`SIGNIFICANT_DIGITS`] significant digits. Fixed
/// notation is used when the decimal exponent lies in `[-4, 6)`, scientific
/// notation (`1.5e+07`) otherwise. Trailing zeros of the fractional part are
/// removed, as is a dangling decimal point.
///
/// # Arguments
///
/// * `value` - The value to format.
///
/// # Returns
///
/// The shortest `%g` rendering of `value`.
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the target precision first fixes the exponent, e.g. 999999.7 -> 1e+06.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Formats a value like `printf("%+g", value)`: always carries an explicit sign.
pub fn format_g_signed(value: f64) -> String {
    let formatted = format_g(value);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{formatted}")
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
