//! `%g`-style number formatting for the magnitude stream.

use std::io::{self, Write};

use crate::params::spectral_constants::PRINT_PRECISION;

/// Format like C's `%g`: six significant digits, trailing zeros dropped
pub fn format_general(value: f64) -> String {
    format_significant(value, PRINT_PRECISION)
}

/// Format like C's `%.{precision}g`
///
/// Fixed notation is used when the decimal exponent lies in
/// `[-4, precision)`, otherwise exponent notation with a signed exponent of
/// at least two digits (`1.5e-07`, `1.23457e+08`).
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);

    // Round to the requested significant digits first; rounding can carry
    // into the exponent (9.9999996 -> 1.00000e1).
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Write one formatted magnitude per line, in order
pub fn emit_magnitudes<W: Write>(out: &mut W, magnitudes: &[f64]) -> io::Result<()> {
    for magnitude in magnitudes {
        writeln!(out, "{}", format_general(*magnitude))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_general(64.51302300856388), "64.513");
        assert_eq!(format_general(0.8683447152233518), "0.868345");
        assert_eq!(format_general(20.37387816723145), "20.3739");
        assert_eq!(format_general(1.5), "1.5");
        assert_eq!(format_general(100000.0), "100000");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(-2.25), "-2.25");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(format_general(1e6), "1e+06");
        assert_eq!(format_general(123456789.0), "1.23457e+08");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(1.5e-7), "1.5e-07");
        assert_eq!(format_general(2.5e120), "2.5e+120");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(format_general(9.9999996), "10");
        assert_eq!(format_general(999999.7), "1e+06");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(-0.0), "-0");
        assert_eq!(format_general(f64::NAN), "nan");
        assert_eq!(format_general(f64::INFINITY), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_custom_precision() {
        assert_eq!(format_significant(3.14159265, 3), "3.14");
        assert_eq!(format_significant(3.14159265, 0), "3");
        assert_eq!(format_significant(1234.0, 2), "1.2e+03");
    }

    #[test]
    fn test_emit_one_per_line() {
        let mut out = Vec::new();
        emit_magnitudes(&mut out, &[1.0, 0.5, 64.513]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n0.5\n64.513\n");
    }
}
