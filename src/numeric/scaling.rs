// ============================================================================
// Digit Scaling
// Primitives that move decimal operands into and out of integer space
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::format::{parse_number, round_significant};
use super::operand::Operand;

/// Significant digits kept by `strip` when no precision is given
pub const DEFAULT_STRIP_PRECISION: u32 = 12;

/// Smallest supported significant-digit precision
pub const MIN_PRECISION: u32 = 1;

/// Largest supported significant-digit precision
pub const MAX_PRECISION: u32 = 100;

/// Largest power of ten that is exactly representable in an f64
const MAX_EXACT_POW10: u32 = 22;

/// Compute 10^exp, correctly rounded for every exponent.
///
/// Within `±22` the power is exact and a negative exponent is a single
/// correctly rounded division. Beyond that, repeated multiplication drifts
/// by a few ulps, so the literal `1e{exp}` is parsed instead. Overflow gives
/// infinity and underflow gives zero.
#[inline]
pub fn pow10(exp: i32) -> f64 {
    if exp.unsigned_abs() > MAX_EXACT_POW10 {
        format!("1e{exp}").parse().unwrap_or(f64::NAN)
    } else if exp >= 0 {
        10f64.powi(exp)
    } else {
        1.0 / 10f64.powi(-exp)
    }
}

/// Digit count as a power-of-ten exponent, saturating at `i32::MAX`.
#[inline]
pub(crate) fn exponent(len: u32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Validate a significant-digit precision.
///
/// # Errors
/// Returns `InvalidPrecision` outside `MIN_PRECISION..=MAX_PRECISION`.
#[inline]
pub fn validate_precision(precision: u32) -> NumericResult<u32> {
    if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        Ok(precision)
    } else {
        Err(NumericError::InvalidPrecision(precision))
    }
}

/// Strip floating-point noise by rounding to 12 significant digits.
///
/// # Example
/// ```
/// use number_precision::numeric::strip;
///
/// assert_eq!(strip(0.09999999999999998), 0.1);
/// assert_eq!(strip(0.1 + 0.2), 0.3);
/// ```
#[inline]
pub fn strip(value: f64) -> f64 {
    round_significant(value, DEFAULT_STRIP_PRECISION as usize)
}

/// Strip floating-point noise by rounding to `precision` significant digits.
///
/// # Errors
/// Returns `InvalidPrecision` when `precision` is outside `1..=100`.
pub fn strip_with_precision(value: f64, precision: u32) -> NumericResult<f64> {
    let precision = validate_precision(precision)?;
    Ok(round_significant(value, precision as usize))
}

/// Count of digits after the decimal point, exponent aware.
///
/// The mantissa's fractional digits minus the exponent, clamped at zero:
/// `1.23e-5` has `2 + 5 = 7`, `1.5e+21` has none.
pub fn digit_length(operand: &Operand) -> u32 {
    let repr = operand.repr();
    let mut parts = repr.splitn(2, ['e', 'E']);
    let mantissa = parts.next().unwrap_or_default();

    let fraction_len = mantissa.split('.').nth(1).map_or(0, str::len) as i64;
    // Text like " 1.5e-3 " or "1.5e" reaches here verbatim
    let exponent = match parts.next().map(str::trim) {
        Some("") | None => 0,
        Some(exponent) => match exponent.parse::<i64>() {
            Ok(exponent) => exponent,
            Err(_) => return 0,
        },
    };

    let len = fraction_len.saturating_sub(exponent);
    u32::try_from(len.max(0)).unwrap_or(u32::MAX)
}

/// Drop the decimal point, turning `operand` into an integer-valued f64.
///
/// Positional forms are converted textually (`1.23` reads as `123`), which
/// avoids a lossy multiply. Exponential forms are scaled by
/// `10^digit_length` and the product is stripped to `precision` significant
/// digits to remove the noise that multiply introduces.
pub(crate) fn float_to_fixed_with(operand: &Operand, precision: u32) -> f64 {
    let repr = operand.repr();
    if !repr.contains(['e', 'E']) {
        return parse_number(&repr.replacen('.', "", 1));
    }

    let len = digit_length(operand);
    if len > 0 {
        let scaled = operand.value() * pow10(exponent(len));
        round_significant(scaled, precision as usize)
    } else {
        operand.value()
    }
}

/// Drop the decimal point using the default strip precision.
///
/// # Example
/// ```
/// use number_precision::numeric::{float_to_fixed, Operand};
///
/// assert_eq!(float_to_fixed(&Operand::from(1.23)), 123.0);
/// assert_eq!(float_to_fixed(&Operand::from(1.23e-7)), 123.0);
/// ```
#[inline]
pub fn float_to_fixed(operand: &Operand) -> f64 {
    float_to_fixed_with(operand, DEFAULT_STRIP_PRECISION)
}
