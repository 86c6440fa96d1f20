// ============================================================================
// Textual Number Forms
// Canonical shortest decimal strings, significant-digit rounding and
// numeric-string coercion
// ============================================================================

use smallvec::SmallVec;
use std::fmt::Write;

type Digits = SmallVec<[u8; 32]>;

/// Upper bound on significant digits in the exact decimal expansion of an f64.
const EXACT_SIGNIFICANT_DIGITS: usize = 767;

/// Largest decimal point position still written without an exponent.
const MAX_FIXED_POINT: i32 = 21;

/// Smallest decimal point position still written without an exponent.
const MIN_FIXED_POINT: i32 = -6;

/// Decimal digits of a finite, non-zero magnitude: `0.d1 d2 .. dk × 10^point`.
struct Decomposition {
    digits: Digits,
    point: i32,
}

/// Split Rust's `LowerExp` output (`d.ddd e x`) into digits and point position.
fn decompose(scientific: &str) -> Decomposition {
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    Decomposition {
        digits,
        point: exponent + 1,
    }
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|d| char::from(b'0' + d)));
}

fn push_zeros(out: &mut String, count: i32) {
    out.extend(std::iter::repeat_n('0', count.max(0) as usize));
}

/// Canonical decimal form of a number.
///
/// Uses the shortest digit string that round-trips to the same `f64`, laid out
/// in positional notation while the decimal point lies within
/// `(-6, 21]` digits of the first significant digit and in exponential
/// notation (`1.5e-7`, `1e+21`) outside that window.
///
/// # Examples
/// ```
/// use number_precision::numeric::canonical;
///
/// assert_eq!(canonical(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(canonical(1.5e-7), "1.5e-7");
/// assert_eq!(canonical(1e21), "1e+21");
/// assert_eq!(canonical(100.0), "100");
/// ```
pub fn canonical(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let Decomposition { digits, point } = decompose(&format!("{:e}", value.abs()));
    let len = digits.len() as i32;

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }

    if len <= point && point <= MAX_FIXED_POINT {
        push_digits(&mut out, &digits);
        push_zeros(&mut out, point - len);
    } else if 0 < point && point <= MAX_FIXED_POINT {
        let (integer, fraction) = digits.split_at(point as usize);
        push_digits(&mut out, integer);
        out.push('.');
        push_digits(&mut out, fraction);
    } else if MIN_FIXED_POINT < point && point <= 0 {
        out.push_str("0.");
        push_zeros(&mut out, -point);
        push_digits(&mut out, &digits);
    } else {
        let exponent = point - 1;
        push_digits(&mut out, &digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            push_digits(&mut out, &digits[1..]);
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        let _ = write!(out, "e{}{}", sign, exponent.unsigned_abs());
    }

    out
}

/// Round `value` to `precision` significant digits and reparse it.
///
/// Rounding works on the exact decimal expansion of the double, so a digit
/// string that is exactly halfway rounds to the larger magnitude. Zero of
/// either sign becomes `+0`; NaN and infinities pass through.
///
/// `precision` must be at least 1; callers validate the range.
pub(crate) fn round_significant(value: f64, precision: usize) -> f64 {
    debug_assert!(precision > 0, "precision must be positive");

    if !value.is_finite() {
        return value;
    }
    if value == 0.0 {
        return 0.0;
    }

    let exact = format!("{:.*e}", EXACT_SIGNIFICANT_DIGITS - 1, value.abs());
    let Decomposition {
        mut digits,
        mut point,
    } = decompose(&exact);

    let round_up = digits.get(precision).is_some_and(|&d| d >= 5);
    digits.truncate(precision);
    if round_up && increment(&mut digits) {
        point += 1;
    }

    let mut text = String::with_capacity(precision + 12);
    if value < 0.0 {
        text.push('-');
    }
    text.push_str("0.");
    push_digits(&mut text, &digits);
    let _ = write!(text, "e{}", point);

    text.parse().unwrap_or(f64::NAN)
}

/// Add one unit in the last place. Returns true when the carry ran off the
/// front, in which case the digits read `100..0` and the point must move up.
fn increment(digits: &mut Digits) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    if let Some(first) = digits.first_mut() {
        *first = 1;
    }
    true
}

/// Coerce a numeric string to a number.
///
/// Surrounding whitespace is ignored and an empty string is zero.
/// `Infinity` (optionally signed), `0x`/`0o`/`0b` integer literals and plain
/// decimal or exponent syntax are accepted; anything else is NaN.
///
/// # Examples
/// ```
/// use number_precision::numeric::parse_number;
///
/// assert_eq!(parse_number(" 1.50 "), 1.5);
/// assert_eq!(parse_number(""), 0.0);
/// assert_eq!(parse_number("0x10"), 16.0);
/// assert!(parse_number("abc").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {},
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    // Rust's float parser also takes "inf" and "nan"; those are not numeric strings here
    let decimal_syntax = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal_syntax {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}
