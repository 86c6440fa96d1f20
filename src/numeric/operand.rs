// ============================================================================
// Operand
// A number or numeric string accepted by every arithmetic operation
// ============================================================================

use super::format::{canonical, parse_number};
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input to the precision-corrected operations.
///
/// A `Number` is read through its canonical decimal form, so `0.1` has one
/// fractional digit. A `Text` operand is read as written, so `"1.50"` has
/// two, while its numeric value is the coerced string.
///
/// # Example
/// ```
/// use number_precision::numeric::Operand;
///
/// let a = Operand::from(1.5);
/// let b = Operand::from("1.50");
/// assert_eq!(a.value(), b.value());
/// assert_eq!(a.repr(), "1.5");
/// assert_eq!(b.repr(), "1.50");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Operand {
    /// Native double
    Number(f64),
    /// Numeric string, kept verbatim
    Text(String),
}

impl Operand {
    /// Textual form used for digit counting and fixed-point conversion.
    pub fn repr(&self) -> Cow<'_, str> {
        match self {
            Operand::Number(value) => Cow::Owned(canonical(*value)),
            Operand::Text(text) => Cow::Borrowed(text.as_str()),
        }
    }

    /// Numeric value. Non-numeric text yields NaN.
    pub fn value(&self) -> f64 {
        match self {
            Operand::Number(value) => *value,
            Operand::Text(text) => parse_number(text),
        }
    }

    /// Check if this operand holds text rather than a number.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Operand::Text(_))
    }
}

impl Default for Operand {
    fn default() -> Self {
        Operand::Number(0.0)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<&f64> for Operand {
    #[inline]
    fn from(value: &f64) -> Self {
        Operand::Number(*value)
    }
}

macro_rules! impl_from_lossless {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                #[inline]
                fn from(value: $ty) -> Self {
                    Operand::Number(f64::from(value))
                }
            }
        )*
    };
}

impl_from_lossless!(f32, i8, i16, i32, u8, u16, u32);

// 64-bit integers beyond the safe range round here, the same as any f64 input
impl From<i64> for Operand {
    #[inline]
    fn from(value: i64) -> Self {
        Operand::Number(value as f64)
    }
}

impl From<u64> for Operand {
    #[inline]
    fn from(value: u64) -> Self {
        Operand::Number(value as f64)
    }
}

impl From<&str> for Operand {
    #[inline]
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    #[inline]
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}

impl From<&String> for Operand {
    #[inline]
    fn from(text: &String) -> Self {
        Operand::Text(text.clone())
    }
}

impl From<&Operand> for Operand {
    #[inline]
    fn from(operand: &Operand) -> Self {
        operand.clone()
    }
}
