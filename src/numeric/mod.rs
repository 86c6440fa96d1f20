// ============================================================================
// Numeric Module
// Textual number forms and digit-scaling primitives
// ============================================================================
//
// This module provides:
// - Operand: number or numeric string input
// - canonical / parse_number: number <-> text conversions
// - digit_length / float_to_fixed / strip: the scaling primitives
// - NumericError: Error types for contract violations
//
// Arithmetic built on these lives in `engine`.

mod errors;
mod format;
mod operand;
mod scaling;

pub use errors::{NumericError, NumericResult};
pub use format::{canonical, parse_number};
pub use operand::Operand;
pub use scaling::{
    digit_length, float_to_fixed, pow10, strip, strip_with_precision, validate_precision,
    DEFAULT_STRIP_PRECISION, MAX_PRECISION, MIN_PRECISION,
};

pub(crate) use scaling::{exponent, float_to_fixed_with};
