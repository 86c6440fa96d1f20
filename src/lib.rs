// ============================================================================
// Number Precision Library
// Exact decimal-style arithmetic on f64 through digit scaling
// ============================================================================

//! # Number Precision
//!
//! Corrects binary floating-point error for decimal arithmetic, so that
//! `0.1 + 0.2` gives `0.3` without switching to a big-decimal type.
//!
//! ## How it works
//!
//! - **Digit scaling**: each operand is turned into an integer by removing
//!   its decimal point (`1.23` becomes `123`)
//! - **Integer arithmetic**: the operation runs on those integers, which is
//!   exact inside the safe integer range (±(2^53 - 1))
//! - **Rescaling**: the result is divided back by the combined power of ten
//! - **Boundary diagnostics**: intermediates that leave the safe range are
//!   reported to a pluggable `BoundaryHandler`; the computation carries on
//!
//! ## Example
//!
//! ```rust
//! use number_precision::prelude::*;
//! use std::sync::Arc;
//!
//! // Free functions use a shared calculator that logs through `tracing`
//! assert_eq!(number_precision::add(0.1, 0.2), 0.3);
//! assert_eq!(number_precision::round(1.005, 2), 1.01);
//! assert_eq!(number_precision::add_all([2, 2, 2]), Ok(6.0));
//!
//! // Or build a calculator with its own diagnostics sink
//! let handler = Arc::new(CollectingBoundaryHandler::new());
//! let calc = Calculator::with_handler(handler.clone());
//!
//! calc.mul(9_007_199_254_740_991_i64, 2);
//! assert_eq!(handler.len(), 1);
//! ```

use std::sync::LazyLock;

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

pub use numeric::{NumericError, NumericResult, Operand};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::interfaces::{
        BoundaryHandler, BoundaryViolation, CollectingBoundaryHandler, LoggingBoundaryHandler,
        NoOpBoundaryHandler, Operation,
    };
    pub use crate::numeric::{NumericError, NumericResult, Operand};
}

// ============================================================================
// Crate-level Operations
// Thin wrappers over a process-wide default calculator
// ============================================================================

static DEFAULT_CALCULATOR: LazyLock<engine::Calculator> =
    LazyLock::new(engine::Calculator::default);

/// Shared calculator behind the crate-level functions: standard
/// configuration, `LoggingBoundaryHandler`.
pub fn default_calculator() -> &'static engine::Calculator {
    &DEFAULT_CALCULATOR
}

/// Strip floating-point noise at 12 significant digits.
pub fn strip(value: f64) -> f64 {
    numeric::strip(value)
}

/// Strip floating-point noise at `precision` significant digits.
///
/// # Errors
/// Returns `InvalidPrecision` when `precision` is outside `1..=100`.
pub fn strip_with_precision(value: f64, precision: u32) -> NumericResult<f64> {
    numeric::strip_with_precision(value, precision)
}

/// Digits after the decimal point of `value`.
pub fn digit_length(value: impl Into<Operand>) -> u32 {
    numeric::digit_length(&value.into())
}

/// `value` with its decimal point removed.
pub fn float_to_fixed(value: impl Into<Operand>) -> f64 {
    numeric::float_to_fixed(&value.into())
}

/// Check if `value` is outside the safe integer range, logging a warning if so.
pub fn check_boundary(value: f64) -> bool {
    DEFAULT_CALCULATOR.check_boundary(value)
}

/// Exact multiplication.
pub fn mul(a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
    DEFAULT_CALCULATOR.mul(a, b)
}

/// Exact addition.
pub fn add(a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
    DEFAULT_CALCULATOR.add(a, b)
}

/// Exact subtraction.
pub fn sub(a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
    DEFAULT_CALCULATOR.sub(a, b)
}

/// Exact division; a zero divisor gives ±infinity or NaN.
pub fn div(a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
    DEFAULT_CALCULATOR.div(a, b)
}

/// Exact division that refuses a zero divisor.
///
/// # Errors
/// Returns `DivisionByZero` if `b` scales to zero.
pub fn checked_div(a: impl Into<Operand>, b: impl Into<Operand>) -> NumericResult<f64> {
    DEFAULT_CALCULATOR.checked_div(a, b)
}

/// Round half away from zero to `ratio` fractional digits.
pub fn round(value: impl Into<Operand>, ratio: impl Into<Operand>) -> f64 {
    DEFAULT_CALCULATOR.round(value, ratio)
}

/// Multiply all operands left to right.
///
/// # Errors
/// Returns `MissingOperands` when fewer than two operands are given.
pub fn mul_all<I>(operands: I) -> NumericResult<f64>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    DEFAULT_CALCULATOR.mul_all(operands)
}

/// Add all operands left to right.
///
/// # Errors
/// Returns `MissingOperands` when fewer than two operands are given.
pub fn add_all<I>(operands: I) -> NumericResult<f64>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    DEFAULT_CALCULATOR.add_all(operands)
}

/// Subtract all later operands from the first, left to right.
///
/// # Errors
/// Returns `MissingOperands` when fewer than two operands are given.
pub fn sub_all<I>(operands: I) -> NumericResult<f64>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    DEFAULT_CALCULATOR.sub_all(operands)
}

/// Divide the first operand by all later ones, left to right.
///
/// # Errors
/// Returns `MissingOperands` when fewer than two operands are given.
pub fn div_all<I>(operands: I) -> NumericResult<f64>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    DEFAULT_CALCULATOR.div_all(operands)
}
