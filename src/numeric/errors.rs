// ============================================================================
// Numeric Errors
// Error types for precision-corrected arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during precision-corrected arithmetic.
///
/// Plain arithmetic never fails: boundary overflow is advisory and non-numeric
/// input surfaces as NaN. These variants cover the few explicit contract checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Significant-digit precision outside the supported range
    InvalidPrecision(u32),
    /// A variadic operation received fewer than two operands
    MissingOperands {
        /// Number of operands actually supplied
        given: usize,
    },
    /// Divisor scales to zero (only reported by `checked_div`)
    DivisionByZero,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidPrecision(precision) => write!(
                f,
                "invalid precision: {} is outside the supported range {}..={}",
                precision,
                super::MIN_PRECISION,
                super::MAX_PRECISION
            ),
            NumericError::MissingOperands { given } => write!(
                f,
                "missing operands: at least 2 required, {} given",
                given
            ),
            NumericError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
