// ============================================================================
// Calculator
// Exact decimal arithmetic through fixed-point digit scaling
// ============================================================================

use crate::domain::{exceeds_safe_range, CalculatorConfig};
use crate::interfaces::{BoundaryHandler, BoundaryViolation, LoggingBoundaryHandler, Operation};
use crate::numeric::{
    digit_length, exponent, float_to_fixed_with, pow10, NumericError, NumericResult, Operand,
    MAX_PRECISION, MIN_PRECISION,
};
use std::sync::Arc;

/// Precision-corrected arithmetic with a pluggable boundary handler.
///
/// Every operation scales its operands to integers by their decimal digit
/// counts, computes in integer space and scales back, so results match what
/// the same arithmetic on paper would give (within the safe integer range).
///
/// A calculator holds no mutable state and is cheap to share behind an `Arc`.
pub struct Calculator {
    /// Noise stripping and diagnostics configuration
    config: CalculatorConfig,

    /// Sink for safe-range violations
    handler: Arc<dyn BoundaryHandler>,
}

impl Calculator {
    /// Create a new calculator.
    ///
    /// An out-of-range strip precision is clamped into `1..=100`; go through
    /// `create_from_config` or `CalculatorBuilder` to reject it instead.
    pub fn new(config: CalculatorConfig, handler: Arc<dyn BoundaryHandler>) -> Self {
        let config = config
            .with_strip_precision(config.strip_precision.clamp(MIN_PRECISION, MAX_PRECISION));
        Self { config, handler }
    }

    /// Create a calculator with the standard configuration and the given handler
    pub fn with_handler(handler: Arc<dyn BoundaryHandler>) -> Self {
        Self::new(CalculatorConfig::standard(), handler)
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    /// Digits after the decimal point of `value`'s textual form.
    pub fn digit_length(&self, value: impl Into<Operand>) -> u32 {
        digit_length(&value.into())
    }

    /// `value` with its decimal point removed, as an integer-valued f64.
    pub fn float_to_fixed(&self, value: impl Into<Operand>) -> f64 {
        self.fixed(&value.into())
    }

    /// Round to the configured number of significant digits.
    pub fn strip(&self, value: f64) -> f64 {
        crate::numeric::strip_with_precision(value, self.config.strip_precision)
            .unwrap_or(value)
    }

    /// Check if `value` lies outside the safe integer range, reporting it to
    /// the handler when it does.
    pub fn check_boundary(&self, value: f64) -> bool {
        self.report_boundary(value, Operation::Check)
    }

    #[inline]
    fn fixed(&self, operand: &Operand) -> f64 {
        float_to_fixed_with(operand, self.config.strip_precision)
    }

    fn report_boundary(&self, value: f64, operation: Operation) -> bool {
        if !exceeds_safe_range(value) {
            return false;
        }
        if self.config.boundary_warnings {
            self.handler
                .on_violation(BoundaryViolation::new(value, operation));
        }
        true
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact multiplication.
    ///
    /// # Example
    /// ```
    /// use number_precision::engine::Calculator;
    ///
    /// let calc = Calculator::default();
    /// assert_eq!(calc.mul(0.07, 100), 7.0);
    /// assert_eq!(calc.mul("1.50", 2), 3.0);
    /// ```
    pub fn mul(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
        self.mul_operands(&a.into(), &b.into())
    }

    /// Exact addition.
    pub fn add(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
        self.add_operands(&a.into(), &b.into())
    }

    /// Exact subtraction.
    pub fn sub(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
        self.sub_operands(&a.into(), &b.into())
    }

    /// Exact division.
    ///
    /// A divisor that scales to zero gives ±infinity or NaN, the same as
    /// native division. Use `checked_div` to reject it.
    pub fn div(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
        self.div_operands(&a.into(), &b.into())
    }

    /// Exact division that refuses a zero divisor.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `b` scales to zero.
    pub fn checked_div(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> NumericResult<f64> {
        let (a, b) = (a.into(), b.into());
        if self.fixed(&b) == 0.0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.div_operands(&a, &b))
    }

    /// Round half away from zero to `ratio` fractional digits.
    ///
    /// `ratio` may be a number or a numeric string; negative ratios round to
    /// tens, hundreds and so on.
    ///
    /// # Example
    /// ```
    /// use number_precision::engine::Calculator;
    ///
    /// let calc = Calculator::default();
    /// assert_eq!(calc.round(1.005, 2), 1.01);
    /// assert_eq!(calc.round("2.1235", "3"), 2.124);
    /// ```
    pub fn round(&self, value: impl Into<Operand>, ratio: impl Into<Operand>) -> f64 {
        let base = Operand::Number(scale_factor(ratio.into().value()));
        let scaled = self.mul_operands(&value.into(), &base).round();
        self.div_operands(&Operand::Number(scaled), &base)
    }

    pub(crate) fn mul_operands(&self, a: &Operand, b: &Operand) -> f64 {
        let fixed_a = self.fixed(a);
        let fixed_b = self.fixed(b);
        let base = digit_length(a).saturating_add(digit_length(b));
        let product = fixed_a * fixed_b;

        self.report_boundary(product, Operation::Multiply);

        product / pow10(exponent(base))
    }

    pub(crate) fn add_operands(&self, a: &Operand, b: &Operand) -> f64 {
        let base = self.common_base(a, b);
        (self.mul_operands(a, &base) + self.mul_operands(b, &base)) / base.value()
    }

    pub(crate) fn sub_operands(&self, a: &Operand, b: &Operand) -> f64 {
        let base = self.common_base(a, b);
        (self.mul_operands(a, &base) - self.mul_operands(b, &base)) / base.value()
    }

    pub(crate) fn div_operands(&self, a: &Operand, b: &Operand) -> f64 {
        let fixed_a = self.fixed(a);
        let fixed_b = self.fixed(b);

        self.report_boundary(fixed_a, Operation::Divide);
        self.report_boundary(fixed_b, Operation::Divide);

        let shift = exponent(digit_length(b)) - exponent(digit_length(a));
        self.mul_operands(
            &Operand::Number(fixed_a / fixed_b),
            &Operand::Number(pow10(shift)),
        )
    }

    /// 10^max(digit_length(a), digit_length(b))
    fn common_base(&self, a: &Operand, b: &Operand) -> Operand {
        let len = digit_length(a).max(digit_length(b));
        Operand::Number(pow10(exponent(len)))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_handler(Arc::new(LoggingBoundaryHandler))
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// 10^ratio, exact for integral ratios
fn scale_factor(ratio: f64) -> f64 {
    if ratio.fract() == 0.0 && ratio.abs() <= f64::from(i32::MAX) {
        pow10(ratio as i32)
    } else {
        10f64.powf(ratio)
    }
}
