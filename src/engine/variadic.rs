// ============================================================================
// Variadic Operations
// Left folds of the binary operations over an ordered operand sequence
// ============================================================================

use super::calculator::Calculator;
use crate::numeric::{NumericError, NumericResult, Operand};

type BinaryOp = fn(&Calculator, &Operand, &Operand) -> f64;

impl Calculator {
    /// Multiply every operand, left to right.
    ///
    /// # Errors
    /// Returns `MissingOperands` when fewer than two operands are given.
    ///
    /// # Example
    /// ```
    /// use number_precision::engine::Calculator;
    ///
    /// let calc = Calculator::default();
    /// assert_eq!(calc.mul_all([2, 2, 2]), Ok(8.0));
    /// ```
    pub fn mul_all<I>(&self, operands: I) -> NumericResult<f64>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        self.fold(operands, Calculator::mul_operands)
    }

    /// Add every operand, left to right.
    ///
    /// # Errors
    /// Returns `MissingOperands` when fewer than two operands are given.
    pub fn add_all<I>(&self, operands: I) -> NumericResult<f64>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        self.fold(operands, Calculator::add_operands)
    }

    /// Subtract each later operand from the running result: `((a - b) - c) ...`
    ///
    /// # Errors
    /// Returns `MissingOperands` when fewer than two operands are given.
    pub fn sub_all<I>(&self, operands: I) -> NumericResult<f64>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        self.fold(operands, Calculator::sub_operands)
    }

    /// Divide the running result by each later operand: `((a / b) / c) ...`
    ///
    /// # Errors
    /// Returns `MissingOperands` when fewer than two operands are given.
    pub fn div_all<I>(&self, operands: I) -> NumericResult<f64>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        self.fold(operands, Calculator::div_operands)
    }

    /// Apply `op` pairwise, feeding each result back in as a number operand.
    fn fold<I>(&self, operands: I, op: BinaryOp) -> NumericResult<f64>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let mut operands = operands.into_iter().map(Into::into);

        let first = operands
            .next()
            .ok_or(NumericError::MissingOperands { given: 0 })?;
        let second = operands
            .next()
            .ok_or(NumericError::MissingOperands { given: 1 })?;

        let result = operands.fold(op(self, &first, &second), |acc, operand| {
            op(self, &Operand::Number(acc), &operand)
        });
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::Calculator;
    use crate::interfaces::{CollectingBoundaryHandler, NoOpBoundaryHandler, Operation};
    use crate::numeric::{NumericError, Operand};
    use std::sync::Arc;

    fn calc() -> Calculator {
        Calculator::with_handler(Arc::new(NoOpBoundaryHandler))
    }

    #[test]
    fn test_variadic_reduction() {
        let calc = calc();
        assert_eq!(calc.add_all([2, 2, 2]), Ok(6.0));
        assert_eq!(calc.sub_all([2, 2, 2]), Ok(-2.0));
        assert_eq!(calc.mul_all([2, 2, 2]), Ok(8.0));
        assert_eq!(calc.div_all([2, 2, 2]), Ok(0.5));
    }

    #[test]
    fn test_two_operands_match_binary_form() {
        let calc = calc();
        assert_eq!(calc.add_all([0.1, 0.2]), Ok(calc.add(0.1, 0.2)));
        assert_eq!(calc.div_all([0.3, 0.1]), Ok(calc.div(0.3, 0.1)));
    }

    #[test]
    fn test_left_to_right_order() {
        let calc = calc();
        // (10 - 3) - 2 vs 10 - (3 - 2)
        assert_eq!(calc.sub_all([10, 3, 2]), Ok(5.0));
        // (12 / 3) / 2 vs 12 / (3 / 2)
        assert_eq!(calc.div_all([12, 3, 2]), Ok(2.0));
    }

    #[test]
    fn test_mixed_operands() {
        let calc = calc();
        let operands = vec![
            Operand::from(0.1),
            Operand::from("0.2"),
            Operand::from(0.3),
        ];
        assert_eq!(calc.add_all(&operands), Ok(0.6));
        assert_eq!(calc.mul_all(&operands), Ok(0.006));
    }

    #[test]
    fn test_missing_operands() {
        let calc = calc();
        let none: [f64; 0] = [];
        assert_eq!(
            calc.add_all(none),
            Err(NumericError::MissingOperands { given: 0 })
        );
        assert_eq!(
            calc.mul_all([1.5]),
            Err(NumericError::MissingOperands { given: 1 })
        );
    }

    #[test]
    fn test_diagnostics_follow_evaluation_order() {
        let handler = Arc::new(CollectingBoundaryHandler::new());
        let calc = Calculator::with_handler(handler.clone());

        let result = calc.mul_all([1e8, 1e8, 10.0]).unwrap();
        assert_eq!(result, 1e17);

        let values: Vec<f64> = handler.violations().iter().map(|v| v.value).collect();
        assert_eq!(values, vec![1e16, 1e17]);
        assert!(handler
            .violations()
            .iter()
            .all(|v| v.operation == Operation::Multiply));
    }
}
