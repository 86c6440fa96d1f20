// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::{BoundaryHandler, LoggingBoundaryHandler};
use crate::numeric::NumericResult;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `handler` - Sink for boundary violations
///
/// # Errors
/// Returns `InvalidPrecision` if the configured strip precision is out of range.
///
/// # Example
/// ```
/// use number_precision::prelude::*;
/// use std::sync::Arc;
///
/// let calc = create_from_config(CalculatorConfig::quiet(), Arc::new(NoOpBoundaryHandler)).unwrap();
/// assert_eq!(calc.add(0.1, 0.2), 0.3);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    handler: Arc<dyn BoundaryHandler>,
) -> NumericResult<Calculator> {
    config.validate()?;

    tracing::debug!(
        strip_precision = config.strip_precision,
        boundary_warnings = config.boundary_warnings,
        "creating calculator"
    );

    Ok(Calculator::new(config, handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use number_precision::prelude::*;
/// use std::sync::Arc;
///
/// let handler = Arc::new(CollectingBoundaryHandler::new());
/// let calc = CalculatorBuilder::new()
///     .strip_precision(14)
///     .handler(handler.clone())
///     .build()
///     .unwrap();
///
/// calc.check_boundary(1e20);
/// assert_eq!(handler.len(), 1);
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    handler: Option<Arc<dyn BoundaryHandler>>,
}

impl CalculatorBuilder {
    /// Create a builder with the standard configuration
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::standard(),
            handler: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            handler: None,
        }
    }

    /// Set significant digits used when stripping noise
    pub fn strip_precision(mut self, precision: u32) -> Self {
        self.config.strip_precision = precision;
        self
    }

    /// Report boundary violations to the handler (default)
    pub fn boundary_warnings(mut self) -> Self {
        self.config.boundary_warnings = true;
        self
    }

    /// Check boundaries without reporting
    pub fn quiet(mut self) -> Self {
        self.config.boundary_warnings = false;
        self
    }

    /// Set the boundary handler (defaults to `LoggingBoundaryHandler`)
    pub fn handler(mut self, handler: Arc<dyn BoundaryHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Build the calculator
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if the strip precision is out of range.
    pub fn build(self) -> NumericResult<Calculator> {
        let handler = self
            .handler
            .unwrap_or_else(|| Arc::new(LoggingBoundaryHandler));
        create_from_config(self.config, handler)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{CollectingBoundaryHandler, NoOpBoundaryHandler};
    use crate::numeric::NumericError;

    #[test]
    fn test_create_from_config() {
        let calc = create_from_config(CalculatorConfig::standard(), Arc::new(NoOpBoundaryHandler))
            .unwrap();
        assert_eq!(calc.mul(0.1, 3), 0.3);
    }

    #[test]
    fn test_create_from_invalid_config() {
        let config = CalculatorConfig::standard().with_strip_precision(0);
        let result = create_from_config(config, Arc::new(NoOpBoundaryHandler));
        assert!(matches!(result, Err(NumericError::InvalidPrecision(0))));
    }

    #[test]
    fn test_builder_defaults() {
        let builder = CalculatorBuilder::new();
        assert_eq!(*builder.config(), CalculatorConfig::standard());

        let calc = builder.build().unwrap();
        assert_eq!(calc.config().strip_precision, 12);
    }

    #[test]
    fn test_builder_quiet() {
        let handler = Arc::new(CollectingBoundaryHandler::new());
        let calc = CalculatorBuilder::new()
            .quiet()
            .handler(handler.clone())
            .build()
            .unwrap();

        assert!(calc.check_boundary(1e20));
        assert!(handler.is_empty());
    }

    #[test]
    fn test_builder_rejects_precision() {
        let result = CalculatorBuilder::from_config(CalculatorConfig::quiet())
            .strip_precision(101)
            .build();
        assert!(matches!(result, Err(NumericError::InvalidPrecision(101))));
    }

    #[test]
    fn test_builder_boundary_warnings_reenable() {
        let builder = CalculatorBuilder::from_config(CalculatorConfig::quiet()).boundary_warnings();
        assert!(builder.config().boundary_warnings);
    }
}
