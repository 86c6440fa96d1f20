// ============================================================================
// Calculator Configuration
// Tunables for noise stripping and boundary diagnostics
// ============================================================================

use crate::numeric::{validate_precision, NumericResult, DEFAULT_STRIP_PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a `Calculator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Significant digits kept when stripping noise from scaled exponential
    /// operands (1-100, default 12)
    pub strip_precision: u32,

    /// Whether boundary violations are reported to the handler.
    /// `check_boundary` returns the same answer either way.
    pub boundary_warnings: bool,
}

impl CalculatorConfig {
    /// Create a configuration with explicit parameters
    pub fn new(strip_precision: u32, boundary_warnings: bool) -> Self {
        Self {
            strip_precision,
            boundary_warnings,
        }
    }

    /// Builder method: Set strip precision
    pub fn with_strip_precision(mut self, precision: u32) -> Self {
        self.strip_precision = precision;
        self
    }

    /// Builder method: Enable or disable boundary warnings
    pub fn with_boundary_warnings(mut self, enabled: bool) -> Self {
        self.boundary_warnings = enabled;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `strip_precision` is outside `1..=100`.
    pub fn validate(&self) -> NumericResult<()> {
        validate_precision(self.strip_precision)?;
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    /// 12 significant digits, boundary warnings on
    pub fn standard() -> Self {
        Self::new(DEFAULT_STRIP_PRECISION, true)
    }

    /// 12 significant digits, boundary warnings off
    pub fn quiet() -> Self {
        Self::new(DEFAULT_STRIP_PRECISION, false)
    }
}
