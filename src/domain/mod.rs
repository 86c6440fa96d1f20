// ============================================================================
// Domain Module
// Safe-range bounds and calculator configuration
// ============================================================================

pub mod bounds;
pub mod config;

pub use bounds::{exceeds_safe_range, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use config::CalculatorConfig;
