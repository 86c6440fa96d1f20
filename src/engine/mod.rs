// ============================================================================
// Engine Module
// Contains the precision-corrected arithmetic
// ============================================================================

mod calculator;
mod variadic;

pub mod factory;

#[cfg(test)]
mod proptests;

pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorBuilder};
