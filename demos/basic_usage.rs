// ============================================================================
// Basic Usage Example
// ============================================================================

use number_precision::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    number_precision::utils::init_logging(tracing::Level::WARN);

    println!("=== Number Precision Example ===\n");

    // Native arithmetic vs corrected arithmetic
    println!("Native vs corrected:");
    println!("  0.1 + 0.2  = {} vs {}", 0.1 + 0.2, number_precision::add(0.1, 0.2));
    println!("  1 - 0.9    = {} vs {}", 1.0 - 0.9, number_precision::sub(1, 0.9));
    println!("  0.07 * 100 = {} vs {}", 0.07 * 100.0, number_precision::mul(0.07, 100));
    println!("  0.3 / 0.1  = {} vs {}", 0.3 / 0.1, number_precision::div(0.3, 0.1));

    // Rounding
    println!("\n=== Rounding ===");
    println!("  round(1.005, 2)       = {}", number_precision::round(1.005, 2));
    println!("  round(\"2.1235\", \"3\") = {}", number_precision::round("2.1235", "3"));
    println!("  round(-2.5, 0)        = {}", number_precision::round(-2.5, 0));

    // Variadic folds
    println!("\n=== Variadic ===");
    println!("  add_all([0.1, 0.2, 0.3]) = {:?}", number_precision::add_all([0.1, 0.2, 0.3]));
    println!("  div_all([2, 2, 2])       = {:?}", number_precision::div_all([2, 2, 2]));
    println!("  mul_all([1.5])           = {:?}", number_precision::mul_all([1.5]));

    // Calculator with its own diagnostics sink
    println!("\n=== Boundary Diagnostics ===");
    let handler = Arc::new(CollectingBoundaryHandler::new());
    let calc = CalculatorBuilder::new()
        .handler(handler.clone())
        .build()
        .expect("standard configuration is valid");

    let product = calc.mul(MAX_SAFE_INTEGER, 3);
    println!("  {} * 3 = {} (best effort)", MAX_SAFE_INTEGER, product);

    for violation in handler.drain() {
        println!("  {}", violation);
    }

    // Division policies
    println!("\n=== Division by Zero ===");
    println!("  div(1, 0)         = {}", calc.div(1, 0));
    println!("  checked_div(1, 0) = {:?}", calc.checked_div(1, 0));
}
