// ============================================================================
// Logging Setup
// Installs a `tracing-subscriber` formatter so boundary warnings are visible
// ============================================================================

use tracing::Level;

/// Install a global formatting subscriber at `level`.
///
/// Returns false if a global subscriber was already set, which is harmless:
/// boundary warnings then go to that subscriber instead.
///
/// # Example
/// ```ignore
/// number_precision::utils::init_logging(tracing::Level::WARN);
/// number_precision::mul(9_007_199_254_740_991_i64, 2); // logs a warning
/// ```
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
