// ============================================================================
// Safe Integer Bounds
// The range in which an f64 represents every integer exactly
// ============================================================================

/// Largest integer n such that n and n + 1 are both exact f64 values (2^53 - 1)
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Negation of `MAX_SAFE_INTEGER`
pub const MIN_SAFE_INTEGER: f64 = -9_007_199_254_740_991.0;

/// Check if `value` lies outside the safe integer range.
///
/// NaN compares false on both sides and is never out of range.
#[inline]
pub fn exceeds_safe_range(value: f64) -> bool {
    value > MAX_SAFE_INTEGER || value < MIN_SAFE_INTEGER
}
