// ============================================================================
// Boundary Handler Interface
// Defines the contract for receiving safe-range diagnostics
// ============================================================================

use crate::domain::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operation that produced an out-of-range intermediate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    /// Integer product inside `mul`
    Multiply,
    /// Fixed-point operand inside `div`
    Divide,
    /// Direct call to `check_boundary`
    Check,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Multiply => write!(f, "mul"),
            Operation::Divide => write!(f, "div"),
            Operation::Check => write!(f, "check"),
        }
    }
}

/// A value found outside the safe integer range.
///
/// Purely advisory: the computation that produced it carries on, and its
/// result may have lost precision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundaryViolation {
    /// The offending value
    pub value: f64,
    /// Where it was observed
    pub operation: Operation,
    /// Upper safe bound at the time of the check
    pub max_safe: f64,
    /// Lower safe bound at the time of the check
    pub min_safe: f64,
    /// When the violation was observed
    pub timestamp: DateTime<Utc>,
}

impl BoundaryViolation {
    /// Create a violation record stamped with the current time
    pub fn new(value: f64, operation: Operation) -> Self {
        Self {
            value,
            operation,
            max_safe: MAX_SAFE_INTEGER,
            min_safe: MIN_SAFE_INTEGER,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for BoundaryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} is outside the safe integer range ({}, {}), result may be inaccurate",
            self.value, self.operation, self.max_safe, self.min_safe
        )
    }
}

/// Sink for boundary diagnostics.
/// Implementations can log, count, collect or forward violations.
pub trait BoundaryHandler: Send + Sync {
    /// Handle a single violation
    fn on_violation(&self, violation: BoundaryViolation);

    /// Batch handler (optional optimization)
    fn on_violations(&self, violations: Vec<BoundaryViolation>) {
        for violation in violations {
            self.on_violation(violation);
        }
    }
}

/// Handler that discards every violation
pub struct NoOpBoundaryHandler;

impl BoundaryHandler for NoOpBoundaryHandler {
    fn on_violation(&self, _violation: BoundaryViolation) {
        // Do nothing
    }
}

/// Handler that emits a `tracing` warning per violation
pub struct LoggingBoundaryHandler;

impl BoundaryHandler for LoggingBoundaryHandler {
    fn on_violation(&self, violation: BoundaryViolation) {
        tracing::warn!(
            value = violation.value,
            operation = %violation.operation,
            max_safe = violation.max_safe,
            min_safe = violation.min_safe,
            "{}",
            violation
        );
    }
}

/// Handler that keeps every violation in memory, in arrival order
#[derive(Default)]
pub struct CollectingBoundaryHandler {
    violations: Mutex<Vec<BoundaryViolation>>,
}

impl CollectingBoundaryHandler {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything collected so far
    pub fn violations(&self) -> Vec<BoundaryViolation> {
        self.violations.lock().clone()
    }

    /// Number of violations collected
    pub fn len(&self) -> usize {
        self.violations.lock().len()
    }

    /// Check if nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.violations.lock().is_empty()
    }

    /// Remove and return everything collected
    pub fn drain(&self) -> Vec<BoundaryViolation> {
        std::mem::take(&mut *self.violations.lock())
    }
}

impl BoundaryHandler for CollectingBoundaryHandler {
    fn on_violation(&self, violation: BoundaryViolation) {
        self.violations.lock().push(violation);
    }

    fn on_violations(&self, violations: Vec<BoundaryViolation>) {
        self.violations.lock().extend(violations);
    }
}
