// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod boundary_handler;

pub use boundary_handler::{
    BoundaryHandler, BoundaryViolation, CollectingBoundaryHandler, LoggingBoundaryHandler,
    NoOpBoundaryHandler, Operation,
};
