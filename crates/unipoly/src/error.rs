//! Error types for polynomial arithmetic.

use thiserror::Error;

/// Errors produced by polynomial operations.
///
/// All operations are deterministic and pure; they either produce a
/// result or fail immediately with one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Division or remainder by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,
}
