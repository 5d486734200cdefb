//! Errors raised by the library itself.
//!
//! Errors returned by caller-supplied callbacks are never wrapped in these types.
//! The `try_*` operations hand them back exactly as the callback produced them.

use thiserror::Error;

use crate::ShapeTag;

/// Main error type for misuse detected by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterError {
    /// The operation cannot produce a meaningful result with the given arguments.
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperation),

    /// The operation needs a repeatable input, but received a one-shot cursor.
    #[error("unsupported shape: `{operation}()` cannot run on an input classified as {shape}")]
    UnsupportedShape {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Classification of the rejected input.
        shape: ShapeTag,
    },
}

/// The ways an operation can be invoked incorrectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOperation {
    /// A seedless fold (`reduce()`, `sum()`) met an empty input.
    #[error("`{0}()` of sequence with no initial value")]
    NoInitialValue(&'static str),

    /// A range was asked to advance by zero.
    #[error("range step must not be zero")]
    ZeroStep,

    /// A range step moves away from its stop bound, so the range never ends.
    #[error("range step points away from the stop bound")]
    StepAwayFromStop,
}

impl IterError {
    /// Returns `true` if this is an [`IterError::InvalidOperation`].
    #[inline]
    pub const fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }

    /// Returns `true` if this is an [`IterError::UnsupportedShape`].
    #[inline]
    pub const fn is_unsupported_shape(&self) -> bool {
        matches!(self, Self::UnsupportedShape { .. })
    }
}

/// Result type alias for operations of this crate.
pub type Result<T, E = IterError> = std::result::Result<T, E>;
