//! Error handling for PaintKit.
//!
//! All failures in the engine are programmer-error-class: the presentation
//! layer is expected to guarantee preconditions before issuing commands.
//! Transforms on an empty selection are silent no-ops; operations with no
//! defined result for bad input fail fast with an [`EngineError`].

use thiserror::Error;

/// Engine error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Scale factors must be strictly positive.
    #[error("Scale factors must be positive, got ({sx}, {sy})")]
    InvalidScaleFactor {
        /// The requested horizontal factor.
        sx: f64,
        /// The requested vertical factor.
        sy: f64,
    },

    /// A rotation or scale was requested with a non-finite parameter.
    #[error("Transform parameter is not finite: {value}")]
    NonFiniteParameter {
        /// The offending value.
        value: f64,
    },
}

/// Convenience result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
