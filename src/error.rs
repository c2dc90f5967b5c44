/*
    Errors
*/

use thiserror::Error;

/// Failures raised by the conversion entry points.
///
/// Every variant is surfaced at the point of detection; there is no partial
/// or best-effort result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Exactly one argument is required.
    #[error("expected exactly 1 argument, received {received}")]
    Arity { received: usize },

    /// The argument does not have the type the operation requires.
    #[error("expected a {expected} argument, received {received}")]
    Type {
        expected: &'static str,
        received: &'static str,
    },

    /// The string is not a decimal literal.
    #[error("invalid decimal literal {literal:?}: unexpected input at offset {offset}")]
    Syntax { literal: String, offset: usize },

    /// The literal lies beyond the largest finite binary64 value, or its
    /// exponent lies outside the range an `ExactDecimal` accepts.
    #[error("{literal} is too large to be precisely represented")]
    Magnitude { literal: String },

    /// The literal has no exact binary64 representation.
    /// `nearest` is the exact decimal value of the closest binary64 value.
    #[error("{literal} cannot be precisely represented, the nearest representable value is {nearest}")]
    PrecisionLoss { literal: String, nearest: String },
}

/// Failures raised while installing the process-wide configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configuration has already been initialized")]
    AlreadyInitialized,

    #[error("working precision {requested} is outside of [{min}, {max}]")]
    PrecisionOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("invalid value {value:?} for environment variable {var}")]
    InvalidEnv { var: &'static str, value: String },
}
