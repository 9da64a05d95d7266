//! Error types for coefficient construction.
//!
//! The filtering hot path never fails: saturation is counted, not raised.
//! Everything here is reported while building coefficient sets, before any
//! sample is processed.

use thiserror::Error;

use crate::coefficients::MAX_ORDER;

/// Result type for coefficient construction
pub type Result<T> = std::result::Result<T, FilterError>;

/// Misuse caught when a coefficient set is built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A b/a set needs at least one tap
    #[error("coefficient set is empty, order must be at least 1")]
    EmptyCoefficients,

    /// Numerator and denominator differ in length
    #[error("coefficient length mismatch: b has {b} taps, a has {a}")]
    LengthMismatch { b: usize, a: usize },

    /// The delay line holds at most `MAX_ORDER` taps
    #[error("order {order} exceeds the delay line capacity of {} taps", MAX_ORDER)]
    OrderTooLarge { order: usize },

    /// A flat SOS table is not a whole number of 6-coefficient records
    #[error("SOS table of {len} values is not a multiple of 6")]
    RaggedSections { len: usize },

    /// Only sets of up to three taps fit into one second-order section
    #[error("order {order} does not fit into a single second-order section")]
    NotABiquad { order: usize },
}
