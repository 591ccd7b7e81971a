//! Error type for label generation.

/// Error type for range construction, rule registration and production.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// The range does not hold at least two values.
    #[error("upper bound ({upper}) must be greater than lower bound ({lower})")]
    InvalidRange {
        /// Requested lower bound.
        lower: i64,
        /// Requested upper bound.
        upper: i64,
    },

    /// The divisor already has a rule on this generator.
    #[error("duplicate divisor rule: {divisor}")]
    DuplicateRule {
        /// The divisor that was registered twice.
        divisor: i64,
    },

    /// Every value in the range has been produced.
    #[error("end of sequence reached (upper bound {upper})")]
    SequenceExhausted {
        /// Upper bound of the exhausted range.
        upper: i64,
    },
}
