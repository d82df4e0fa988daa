use thiserror::Error;

use crate::recur::RepetitionType;

/// Rule decoding and occurrence calculation errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A stored repetition type tag outside the five supported kinds.
    #[error("Cannot calculate occurrences for repetition type \"{0}\"")]
    UnsupportedRepetitionType(String),

    /// A `moment` string that does not match the grammar its repetition
    /// type requires.
    #[error("Invalid moment \"{moment}\" for repetition type \"{repetition_type}\": {reason}")]
    InvalidMoment {
        repetition_type: RepetitionType,
        moment: String,
        reason: &'static str,
    },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
