//! Errors raised by [`Sequence`](crate::section_3_2::Sequence) operations.

use thiserror::Error;

/// Failure of a sequence operation. The sequence is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Malformed construction parameters.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// An index or view boundary outside the permitted range.
    #[error("index {index} out of range (limit {limit})")]
    IndexOutOfRange { index: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, SequenceError>;

impl SequenceError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SequenceError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(index: usize, limit: usize) -> Self {
        SequenceError::IndexOutOfRange { index, limit }
    }
}
