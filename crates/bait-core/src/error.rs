use thiserror::Error;

use bait_model::BaitType;

/// Errors raised while deriving report tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    /// Every interaction of the subject fell in a noise category, so the
    /// row has nothing to normalize against.
    #[error("subject '{subject}' has no qualifying {bait} interactions")]
    EmptyRow { subject: String, bait: BaitType },
}

pub type Result<T> = std::result::Result<T, AggregateError>;
