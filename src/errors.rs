use thiserror::Error;

use crate::models::{LetterKind, Phase};

/// Rejected game operations. Dictionary load failures never surface
/// here: the lexicon falls back to a fixed word list instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// An operation was invoked outside its required phase.
    #[error("operation requires the {required:?} phase but the game is in {actual:?}")]
    WrongPhase { required: Phase, actual: Phase },

    /// A draw was attempted against a pool with no remaining weight.
    #[error("no {0}s left in the pool")]
    Exhausted(LetterKind),

    /// The next round was requested before the current one finished.
    #[error("current round is not complete")]
    RoundNotComplete,
}
