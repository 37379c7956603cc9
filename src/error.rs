use crate::types::GamePhase;

/// Result type for engine operations
pub type GameResult<T> = Result<T, GameError>;

/// Everything here is recoverable: the caller surfaces the message and the
/// engine state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no themes available, select a deck or add your own")]
    EmptyPool,

    #[error("need at least 2 players and at least one theme to start")]
    InsufficientSetup,

    #[error("voting for your own song is not allowed")]
    SelfVote,

    /// Invalid user input (empty name, duplicate name, empty song)
    #[error("{0}")]
    Validation(String),

    /// Contract failure: an operation was called in a phase that does not
    /// accept it. Not a user-facing condition; front-ends should only offer
    /// operations valid for the current phase.
    #[error("operation not allowed while in {0:?}")]
    WrongPhase(GamePhase),
}
