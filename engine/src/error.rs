use thiserror::Error;

/// Failures surfaced by the guess engine.
///
/// None of these are fatal to the process. `NotFound` is the only one a
/// player should ever see; the others indicate a caller bug or a broken
/// catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("the element catalog is empty")]
    EmptyCatalog,
    #[error("no element named or symbolized {input:?}")]
    NotFound { input: String },
    #[error("the round is already over")]
    GameAlreadyOver,
    #[error("no round has been started")]
    NotStarted,
}
