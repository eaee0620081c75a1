use thiserror::Error;

/// Indicates that a [`GameState`](crate::GameState) operation was called in a way that breaks its
/// contract.
///
/// Neither kind is transient: retrying the same call with the same input fails the same way.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum HangmanError {
    /// The caller passed a bad argument, such as a zero word length or a letter that was already
    /// guessed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation needs candidate words or remaining guesses, and there are none.
    #[error("Illegal state: {0}")]
    IllegalState(String),
}

/// Whether an automated guesser won or lost a round against the adversary.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// The guesser revealed every letter. Provides the letters that were guessed, in order.
    Won(Vec<char>),
    /// The guesser ran out of wrong guesses. Provides the letters that were guessed, in order.
    Lost(Vec<char>),
    /// The dictionary has no words of the requested length, so no round could be played.
    NoWordsOfLength,
}

/// The stage a round is in, derived from a [`GameState`](crate::GameState) by the caller.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum GameStatus {
    /// Guesses remain and at least one letter is still hidden.
    AwaitingGuess,
    /// Every letter has been revealed.
    Won,
    /// No guesses remain and at least one letter is still hidden.
    Lost,
}
