use crate::pattern::*;
use crate::results::HangmanError;
use log::debug;
use log::trace;
use std::collections::BTreeSet;
use std::result::Result;

/// Tracks a single round of hangman in which the secret word is never chosen.
///
/// Instead of picking a word up front, the game keeps every dictionary word that still agrees with
/// what the guesser has been shown. On each guess it splits those words by the pattern the guess
/// would reveal, and keeps whichever group is largest. A wrong guess is only charged when that
/// group reveals nothing new.
///
/// ```
/// use evil_hangman::GameState;
///
/// let mut game = GameState::new(["bat", "car", "cat"], 3, 2).unwrap();
///
/// assert_eq!(game.record('t'), Ok(1));
/// assert_eq!(game.pattern().unwrap(), "- - t");
/// assert_eq!(game.guesses_left(), 2);
/// assert_eq!(game.words().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    words: BTreeSet<String>,
    word_length: usize,
    pattern: Pattern,
    guessed: BTreeSet<char>,
    guesses_left: u32,
}

impl GameState {
    /// Starts a round using the words of exactly `length` letters from `words`.
    ///
    /// Duplicate words are collapsed. It is not an error for no word to have the requested length,
    /// but [`pattern`](Self::pattern) and [`record`](Self::record) will fail on such a game.
    ///
    /// Returns [`HangmanError::InvalidArgument`] if `length` is zero.
    pub fn new<I, S>(words: I, length: usize, max_wrong: u32) -> Result<GameState, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if length < 1 {
            return Err(HangmanError::InvalidArgument(format!(
                "word length must be at least 1, but was {}",
                length
            )));
        }
        let words: BTreeSet<String> = words
            .into_iter()
            .filter(|word| word.as_ref().chars().count() == length)
            .map(|word| word.as_ref().to_string())
            .collect();
        debug!(
            "Starting a round with {} words of length {} and {} wrong guesses allowed",
            words.len(),
            length,
            max_wrong
        );
        Ok(GameState {
            words,
            word_length: length,
            pattern: Pattern::unrevealed(length),
            guessed: BTreeSet::new(),
            guesses_left: max_wrong,
        })
    }

    /// The words that are still consistent with every guess made so far.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// The number of wrong guesses the guesser can still make.
    pub fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    /// The letters guessed so far.
    pub fn guesses(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns the current display, e.g. `"- e - - l"`.
    ///
    /// Returns [`HangmanError::IllegalState`] if there are no candidate words.
    pub fn pattern(&self) -> Result<String, HangmanError> {
        self.current_pattern().map(Pattern::to_string)
    }

    /// Returns the revealed letters as a [`Pattern`], with the same failure rule as
    /// [`pattern`](Self::pattern).
    pub fn current_pattern(&self) -> Result<&Pattern, HangmanError> {
        if self.words.is_empty() {
            return Err(HangmanError::IllegalState(
                "there are no words left to show a pattern for".to_string(),
            ));
        }
        Ok(&self.pattern)
    }

    /// Records a guess and returns how many times the guessed letter now shows in the pattern.
    ///
    /// Returns [`HangmanError::IllegalState`] if no guesses are left or there are no candidate
    /// words, or else [`HangmanError::InvalidArgument`] if the letter was already guessed. The
    /// game is unchanged when an error is returned.
    pub fn record(&mut self, guess: char) -> Result<usize, HangmanError> {
        if self.guesses_left < 1 || self.words.is_empty() {
            return Err(HangmanError::IllegalState(format!(
                "cannot guess with {} guesses left and {} words",
                self.guesses_left,
                self.words.len()
            )));
        }
        if self.guessed.contains(&guess) {
            return Err(HangmanError::InvalidArgument(format!(
                "'{}' was already guessed",
                guess
            )));
        }

        let families = partition(self.words.iter().map(String::as_str), &self.pattern, guess);
        for (pattern, words) in &families {
            trace!("  {}: {} words", pattern, words.len());
        }
        let (next_pattern, num_kept) = select_largest(&families)
            .map(|(pattern, words)| (pattern.clone(), words.len()))
            .ok_or_else(|| {
                HangmanError::IllegalState("there are no words to choose from".to_string())
            })?;
        debug!(
            "Guess '{}' split {} words into {} families, keeping \"{}\" with {} words",
            guess,
            self.words.len(),
            families.len(),
            next_pattern,
            num_kept
        );

        self.guessed.insert(guess);
        if next_pattern == self.pattern {
            self.guesses_left -= 1;
        }
        let previous = std::mem::replace(&mut self.pattern, next_pattern);
        self.words
            .retain(|word| previous.reveal(word, guess) == self.pattern);
        Ok(self.pattern.count(guess))
    }
}
