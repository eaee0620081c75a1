use crate::game::GameState;
use crate::results::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::result::Result;

/// Picks letters to guess against a [`GameState`].
pub trait Guesser {
    /// Selects the next letter to guess, or `None` if there is no sensible letter left.
    ///
    /// The returned letter must not have been guessed already.
    fn select_next_guess(&mut self, game: &GameState) -> Option<char>;
}

/// Derives the stage of the round from the game's remaining guesses and revealed letters.
///
/// Returns [`HangmanError::IllegalState`] if the game has no candidate words.
pub fn game_status(game: &GameState) -> Result<GameStatus, HangmanError> {
    let pattern = game.current_pattern()?;
    if pattern.is_complete() {
        return Ok(GameStatus::Won);
    }
    if game.guesses_left() == 0 {
        return Ok(GameStatus::Lost);
    }
    Ok(GameStatus::AwaitingGuess)
}

/// Plays a full round against the adversary using words of the given length, with the given
/// guesser choosing each letter.
///
/// ```
/// use evil_hangman::GameResult;
/// use evil_hangman::MostFrequentLetterGuesser;
///
/// let result = evil_hangman::play_game_with_guesser(
///     ["bat", "cat", "cot"],
///     3,
///     5,
///     MostFrequentLetterGuesser,
/// );
///
/// assert!(matches!(result, Ok(GameResult::Won(_))));
/// ```
pub fn play_game_with_guesser<I, S, G>(
    words: I,
    length: usize,
    max_wrong: u32,
    mut guesser: G,
) -> Result<GameResult, HangmanError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    G: Guesser,
{
    let mut game = GameState::new(words, length, max_wrong)?;
    if game.words().is_empty() {
        return Ok(GameResult::NoWordsOfLength);
    }
    let mut guesses: Vec<char> = Vec::new();
    loop {
        match game_status(&game)? {
            GameStatus::Won => return Ok(GameResult::Won(guesses)),
            GameStatus::Lost => return Ok(GameResult::Lost(guesses)),
            GameStatus::AwaitingGuess => {}
        }
        let Some(guess) = guesser.select_next_guess(&game) else {
            return Ok(GameResult::Lost(guesses));
        };
        game.record(guess)?;
        guesses.push(guess);
    }
}

/// Returns the letters that appear in at least one candidate word and have not been guessed.
fn unguessed_letters(game: &GameState) -> BTreeSet<char> {
    game.words()
        .iter()
        .flat_map(|word| word.chars())
        .filter(|letter| !game.guesses().contains(letter))
        .collect()
}

/// Guesses at random from the unguessed letters in the remaining candidate words.
pub struct RandomGuesser {
    rng: StdRng,
}

impl RandomGuesser {
    pub fn new() -> RandomGuesser {
        RandomGuesser {
            rng: StdRng::from_entropy(),
        }
    }

    /// Constructs a guesser whose choices are reproducible for a given seed.
    pub fn seeded(seed: u64) -> RandomGuesser {
        RandomGuesser {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGuesser {
    fn default() -> Self {
        RandomGuesser::new()
    }
}

impl Guesser for RandomGuesser {
    fn select_next_guess(&mut self, game: &GameState) -> Option<char> {
        let letters: Vec<char> = unguessed_letters(game).into_iter().collect();
        letters.choose(&mut self.rng).copied()
    }
}

/// Selects the unguessed letter that appears in the most remaining candidate words.
///
/// Ties go to the letter that sorts first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostFrequentLetterGuesser;

impl Guesser for MostFrequentLetterGuesser {
    fn select_next_guess(&mut self, game: &GameState) -> Option<char> {
        let mut num_words_per_letter: BTreeMap<char, usize> = BTreeMap::new();
        for word in game.words() {
            let unique_letters: BTreeSet<char> = word.chars().collect();
            for letter in unique_letters {
                if !game.guesses().contains(&letter) {
                    *num_words_per_letter.entry(letter).or_insert(0) += 1;
                }
            }
        }
        num_words_per_letter
            .into_iter()
            .max_by(|(letter_a, count_a), (letter_b, count_b)| {
                count_a.cmp(count_b).then_with(|| letter_b.cmp(letter_a))
            })
            .map(|(letter, _)| letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unguessed_letters_skips_guessed() -> Result<(), HangmanError> {
        let mut game = GameState::new(["bat", "cat"], 3, 3)?;
        game.record('a')?;

        assert_eq!(unguessed_letters(&game), BTreeSet::from(['b', 'c', 't']));
        Ok(())
    }

    #[test]
    fn most_frequent_letter_breaks_ties_alphabetically() -> Result<(), HangmanError> {
        let game = GameState::new(["bat", "cat", "cot"], 3, 3)?;

        // 't' is in all three words.
        assert_eq!(MostFrequentLetterGuesser.select_next_guess(&game), Some('t'));

        let game = GameState::new(["ab", "cd"], 2, 3)?;

        assert_eq!(MostFrequentLetterGuesser.select_next_guess(&game), Some('a'));
        Ok(())
    }

    #[test]
    fn random_guesser_only_picks_candidate_letters() -> Result<(), HangmanError> {
        let game = GameState::new(["bat", "cat"], 3, 3)?;
        let mut guesser = RandomGuesser::seeded(7);

        for _ in 0..20 {
            let guess = guesser.select_next_guess(&game);
            assert!(matches!(guess, Some('a' | 'b' | 'c' | 't')));
        }
        Ok(())
    }
}
