use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

/// The token shown for a letter that has not been revealed yet.
pub const UNREVEALED_TOKEN: char = '-';

/// The letters of the secret word that have been revealed to the guesser so far.
///
/// Each slot is either `None` (still hidden) or `Some(letter)`. A pattern is rendered as one
/// token per slot, separated by spaces, with hidden slots shown as `-`:
///
/// ```
/// use evil_hangman::Pattern;
///
/// let pattern = Pattern::unrevealed(3).reveal("cat", 'a');
///
/// assert_eq!(pattern.to_string(), "- a -");
/// ```
///
/// Patterns are ordered by their rendered form, so the smallest pattern is the one whose display
/// string sorts first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<char>>,
}

impl Pattern {
    /// Creates a pattern of the given length with every slot hidden.
    pub fn unrevealed(length: usize) -> Pattern {
        Pattern {
            slots: vec![None; length],
        }
    }

    /// Returns the pattern that the given word shows once every letter in `guessed` is revealed.
    pub fn from_word(word: &str, guessed: &BTreeSet<char>) -> Pattern {
        Pattern {
            slots: word
                .chars()
                .map(|letter| guessed.contains(&letter).then_some(letter))
                .collect(),
        }
    }

    /// Returns the pattern that results from revealing `letter` in this pattern, assuming the
    /// secret word is `word`.
    ///
    /// Slots that are already revealed keep their letter. Hidden slots where `word` has `letter`
    /// become revealed; all other slots stay hidden.
    pub fn reveal(&self, word: &str, letter: char) -> Pattern {
        Pattern {
            slots: self
                .slots
                .iter()
                .zip(word.chars())
                .map(|(slot, word_letter)| slot.or((word_letter == letter).then_some(letter)))
                .collect(),
        }
    }

    /// The number of letter positions in this pattern.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Returns `true` iff every slot has been revealed.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns the number of slots showing the given letter.
    pub fn count(&self, letter: char) -> usize {
        self.slots
            .iter()
            .filter(|slot| **slot == Some(letter))
            .count()
    }

    fn tokens(&self) -> impl Iterator<Item = char> + '_ {
        self.slots
            .iter()
            .map(|slot| slot.unwrap_or(UNREVEALED_TOKEN))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        // Every token is a single char with a single space between tokens, so comparing tokens
        // orders patterns the same way as comparing their rendered strings.
        self.tokens()
            .cmp(other.tokens())
            .then_with(|| self.slots.cmp(&other.slots))
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Groups the candidate words by the pattern that revealing `guess` would produce for each of
/// them, starting from the `current` pattern.
///
/// Words within each group keep the order in which `candidates` yielded them.
pub fn partition<'a, I>(
    candidates: I,
    current: &Pattern,
    guess: char,
) -> BTreeMap<Pattern, Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut families: BTreeMap<Pattern, Vec<&'a str>> = BTreeMap::new();
    for word in candidates {
        families
            .entry(current.reveal(word, guess))
            .or_default()
            .push(word);
    }
    families
}

/// Selects the group with the most words.
///
/// If several groups share the largest size, the one with the smallest pattern wins. Returns
/// `None` only if there are no groups at all.
pub fn select_largest<W>(families: &BTreeMap<Pattern, Vec<W>>) -> Option<(&Pattern, &[W])> {
    let mut best: Option<(&Pattern, &[W])> = None;
    // Patterns are visited in ascending order, so only a strictly larger group replaces the best.
    for (pattern, words) in families {
        if best.map_or(true, |(_, best_words)| words.len() > best_words.len()) {
            best = Some((pattern, words.as_slice()));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unrevealed() {
        assert_eq!(Pattern::unrevealed(5).to_string(), "- - - - -");
        assert_eq!(Pattern::unrevealed(1).to_string(), "-");
    }

    #[test]
    fn reveal_keeps_existing_letters() {
        let pattern = Pattern::unrevealed(5).reveal("hello", 'l');

        assert_eq!(pattern.to_string(), "- - l l -");

        let pattern = pattern.reveal("hello", 'o');

        assert_eq!(pattern.to_string(), "- - l l o");
        assert_eq!(pattern.count('l'), 2);
        assert_eq!(pattern.count('o'), 1);
        assert_eq!(pattern.count('h'), 0);
        assert!(!pattern.is_complete());
    }

    #[test]
    fn reveal_missing_letter_is_unchanged() {
        let pattern = Pattern::unrevealed(3).reveal("cat", 'a');

        assert_eq!(pattern.reveal("cat", 'z'), pattern);
    }

    #[test]
    fn from_word_uses_all_guessed_letters() {
        let guessed = BTreeSet::from(['l', 'e', 'z']);

        let pattern = Pattern::from_word("hello", &guessed);

        assert_eq!(pattern.to_string(), "- e l l -");
        assert_eq!(
            pattern.slots(),
            &[None, Some('e'), Some('l'), Some('l'), None]
        );
    }

    #[test]
    fn ordering_follows_rendered_string() {
        let hidden = Pattern::unrevealed(3).reveal("bat", 't');
        let revealed = hidden.reveal("cat", 'c');

        assert_eq!(hidden.to_string(), "- - t");
        assert_eq!(revealed.to_string(), "c - t");
        assert!(hidden < revealed);
        assert_eq!(
            hidden.to_string().cmp(&revealed.to_string()),
            hidden.cmp(&revealed)
        );
    }

    #[test]
    fn partition_groups_by_resulting_pattern() {
        let words = ["bat", "car", "cat"];

        let families = partition(words, &Pattern::unrevealed(3), 't');

        assert_eq!(families.len(), 2);
        assert_eq!(families[&Pattern::unrevealed(3)], vec!["car"]);
        assert_eq!(
            families[&Pattern::unrevealed(3).reveal("bat", 't')],
            vec!["bat", "cat"]
        );
    }

    #[test]
    fn partition_same_letter_same_place_is_one_family() {
        let families = partition(["bat", "car", "cat"], &Pattern::unrevealed(3), 'a');

        assert_eq!(families.len(), 1);
        assert_eq!(
            families[&Pattern::unrevealed(3).reveal("car", 'a')],
            vec!["bat", "car", "cat"]
        );
    }

    #[test]
    fn select_largest_prefers_bigger_family() {
        let families = partition(["bat", "car", "cat"], &Pattern::unrevealed(3), 't');

        let (pattern, words) = select_largest(&families).unwrap();

        assert_eq!(pattern.to_string(), "- - t");
        assert_eq!(words, &["bat", "cat"]);
    }

    #[test]
    fn select_largest_breaks_ties_by_smallest_pattern() {
        let current = Pattern::unrevealed(3).reveal("bat", 'a').reveal("bat", 't');
        let families = partition(["bat", "cat"], &current, 'c');

        let (pattern, words) = select_largest(&families).unwrap();

        assert_eq!(pattern.to_string(), "- a t");
        assert_eq!(words, &["bat"]);
    }

    #[test]
    fn select_largest_empty() {
        let families: BTreeMap<Pattern, Vec<&str>> = BTreeMap::new();

        assert_eq!(select_largest(&families), None);
    }
}
