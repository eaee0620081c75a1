use std::collections::BTreeSet;
use std::io::BufRead;
use std::io::Result;

/// Contains every word that a game may draw its candidates from.
///
/// Words are stored in lower case, without surrounding whitespace, sorted and without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Constructs a new `Dictionary` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self> {
        let lines = word_reader.lines().collect::<Result<Vec<String>>>()?;
        Ok(Dictionary::from_iterator(lines))
    }

    /// Constructs a new `Dictionary` from the given words.
    ///
    /// ```
    /// use evil_hangman::Dictionary;
    ///
    /// let dictionary = Dictionary::from_iterator(["Cat", " dog", "", "cat"]);
    ///
    /// assert_eq!(dictionary.words(), &["cat", "dog"]);
    /// ```
    pub fn from_iterator<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                if word.is_empty() {
                    return None;
                }
                Some(word.to_lowercase())
            })
            .collect();
        Dictionary {
            words: words.into_iter().collect(),
        }
    }

    /// Retrieves the full list of words, in sorted order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns every word length that at least one word has.
    pub fn word_lengths(&self) -> BTreeSet<usize> {
        self.words.iter().map(|word| word.chars().count()).collect()
    }

    /// Returns the number of words with exactly `length` letters.
    pub fn count_of_length(&self, length: usize) -> usize {
        self.words
            .iter()
            .filter(|word| word.chars().count() == length)
            .count()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::io::Cursor;

    #[test]
    fn from_reader_skips_blank_lines() -> Result<()> {
        let cursor = Cursor::new(String::from("\n\nworda\n wordb\n\n"));

        let dictionary = Dictionary::from_reader(cursor)?;

        assert_eq!(dictionary.words(), &["worda", "wordb"]);
        Ok(())
    }

    #[test]
    fn word_lengths() {
        let dictionary = Dictionary::from_iterator(["a", "to", "be", "the", "three"]);

        assert_eq!(dictionary.word_lengths(), BTreeSet::from([1, 2, 3, 5]));
        assert_eq!(dictionary.count_of_length(2), 2);
        assert_eq!(dictionary.count_of_length(4), 0);
    }
}
