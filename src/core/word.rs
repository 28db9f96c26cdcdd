//! Secret word representation
//!
//! A `SecretWord` stores the lowercase word along with letter position indices
//! so that a correct guess can reveal every occurrence at once.

use super::WordError;
use rustc_hash::FxHashMap;
use std::fmt;

/// The hidden word of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    char_positions: FxHashMap<char, Vec<usize>>,
}

impl SecretWord {
    /// Create a new secret word
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::SecretWord;
    ///
    /// let word = SecretWord::new("Banana").unwrap();
    /// assert_eq!(word.text(), "banana");
    /// assert_eq!(word.positions_of('a'), &[1, 3, 5]);
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("ice cream").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.chars().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false, construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        char::from(self.text.as_bytes()[position])
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Iterate over the letters in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Normalize a single-letter guess
///
/// Returns the lowercase letter if trimmed `input` is exactly one ASCII letter.
#[must_use]
pub fn normalize_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.len(), 3);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("ELEPHANT").unwrap();
        assert_eq!(word.text(), "elephant");

        let word2 = SecretWord::new("ElEpHaNt").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(SecretWord::new("c4t").is_err()); // Number
        assert!(SecretWord::new("ice cream").is_err()); // Space
        assert!(SecretWord::new("café").is_err()); // Non-ASCII
        assert!(SecretWord::new("t-rex").is_err()); // Punctuation
    }

    #[test]
    fn word_char_at() {
        let word = SecretWord::new("dog").unwrap();
        assert_eq!(word.char_at(0), 'd');
        assert_eq!(word.char_at(1), 'o');
        assert_eq!(word.char_at(2), 'g');
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("banana").unwrap();
        assert_eq!(word.positions_of('a'), &[1, 3, 5]);
        assert_eq!(word.positions_of('n'), &[2, 4]);
        assert_eq!(word.positions_of('b'), &[0]);
        assert_eq!(word.positions_of('z'), &[] as &[usize]);
        assert!(word.has_letter('b'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn normalize_letter_accepts_single_ascii_letter() {
        assert_eq!(normalize_letter("a"), Some('a'));
        assert_eq!(normalize_letter("Q"), Some('q'));
        assert_eq!(normalize_letter(" e\n"), Some('e'));
    }

    #[test]
    fn normalize_letter_rejects_everything_else() {
        assert_eq!(normalize_letter(""), None);
        assert_eq!(normalize_letter("ab"), None);
        assert_eq!(normalize_letter("7"), None);
        assert_eq!(normalize_letter("?"), None);
        assert_eq!(normalize_letter("é"), None);
        assert_eq!(normalize_letter(" "), None);
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("giraffe").unwrap();
        assert_eq!(format!("{word}"), "giraffe");
    }
}
