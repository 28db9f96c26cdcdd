//! Word list conversion utilities
//!
//! Turns raw string tables into validated [`SecretWord`]s.

use super::Categories;
use crate::core::SecretWord;

/// Convert a string slice to `SecretWord`s, skipping invalid entries
///
/// # Examples
/// ```
/// use word_guess::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["tiger", "t-rex", "zebra"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| match SecretWord::new(s.trim()) {
            Ok(word) => Some(word),
            Err(err) => {
                log::warn!("skipping word {s:?}: {err}");
                None
            }
        })
        .collect()
}

/// Build a category map from `(name, words)` pairs
///
/// Names are trimmed. Categories left without a valid word are dropped, and a
/// repeated name extends the earlier entry.
#[must_use]
pub fn categories_from_table(table: &[(&str, &[&str])]) -> Categories {
    let mut categories = Categories::default();
    for &(name, words) in table {
        let words = words_from_slice(words);
        if words.is_empty() {
            log::warn!("dropping category {name:?}: no valid words");
            continue;
        }
        categories.extend(name.trim(), words);
    }
    categories
}
