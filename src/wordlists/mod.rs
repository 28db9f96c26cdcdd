//! Word lists for picking a round's secret word
//!
//! Categories are supplied through [`CategorySource`]; the built-in table is
//! compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{CATEGORIES, CATEGORIES_COUNT};

use crate::core::SecretWord;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;

/// Category name mapped to a non-empty, ordered list of candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    by_name: BTreeMap<String, Vec<SecretWord>>,
}

impl Categories {
    /// Append words to a category, creating it if needed
    ///
    /// Empty `words` never creates a category.
    pub fn extend(&mut self, name: impl Into<String>, words: Vec<SecretWord>) {
        if words.is_empty() {
            return;
        }
        self.by_name.entry(name.into()).or_default().extend(words);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Category names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    #[must_use]
    pub fn words(&self, name: &str) -> Option<&[SecretWord]> {
        self.by_name.get(name).map(Vec::as_slice)
    }

    /// All `(category, word)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SecretWord)> {
        self.by_name
            .iter()
            .flat_map(|(name, words)| words.iter().map(move |w| (name.as_str(), w)))
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }

    /// Pick a category uniformly, then a word uniformly within it
    ///
    /// Returns `None` when there are no categories.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(&str, &SecretWord)> {
        let names: Vec<&String> = self.by_name.keys().collect();
        let name = *names.choose(rng)?;
        let word = self.by_name.get(name)?.choose(rng)?;
        Some((name.as_str(), word))
    }
}

/// Supplies the categories a session draws its words from
pub trait CategorySource {
    fn categories(&self) -> Categories;
}

/// The built-in [`CATEGORIES`] table
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCategories;

impl CategorySource for EmbeddedCategories {
    fn categories(&self) -> Categories {
        loader::categories_from_table(CATEGORIES)
    }
}

impl CategorySource for Categories {
    fn categories(&self) -> Categories {
        self.clone()
    }
}
