// src/core/substrings.rs
use crate::core::types::{FrequencyMap, DEFAULT_DICTIONARY};
use tracing::debug;

/// Counts, for each dictionary word, how many whitespace-separated tokens
/// of `phrase` contain it as a contiguous substring.
///
/// The phrase is lower-cased; the dictionary is not, so entries are
/// expected to be lowercase already. A word is counted at most once per
/// token ("aa" contains "a" once as far as this counter is concerned).
/// Words that never match are absent from the result and read as `0`.
pub fn count_substrings<S: AsRef<str>>(phrase: &str, dictionary: &[S]) -> FrequencyMap {
    let lowered = phrase.to_lowercase();
    let mut result = FrequencyMap::new();

    for token in lowered.split_whitespace() {
        for word in dictionary {
            let word = word.as_ref();
            if token.contains(word) {
                result.increment(word);
            }
        }
    }

    debug!(
        dictionary_len = dictionary.len(),
        matched = result.len(),
        "counted substrings"
    );
    result
}

/// A counter that owns its dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringCounter {
    dictionary: Vec<String>,
}

impl SubstringCounter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { dictionary: words.into_iter().map(Into::into).collect() }
    }

    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }

    pub fn count(&self, phrase: &str) -> FrequencyMap {
        count_substrings(phrase, &self.dictionary)
    }
}

impl Default for SubstringCounter {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY)
    }
}
