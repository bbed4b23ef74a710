// src/core/types.rs
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Number of letters in each case's alphabet.
pub const ALPHABET_LEN: i64 = 26;

/// The fixed word list the counter is checked against when no other
/// dictionary is configured.
pub const DEFAULT_DICTIONARY: [&str; 14] = [
    "below", "down", "go", "going", "horn", "how", "howdy", "it", "i", "low", "own", "part",
    "partner", "sit",
];

/// A Caesar shift, reduced into `0..26`.
///
/// Any `i64` is accepted; the raw value is reduced with a floor-mod so
/// negative shifts wrap (`-1` becomes `25`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shift(u8);

impl Shift {
    pub fn new(raw: i64) -> Self {
        // rem_euclid never returns a negative value, and the result fits in u8.
        Self(raw.rem_euclid(ALPHABET_LEN) as u8)
    }

    /// The reduced offset, always in `0..26`.
    pub fn offset(self) -> u8 {
        self.0
    }

    /// The shift that undoes this one.
    pub fn inverse(self) -> Self {
        Self::new(-i64::from(self.0))
    }

    pub fn is_identity(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for Shift {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

/// Counts of dictionary words found inside the tokens of a phrase.
///
/// Only words that matched at least once are stored. Looking up any other
/// word through [`FrequencyMap::get`] yields `0`; callers should treat a
/// missing key exactly like a zero count.
///
/// Words keep the order of their first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `word`, or `0` if it never matched.
    pub fn get(&self, word: &str) -> u64 {
        self.index.get(word).map_or(0, |&pos| self.entries[pos].1)
    }

    pub fn contains_key(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn increment(&mut self, word: &str) {
        if let Some(&pos) = self.index.get(word) {
            self.entries[pos].1 += 1;
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), 1));
        }
    }

    /// Number of distinct words with a non-zero count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates in first-match order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl Serialize for FrequencyMap {
    /// Serializes as a plain object, keys in first-match order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (word, count) in self.iter() {
            map.serialize_entry(word, &count)?;
        }
        map.end()
    }
}

impl fmt::Display for FrequencyMap {
    /// Renders as `{"below" => 1, "low" => 1}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (word, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?} => {}", word, count)?;
        }
        f.write_str("}")
    }
}
