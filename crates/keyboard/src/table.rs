//! Character correspondence between two layouts.

use std::collections::HashMap;

use crate::language::Language;

/// Read-only map from a character typed under `from` to the character the
/// same physical key produces under `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    from: Language,
    to: Language,
    map: HashMap<char, char>,
}

impl LayoutTable {
    /// Build a table from `(typed, intended)` pairs.
    ///
    /// A later pair with the same typed character replaces an earlier one.
    pub fn new(from: Language, to: Language, entries: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            from,
            to,
            map: entries.into_iter().collect(),
        }
    }

    /// Build a table from static layout data.
    pub fn from_pairs(from: Language, to: Language, pairs: &[(char, char)]) -> Self {
        Self::new(from, to, pairs.iter().copied())
    }

    /// Chain two tables through their shared middle layout.
    ///
    /// `first` maps A → B and `second` maps B → C. Characters of A that
    /// match no entry of `first` are treated as sitting on a key that types
    /// the same character in B. Entries that would map a character to
    /// itself are dropped.
    pub fn compose(first: &LayoutTable, second: &LayoutTable) -> Self {
        let through_first = first
            .map
            .iter()
            .map(|(&typed, &middle)| (typed, second.map_char(middle)));

        // Keys that A and B share unchanged still differ in C.
        let shared = second
            .map
            .iter()
            .filter(|(typed, _)| !first.contains(**typed) && !first.produces(**typed))
            .map(|(&typed, &intended)| (typed, intended));

        Self::new(
            first.from,
            second.to,
            through_first
                .chain(shared)
                .filter(|(typed, intended)| typed != intended),
        )
    }

    pub fn source(&self) -> Language {
        self.from
    }

    pub fn target(&self) -> Language {
        self.to
    }

    /// Counterpart of `ch`, if the table has one.
    pub fn get(&self, ch: char) -> Option<char> {
        self.map.get(&ch).copied()
    }

    /// Counterpart of `ch`, or `ch` itself when it is not in the table.
    pub fn map_char(&self, ch: char) -> char {
        self.get(ch).unwrap_or(ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    /// Whether some entry of the table produces `ch`.
    fn produces(&self, ch: char) -> bool {
        self.map.values().any(|&value| value == ch)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(typed, intended)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.map.iter().map(|(&typed, &intended)| (typed, intended))
    }

    /// Whether `other` undoes every entry of this table and has no others.
    pub fn is_inverse_of(&self, other: &LayoutTable) -> bool {
        self.from == other.to
            && self.to == other.from
            && self.len() == other.len()
            && self
                .iter()
                .all(|(typed, intended)| other.get(intended) == Some(typed))
    }
}
