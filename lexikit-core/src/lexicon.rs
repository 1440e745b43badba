// Copyright 2025 Lexikit Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! In-memory word-to-definition store
//!
//! A `Lexicon` is a plain associative container owned exclusively by its
//! creator. Mutation goes through [`Lexicon::add`]; reads go through
//! [`Lexicon::search`] (error-aware) or the free function [`lookup`]
//! (silent on absence). There is no deletion and no case folding.

use crate::error::{LexiconError, LexiconResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// A mutable mapping from word to definition.
///
/// Keys are unique and insertion order is irrelevant. `add` takes `&mut self`
/// and `search` takes `&self`, so single-writer discipline is enforced at the
/// type level; concurrent access requires an external wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty lexicon pre-sized for at least `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite the definition for `word`.
    ///
    /// Always succeeds; an existing definition for the same word is silently
    /// replaced. Returns the stored definition as confirmation.
    pub fn add(&mut self, word: impl Into<String>, definition: impl Into<String>) -> &str {
        let word = word.into();
        if self.entries.contains_key(&word) {
            debug!(word = %word, "overwriting existing definition");
        }
        let slot = self.entries.entry(word).or_default();
        *slot = definition.into();
        slot
    }

    /// Look up the definition for `word`.
    ///
    /// Returns [`LexiconError::WordNotFound`] when the word has no entry.
    pub fn search(&self, word: &str) -> LexiconResult<&str> {
        match self.entries.get(word) {
            Some(definition) => Ok(definition),
            None => {
                trace!(word, "word not found in lexicon");
                Err(LexiconError::WordNotFound)
            }
        }
    }

    /// Whether `word` has an entry
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Lexicon
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(word, definition)| (word.into(), definition.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Lexicon
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(
            iter.into_iter()
                .map(|(word, definition)| (word.into(), definition.into())),
        );
    }
}

/// Direct lookup that stays silent about missing words.
///
/// Returns `""` when `word` has no entry, indistinguishable from a stored
/// empty definition. Prefer [`Lexicon::search`] when absence matters; this
/// form is kept for callers that treat missing and empty alike.
pub fn lookup<'a>(lexicon: &'a Lexicon, word: &str) -> &'a str {
    lexicon.entries.get(word).map(String::as_str).unwrap_or("")
}
