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

//! Lexicon error types

use thiserror::Error;

/// Result type for lexicon operations
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Errors that can occur when querying a lexicon.
///
/// `WordNotFound` is a unit variant so call sites branch on the kind rather
/// than on message text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexiconError {
    /// The requested word has no entry
    #[error("could not find the word you were looking for")]
    WordNotFound,
}
