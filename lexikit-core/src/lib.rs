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

//! Lexikit Core
//!
//! Small text utilities shared across Lexikit tools:
//! - **Repeat**: build a string by repeating a fragment a given number of times
//! - **Lexicon**: a mutable in-memory word-to-definition store with a typed
//!   "not found" outcome
//!
//! Both components are synchronous and leaf-level; the lexicon is owned
//! exclusively by its creator and provides no locking. Embedders that need
//! shared access wrap it themselves.
//!
//! # Example
//!
//! ```rust
//! use lexikit_core::{repeat, Lexicon, LexiconError};
//!
//! assert_eq!(repeat("ab", 3), "ababab");
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.add("hello", "a nice friendly greeting");
//! assert_eq!(lexicon.search("hello"), Ok("a nice friendly greeting"));
//! assert_eq!(lexicon.search("goodbye"), Err(LexiconError::WordNotFound));
//! ```

pub mod error;
pub mod lexicon;
pub mod repeat;

// Re-exports
pub use error::{LexiconError, LexiconResult};
pub use lexicon::{lookup, Lexicon};
pub use repeat::{repeat, DEFAULT_REPEAT_COUNT};
