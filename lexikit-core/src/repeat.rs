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

//! Fragment repetition
//!
//! A single parameterized operation replaces the two historical variants
//! (fixed count of five vs. explicit count); callers wanting the old
//! fixed-count behavior pass [`DEFAULT_REPEAT_COUNT`].

/// Repeat count used by the historical fixed-count interface.
pub const DEFAULT_REPEAT_COUNT: usize = 5;

/// Build a string consisting of `fragment` concatenated to itself `count`
/// times, in order, with no separators.
///
/// Pure and deterministic. A count of zero yields the empty string;
/// multi-character fragments repeat as whole units. The output byte length
/// is always `fragment.len() * count`.
pub fn repeat(fragment: &str, count: usize) -> String {
    let mut repeated = String::with_capacity(fragment.len() * count);
    for _ in 0..count {
        repeated.push_str(fragment);
    }
    repeated
}
