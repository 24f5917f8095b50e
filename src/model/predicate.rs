// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::util::text::contains_word_ignore_case;

/// Matches text containing any of the keywords as a whole word, ignoring
/// case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeywordsPredicate {
    keywords: Vec<String>,
}

impl KeywordsPredicate {
    pub(crate) fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub(crate) fn matches(&self, text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| contains_word_ignore_case(text, keyword))
    }
}
