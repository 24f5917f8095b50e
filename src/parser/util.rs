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

//! Conversions from raw argument text to model values.

use std::collections::BTreeSet;

use crate::{
    model::{Index, KeywordsPredicate, Tag},
    parser::ParseError,
};

pub(crate) const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parses a one-based index.
///
/// # Errors
///
/// Returns [`ParseError::Constraint`] unless the trimmed text is a positive
/// integer.
pub(crate) fn parse_index(text: &str) -> Result<Index, ParseError> {
    text.trim()
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::Constraint(MESSAGE_INVALID_INDEX))
}

/// Parses a command's only argument as an index, reporting any problem as a
/// format error for that command.
pub(crate) fn parse_index_argument(args: &str, usage: &'static str) -> Result<Index, ParseError> {
    parse_index(args).map_err(|_| ParseError::InvalidFormat(usage))
}

pub(crate) fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    values
        .iter()
        .map(|value| Tag::new(value).map_err(ParseError::from))
        .collect()
}

/// Tags given to `edit`; a single empty `t/` clears the tags and no `t/` at
/// all leaves them unchanged.
pub(crate) fn parse_tags_for_edit(values: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}

pub(crate) fn parse_keywords(args: &str, usage: &'static str) -> Result<KeywordsPredicate, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(usage));
    }
    Ok(KeywordsPredicate::new(keywords))
}
