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

//! Splitting of prefixed arguments such as `n/John Doe p/98765432`.
//!
//! An argument string is cut at every recognised prefix. The text before the
//! first prefix is the preamble (usually an index), and the text following
//! each prefix up to the next one is that prefix's value. A prefix only
//! counts when it starts the string or follows whitespace, so values such as
//! `a/12 Main St/Unit 4` are not split in the middle.

use std::collections::HashMap;

pub(crate) type Prefix = &'static str;

pub(crate) const PREFIX_NAME: Prefix = "n/";
pub(crate) const PREFIX_PHONE: Prefix = "p/";
pub(crate) const PREFIX_EMAIL: Prefix = "e/";
pub(crate) const PREFIX_ADDRESS: Prefix = "a/";
pub(crate) const PREFIX_TAG: Prefix = "t/";
pub(crate) const PREFIX_PORTRAIT: Prefix = "u/";
pub(crate) const PREFIX_TIME: Prefix = "d/";
pub(crate) const PREFIX_PERSON: Prefix = "p/";
pub(crate) const PREFIX_EVENT: Prefix = "e/";

/// Values found for each prefix, in the order they appeared.
#[derive(Debug, Default)]
pub(crate) struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub(crate) fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub(crate) fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, empty if the prefix never appeared.
    pub(crate) fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn has_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.values.contains_key(p))
    }
}

/// Splits `args` at each occurrence of the given prefixes.
pub(crate) fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix)
                .filter(move |(at, _)| starts_token(args, *at))
                .map(move |(at, _)| (at, prefix))
        })
        .collect();
    positions.sort_by_key(|(at, _)| *at);
    positions.dedup_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let start = at + prefix.len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }

    map
}

fn starts_token(args: &str, at: usize) -> bool {
    at == 0 || args[..at].ends_with(char::is_whitespace)
}
