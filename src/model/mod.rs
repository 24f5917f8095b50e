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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, persons and
//! events, together with the unique list that holds them and the model
//! manager that exposes filtered views of those lists to the UI.
//!
//! # Organization
//!
//! * [`person`] and [`event`]: Validated value fields and the two entities.
//! * [`unique_list`]: An ordered container that refuses duplicates.
//! * [`address_book`]: The pair of unique lists making up the address book.
//! * [`manager`]: Filtered views and the mutation API used by commands.

mod address_book;
mod event;
mod fields;
mod manager;
mod person;
mod predicate;
mod sample;
pub(crate) mod unique_list;

#[cfg(test)]
pub(crate) mod test_support;

use std::fmt;

use thiserror::Error;

pub(crate) use address_book::AddressBook;
pub(crate) use event::{EditEventDescriptor, Event, EventAddress, EventName, EventTime};
pub(crate) use fields::FieldError;
pub(crate) use manager::{EventFilter, ModelManager, PersonFilter};
pub(crate) use person::{Address, EditPersonDescriptor, Email, Name, Person, Phone, PortraitPath, Tag};
pub(crate) use predicate::KeywordsPredicate;
pub(crate) use sample::sample_address_book;
pub(crate) use unique_list::{ReadOnlyView, UniqueList};

/// Errors raised by [`UniqueList`] mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ListError {
    #[error("operation would result in a duplicate {0}")]
    Duplicate(&'static str),

    #[error("{0} could not be found in the list")]
    NotFound(&'static str),
}

/// An element that can be stored in a [`UniqueList`].
pub(crate) trait ListItem: Clone + PartialEq {
    /// Human readable kind of the item, used in error messages.
    const KIND: &'static str;

    /// The string the list is sorted by.
    fn sort_key(&self) -> String;
}

/// A position in a displayed list.
///
/// Stored zero-based, the user always sees and types one-based values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Index(usize);

impl Index {
    #[cfg(test)]
    pub(crate) const fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    /// Returns `None` for zero, which is not a valid one-based index.
    pub(crate) fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Self)
    }

    pub(crate) fn zero_based(self) -> usize {
        self.0
    }

    pub(crate) fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_zero_is_rejected() {
        assert_eq!(Index::from_one_based(0), None);
    }

    #[test]
    fn one_based_round_trips_through_zero_based() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
        assert_eq!(index.to_string(), "3");
    }
}
