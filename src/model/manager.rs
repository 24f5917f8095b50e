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

//! In-memory model state shared by commands and the UI.
//!
//! The [`ModelManager`] owns the [`AddressBook`] and layers a filter over each
//! of its two lists. Filtering reads through the lists' read-only views, so
//! the filtered lists always reflect the latest mutation. Indexes typed by the
//! user always refer to the filtered lists.

use std::collections::BTreeSet;

use log::debug;

use crate::model::{
    AddressBook, Event, Index, KeywordsPredicate, ListError, Name, Person, ReadOnlyView,
};

/// Which persons are currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PersonFilter {
    All,
    Keywords(KeywordsPredicate),
    Participants(BTreeSet<Name>),
}

impl PersonFilter {
    fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::Keywords(predicate) => predicate.matches(person.name.as_str()),
            PersonFilter::Participants(names) => names.contains(&person.name),
        }
    }
}

/// Which events are currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EventFilter {
    All,
    Keywords(KeywordsPredicate),
}

impl EventFilter {
    fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Keywords(predicate) => predicate.matches(&event.name.to_string()),
        }
    }
}

pub(crate) struct ModelManager {
    address_book: AddressBook,
    persons: ReadOnlyView<Person>,
    events: ReadOnlyView<Event>,
    person_filter: PersonFilter,
    event_filter: EventFilter,
    revision: u64,
}

impl ModelManager {
    pub(crate) fn new(address_book: AddressBook) -> Self {
        let persons = address_book.persons().view();
        let events = address_book.events().view();

        Self {
            address_book,
            persons,
            events,
            person_filter: PersonFilter::All,
            event_filter: EventFilter::All,
            revision: 0,
        }
    }

    pub(crate) fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Incremented on every change to data or filters.
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn reset_data(&mut self, data: &AddressBook) {
        debug!("event=reset_data persons={} events={}", data.persons().len(), data.events().len());
        self.address_book.reset_data(data);
        self.changed();
    }

    pub(crate) fn clear(&mut self) {
        debug!("event=clear");
        self.address_book.clear();
        self.changed();
    }

    pub(crate) fn add_person(&mut self, person: &Person) -> Result<(), ListError> {
        self.address_book.add_person(person)?;
        debug!("event=add_person name={}", person.name);
        self.person_filter = PersonFilter::All;
        self.changed();
        Ok(())
    }

    pub(crate) fn update_person(&mut self, target: &Person, edited: &Person) -> Result<(), ListError> {
        self.address_book.update_person(target, edited)?;
        debug!("event=update_person name={} new_name={}", target.name, edited.name);
        self.changed();
        Ok(())
    }

    pub(crate) fn delete_person(&mut self, target: &Person) -> Result<usize, ListError> {
        let position = self.address_book.remove_person(target)?;
        debug!("event=delete_person name={} position={}", target.name, position);
        self.changed();
        Ok(position)
    }

    pub(crate) fn sort_persons(&mut self) {
        self.address_book.sort_persons();
        debug!("event=sort_persons");
        self.changed();
    }

    pub(crate) fn add_event(&mut self, event: &Event) -> Result<(), ListError> {
        self.address_book.add_event(event)?;
        debug!("event=add_event name={}", event.name);
        self.event_filter = EventFilter::All;
        self.changed();
        Ok(())
    }

    pub(crate) fn update_event(&mut self, target: &Event, edited: &Event) -> Result<(), ListError> {
        self.address_book.update_event(target, edited)?;
        debug!("event=update_event name={} new_name={}", target.name, edited.name);
        self.changed();
        Ok(())
    }

    pub(crate) fn delete_event(&mut self, target: &Event) -> Result<usize, ListError> {
        let position = self.address_book.remove_event(target)?;
        debug!("event=delete_event name={} position={}", target.name, position);
        self.changed();
        Ok(position)
    }

    pub(crate) fn insert_event_at(&mut self, position: usize, event: &Event) {
        self.address_book.insert_event_at(position, event);
        debug!("event=insert_event name={} position={}", event.name, position);
        self.changed();
    }

    pub(crate) fn sort_events(&mut self) {
        self.address_book.sort_events();
        debug!("event=sort_events");
        self.changed();
    }

    /// Adds `name` to the participants of `event` and returns the updated event.
    pub(crate) fn join_event(&mut self, event: &Event, name: &Name) -> Result<Event, ListError> {
        let joined = event.with_participant(name.clone());
        self.address_book.update_event(event, &joined)?;
        debug!("event=join_event name={} person={}", event.name, name);
        self.changed();
        Ok(joined)
    }

    pub(crate) fn disjoin_event(&mut self, event: &Event, name: &Name) -> Result<Event, ListError> {
        let left = event.without_participant(name);
        self.address_book.update_event(event, &left)?;
        debug!("event=disjoin_event name={} person={}", event.name, name);
        self.changed();
        Ok(left)
    }

    pub(crate) fn update_person_filter(&mut self, filter: PersonFilter) {
        self.person_filter = filter;
        self.changed();
    }

    pub(crate) fn update_event_filter(&mut self, filter: EventFilter) {
        self.event_filter = filter;
        self.changed();
    }

    pub(crate) fn show_everything(&mut self) {
        self.person_filter = PersonFilter::All;
        self.event_filter = EventFilter::All;
        self.changed();
    }

    pub(crate) fn filtered_persons(&self) -> Vec<Person> {
        self.persons.with(|persons| {
            persons
                .iter()
                .filter(|p| self.person_filter.matches(p))
                .cloned()
                .collect()
        })
    }

    pub(crate) fn filtered_events(&self) -> Vec<Event> {
        self.events.with(|events| {
            events
                .iter()
                .filter(|e| self.event_filter.matches(e))
                .cloned()
                .collect()
        })
    }

    pub(crate) fn filtered_person(&self, index: Index) -> Option<Person> {
        self.filtered_persons().into_iter().nth(index.zero_based())
    }

    pub(crate) fn filtered_event(&self, index: Index) -> Option<Event> {
        self.filtered_events().into_iter().nth(index.zero_based())
    }

    fn changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
