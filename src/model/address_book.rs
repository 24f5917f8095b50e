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

//! The address book: the person list and the event list.
//!
//! Besides delegating to the two [`UniqueList`]s, the address book keeps event
//! participant sets consistent with the person list when a person is renamed
//! or removed.

use crate::model::{Event, ListError, Name, Person, UniqueList};

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AddressBook {
    persons: UniqueList<Person>,
    events: UniqueList<Event>,
}

impl AddressBook {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Builds an address book from plain lists.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Duplicate`] if either list holds equal items.
    pub(crate) fn from_lists(persons: &[Person], events: &[Event]) -> Result<Self, ListError> {
        let mut book = Self::new();
        book.persons.set_items(persons)?;
        book.events.set_items(events)?;
        Ok(book)
    }

    pub(crate) fn persons(&self) -> &UniqueList<Person> {
        &self.persons
    }

    pub(crate) fn events(&self) -> &UniqueList<Event> {
        &self.events
    }

    /// Replaces the contents with those of `other`, keeping the existing list
    /// views alive.
    pub(crate) fn reset_data(&mut self, other: &AddressBook) {
        self.persons.replace_with(&other.persons);
        self.events.replace_with(&other.events);
    }

    pub(crate) fn clear(&mut self) {
        self.persons.clear();
        self.events.clear();
    }

    pub(crate) fn add_person(&mut self, person: &Person) -> Result<(), ListError> {
        self.persons.add(person)
    }

    /// Replaces `target` with `edited`, renaming the person in every event
    /// they take part in.
    pub(crate) fn update_person(&mut self, target: &Person, edited: &Person) -> Result<(), ListError> {
        self.persons.set_item(target, edited)?;

        if target.name != edited.name && !self.has_person_named(&target.name) {
            self.rewrite_participant(&target.name, Some(&edited.name));
        }
        Ok(())
    }

    /// Removes `target` and drops them from every event's participants.
    pub(crate) fn remove_person(&mut self, target: &Person) -> Result<usize, ListError> {
        let position = self.persons.remove(target)?;

        if !self.has_person_named(&target.name) {
            self.rewrite_participant(&target.name, None);
        }
        Ok(position)
    }

    pub(crate) fn sort_persons(&mut self) {
        self.persons.sort();
    }

    pub(crate) fn add_event(&mut self, event: &Event) -> Result<(), ListError> {
        self.events.add(event)
    }

    pub(crate) fn update_event(&mut self, target: &Event, edited: &Event) -> Result<(), ListError> {
        self.events.set_item(target, edited)
    }

    pub(crate) fn remove_event(&mut self, target: &Event) -> Result<usize, ListError> {
        self.events.remove(target)
    }

    pub(crate) fn insert_event_at(&mut self, position: usize, event: &Event) {
        self.events.insert_at(position, event);
    }

    pub(crate) fn sort_events(&mut self) {
        self.events.sort();
    }

    fn has_person_named(&self, name: &Name) -> bool {
        self.persons.iter().any(|p| &p.name == name)
    }

    // Replaces (or drops, for `None`) a participant name across all events.
    fn rewrite_participant(&mut self, old: &Name, new: Option<&Name>) {
        let affected: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.has_participant(old))
            .cloned()
            .collect();

        for event in affected {
            let mut updated = event.without_participant(old);
            if let Some(new) = new {
                updated = updated.with_participant(new.clone());
            }
            // Participants do not take part in event equality, so this can
            // neither miss nor collide.
            let result = self.events.set_item(&event, &updated);
            debug_assert!(result.is_ok(), "participant change altered event identity: {result:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{EventBuilder, PersonBuilder, typical_address_book};

    #[test]
    fn from_lists_rejects_duplicate_persons() {
        let alice = PersonBuilder::new().build();
        let result = AddressBook::from_lists(&[alice.clone(), alice], &[]);
        assert_eq!(result, Err(ListError::Duplicate("person")));
    }

    #[test]
    fn renaming_a_person_renames_participations() {
        let mut book = typical_address_book();
        let alice = book.persons().as_slice()[0].clone();
        let renamed = PersonBuilder::from_person(&alice).with_name("Alicia Pauline").build();

        book.update_person(&alice, &renamed).unwrap();

        let fair = &book.events().as_slice()[0];
        assert!(fair.has_participant(&renamed.name));
        assert!(!fair.has_participant(&alice.name));
    }

    #[test]
    fn removing_a_person_drops_participations() {
        let mut book = typical_address_book();
        let alice = book.persons().as_slice()[0].clone();

        assert_eq!(book.remove_person(&alice), Ok(0));

        assert!(book.events().iter().all(|e| !e.has_participant(&alice.name)));
    }

    #[test]
    fn reset_data_keeps_views() {
        let mut book = AddressBook::new();
        let persons = book.persons().view();
        let events = book.events().view();

        book.reset_data(&typical_address_book());

        assert_eq!(persons.with(<[_]>::len), typical_address_book().persons().len());
        assert_eq!(events.with(<[_]>::len), typical_address_book().events().len());
    }

    #[test]
    fn remove_and_reinsert_event_restores_order() {
        let mut book = typical_address_book();
        let second = book.events().as_slice()[1].clone();
        let before = book.clone();

        let position = book.remove_event(&second).unwrap();
        book.insert_event_at(position, &second);

        assert_eq!(book, before);
    }

    #[test]
    fn clear_empties_both_lists() {
        let mut book = typical_address_book();
        book.add_event(&EventBuilder::new().with_name("Winter Gala").build())
            .unwrap();

        book.clear();

        assert!(book.persons().is_empty());
        assert!(book.events().is_empty());
    }
}
