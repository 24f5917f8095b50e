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

//! Address book contents shown on start-up.

use std::collections::BTreeSet;

use log::warn;

use crate::model::{
    Address, AddressBook, Email, Event, EventAddress, EventName, EventTime, FieldError, Name,
    Person, Phone, Tag,
};

const PERSONS: &[(&str, &str, &str, &str, &[&str])] = &[
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", "Blk 30 Geylang Street 29, #06-40", &["friends"]),
    ("Bernice Yu", "99272758", "berniceyu@example.com", "Blk 30 Lorong 3 Serangoon Gardens, #07-18", &["colleagues", "friends"]),
    ("Charlotte Oliveiro", "93210283", "charlotte@example.com", "Blk 11 Ang Mo Kio Street 74, #11-04", &["neighbours"]),
    ("David Li", "91031282", "lidavid@example.com", "Blk 436 Serangoon Gardens Street 26, #16-43", &["family"]),
];

const EVENTS: &[(&str, &str, &str, &[&str])] = &[
    ("Project Kickoff", "2026-11-02 09:30", "Level 3 Meeting Room", &["Alex Yeoh", "Bernice Yu"]),
    ("Board Games Night", "2026-11-14 19:00", "Charlotte's Place", &["Charlotte Oliveiro"]),
];

/// Builds the sample address book, or an empty one if the sample data were
/// ever to become invalid.
pub(crate) fn sample_address_book() -> AddressBook {
    match build() {
        Ok(address_book) => address_book,
        Err(e) => {
            warn!("event=sample_data_rejected error={e}");
            AddressBook::new()
        }
    }
}

fn build() -> anyhow::Result<AddressBook> {
    let persons = PERSONS
        .iter()
        .map(|(name, phone, email, address, tags)| {
            let tags = tags
                .iter()
                .map(|t| Tag::new(t))
                .collect::<Result<BTreeSet<_>, FieldError>>()?;
            Ok(Person::new(
                Name::new(name)?,
                Phone::new(phone)?,
                Email::new(email)?,
                Address::new(address)?,
                tags,
            ))
        })
        .collect::<Result<Vec<_>, FieldError>>()?;

    let events = EVENTS
        .iter()
        .map(|(name, time, venue, participants)| {
            let mut event = Event::new(EventName::new(name)?, EventTime::new(time)?, EventAddress::new(venue)?);
            for participant in participants.iter() {
                event = event.with_participant(Name::new(participant)?);
            }
            Ok(event)
        })
        .collect::<Result<Vec<_>, FieldError>>()?;

    Ok(AddressBook::from_lists(&persons, &events)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_is_valid() {
        let address_book = build().unwrap();

        assert_eq!(address_book.persons().len(), PERSONS.len());
        assert_eq!(address_book.events().len(), EVENTS.len());
        assert_eq!(sample_address_book(), address_book);
    }
}
