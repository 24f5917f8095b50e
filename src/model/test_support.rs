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

//! Builders and fixtures shared by the unit tests.

use std::collections::BTreeSet;

use crate::model::{
    Address, AddressBook, Email, Event, EventAddress, EventName, EventTime, Name, Person, Phone,
    PortraitPath, Tag,
};

pub(crate) struct PersonBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    tags: Vec<String>,
    portrait: String,
}

impl PersonBuilder {
    pub(crate) fn new() -> Self {
        Self {
            name: "Alice Pauline".to_string(),
            phone: "85355255".to_string(),
            email: "alice@example.com".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            tags: vec![],
            portrait: String::new(),
        }
    }

    pub(crate) fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.to_string(),
            phone: person.phone.to_string(),
            email: person.email.to_string(),
            address: person.address.to_string(),
            tags: person.tags.iter().map(|t| t.as_str().to_string()).collect(),
            portrait: person.portrait.to_string(),
        }
    }

    pub(crate) fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub(crate) fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub(crate) fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub(crate) fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub(crate) fn with_portrait(mut self, portrait: &str) -> Self {
        self.portrait = portrait.to_string();
        self
    }

    pub(crate) fn build(self) -> Person {
        let tags: BTreeSet<Tag> = self.tags.iter().map(|t| Tag::new(t).unwrap()).collect();
        Person::new(
            Name::new(&self.name).unwrap(),
            Phone::new(&self.phone).unwrap(),
            Email::new(&self.email).unwrap(),
            Address::new(&self.address).unwrap(),
            tags,
        )
        .with_portrait(PortraitPath::new(&self.portrait).unwrap())
    }

    /// The argument string an `add` command for this person would carry.
    pub(crate) fn add_arguments(&self) -> String {
        let mut args = format!(
            "n/{} p/{} e/{} a/{}",
            self.name, self.phone, self.email, self.address
        );
        for tag in &self.tags {
            args.push_str(&format!(" t/{tag}"));
        }
        args
    }
}

pub(crate) struct EventBuilder {
    name: String,
    time: String,
    address: String,
    participants: Vec<String>,
}

impl EventBuilder {
    pub(crate) fn new() -> Self {
        Self {
            name: "Spring Fair".to_string(),
            time: "2026-04-12 10:00".to_string(),
            address: "Central Park".to_string(),
            participants: vec![],
        }
    }

    pub(crate) fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub(crate) fn with_time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub(crate) fn with_participants(mut self, names: &[&str]) -> Self {
        self.participants = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub(crate) fn build(self) -> Event {
        let mut event = Event::new(
            EventName::new(&self.name).unwrap(),
            EventTime::new(&self.time).unwrap(),
            EventAddress::new(&self.address).unwrap(),
        );
        for name in &self.participants {
            event = event.with_participant(Name::new(name).unwrap());
        }
        event
    }

    pub(crate) fn add_arguments(&self) -> String {
        format!("n/{} d/{} a/{}", self.name, self.time, self.address)
    }
}

pub(crate) fn alice() -> Person {
    PersonBuilder::new().with_tags(&["friends"]).build()
}

pub(crate) fn benson() -> Person {
    PersonBuilder::new()
        .with_name("Benson Meier")
        .with_phone("98765432")
        .with_email("johnd@example.com")
        .with_tags(&["owesMoney", "friends"])
        .build()
}

pub(crate) fn carl() -> Person {
    PersonBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_email("heinz@example.com")
        .build()
}

/// Three persons and two events; Alice and Benson take part in the fair.
pub(crate) fn typical_address_book() -> AddressBook {
    let fair = EventBuilder::new()
        .with_participants(&["Alice Pauline", "Benson Meier"])
        .build();
    let quiz = EventBuilder::new()
        .with_name("Pub Quiz")
        .with_time("2026-05-01 19:30")
        .build();

    AddressBook::from_lists(&[alice(), benson(), carl()], &[fair, quiz]).unwrap()
}
