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

//! Events and their participants.

use std::{collections::BTreeSet, fmt};

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    ListItem, Name,
    fields::{FieldError, is_alphanumeric_words, is_not_blank, validated},
};

const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// chrono accepts single digit fields, the stored form is always zero padded.
static EVENT_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("valid event time regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct EventName(String);

impl EventName {
    pub(crate) const CONSTRAINTS: &'static str = "Event names should only contain alphanumeric \
        characters and spaces, and it should not be blank";

    pub(crate) fn new(value: &str) -> Result<Self, FieldError> {
        validated(value, is_alphanumeric_words, Self::CONSTRAINTS).map(Self)
    }
}

/// Start of an event, kept in `YYYY-MM-DD HH:MM` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct EventTime(String);

impl EventTime {
    pub(crate) const CONSTRAINTS: &'static str =
        "Event time should be in the format YYYY-MM-DD HH:MM";

    pub(crate) fn new(value: &str) -> Result<Self, FieldError> {
        validated(value, is_valid_time, Self::CONSTRAINTS).map(Self)
    }
}

fn is_valid_time(value: &str) -> bool {
    EVENT_TIME_RE.is_match(value) && NaiveDateTime::parse_from_str(value, EVENT_TIME_FORMAT).is_ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct EventAddress(String);

impl EventAddress {
    pub(crate) const CONSTRAINTS: &'static str =
        "Event venues can take any values, and it should not be blank";

    pub(crate) fn new(value: &str) -> Result<Self, FieldError> {
        validated(value, is_not_blank, Self::CONSTRAINTS).map(Self)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for EventAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something happening at a time and place, with the persons taking part.
#[derive(Debug, Clone)]
pub(crate) struct Event {
    pub(crate) name: EventName,
    pub(crate) time: EventTime,
    pub(crate) address: EventAddress,
    pub(crate) participants: BTreeSet<Name>,
}

impl Event {
    pub(crate) fn new(name: EventName, time: EventTime, address: EventAddress) -> Self {
        Self {
            name,
            time,
            address,
            participants: BTreeSet::new(),
        }
    }

    pub(crate) fn has_participant(&self, name: &Name) -> bool {
        self.participants.contains(name)
    }

    pub(crate) fn with_participant(&self, name: Name) -> Self {
        let mut event = self.clone();
        event.participants.insert(name);
        event
    }

    pub(crate) fn without_participant(&self, name: &Name) -> Self {
        let mut event = self.clone();
        event.participants.remove(name);
        event
    }
}

// Participants are membership data, an event is identified by what, when and
// where.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.time == other.time && self.address == other.address
    }
}

impl Eq for Event {}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Time: {} Venue: {}", self.name, self.time, self.address)
    }
}

impl ListItem for Event {
    const KIND: &'static str = "event";

    fn sort_key(&self) -> String {
        self.name.to_string()
    }
}

/// The fields an `editEvent` command replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct EditEventDescriptor {
    pub(crate) name: Option<EventName>,
    pub(crate) time: Option<EventTime>,
    pub(crate) address: Option<EventAddress>,
}

impl EditEventDescriptor {
    pub(crate) fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.time.is_some() || self.address.is_some()
    }

    pub(crate) fn apply(&self, event: &Event) -> Event {
        Event {
            name: self.name.clone().unwrap_or_else(|| event.name.clone()),
            time: self.time.clone().unwrap_or_else(|| event.time.clone()),
            address: self.address.clone().unwrap_or_else(|| event.address.clone()),
            participants: event.participants.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::EventBuilder;

    #[test]
    fn event_time_checks_ranges() {
        assert!(EventTime::new("2026-10-19 18:30").is_ok());
        assert!(EventTime::new(" 2026-01-01 00:00 ").is_ok());
        assert!(EventTime::new("2026-13-01 10:00").is_err());
        assert!(EventTime::new("2026-00-01 10:00").is_err());
        assert!(EventTime::new("2026-01-01 24:00").is_err());
        assert!(EventTime::new("2026-01-01").is_err());
        assert!(EventTime::new("tomorrow").is_err());
    }

    #[test]
    fn event_time_rejects_days_missing_from_the_calendar() {
        assert!(EventTime::new("2026-02-31 10:00").is_err());
        assert!(EventTime::new("2026-04-31 10:00").is_err());
        assert!(EventTime::new("2025-02-29 10:00").is_err());
        assert!(EventTime::new("2028-02-29 10:00").is_ok());
        assert!(EventTime::new("2026-4-12 10:00").is_err());
    }

    #[test]
    fn participants_do_not_affect_equality() {
        let event = EventBuilder::new().build();
        let joined = event.with_participant(Name::new("Alice Pauline").unwrap());

        assert_eq!(event, joined);
        assert!(joined.has_participant(&Name::new("Alice Pauline").unwrap()));
        assert!(!event.has_participant(&Name::new("Alice Pauline").unwrap()));
    }

    #[test]
    fn descriptor_keeps_participants() {
        let alice = Name::new("Alice Pauline").unwrap();
        let event = EventBuilder::new().build().with_participant(alice.clone());
        let descriptor = EditEventDescriptor {
            address: Some(EventAddress::new("Town Hall").unwrap()),
            ..Default::default()
        };

        let edited = descriptor.apply(&event);

        assert_eq!(edited.address, EventAddress::new("Town Hall").unwrap());
        assert!(edited.has_participant(&alice));
    }

    #[test]
    fn display_shows_time_and_venue() {
        let event = EventBuilder::new().build();
        assert_eq!(event.to_string(), "Spring Fair Time: 2026-04-12 10:00 Venue: Central Park");
    }
}
