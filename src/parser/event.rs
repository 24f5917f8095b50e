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

//! Argument parsers for the event commands.

use crate::{
    commands::{Command, usage},
    model::{EditEventDescriptor, Event, EventAddress, EventName, EventTime, Index},
    parser::{
        ParseError,
        person::MESSAGE_NOT_EDITED,
        tokenizer::{PREFIX_ADDRESS, PREFIX_EVENT, PREFIX_NAME, PREFIX_PERSON, PREFIX_TIME, tokenize},
        util::{parse_index, parse_index_argument, parse_keywords},
    },
};

/// `addEvent n/NAME d/TIME a/VENUE`
pub(crate) fn parse_add_event(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_TIME, PREFIX_ADDRESS]);

    if !map.has_all(&[PREFIX_NAME, PREFIX_TIME, PREFIX_ADDRESS]) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(usage::ADD_EVENT));
    }

    let value = |prefix| map.value(prefix).unwrap_or_default();

    let event = Event::new(
        EventName::new(value(PREFIX_NAME))?,
        EventTime::new(value(PREFIX_TIME))?,
        EventAddress::new(value(PREFIX_ADDRESS))?,
    );

    Ok(Command::AddEvent(event))
}

/// `editEvent INDEX [n/NAME] [d/TIME] [a/VENUE]`
pub(crate) fn parse_edit_event(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_TIME, PREFIX_ADDRESS]);

    let index =
        parse_index(map.preamble()).map_err(|_| ParseError::InvalidFormat(usage::EDIT_EVENT))?;

    let descriptor = EditEventDescriptor {
        name: map.value(PREFIX_NAME).map(EventName::new).transpose()?,
        time: map.value(PREFIX_TIME).map(EventTime::new).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(EventAddress::new).transpose()?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::Constraint(MESSAGE_NOT_EDITED));
    }

    Ok(Command::EditEvent { index, descriptor })
}

pub(crate) fn parse_delete_event(args: &str) -> Result<Command, ParseError> {
    parse_index_argument(args, usage::DELETE_EVENT).map(Command::DeleteEvent)
}

pub(crate) fn parse_find_event(args: &str) -> Result<Command, ParseError> {
    parse_keywords(args, usage::FIND_EVENT).map(Command::FindEvent)
}

pub(crate) fn parse_show_participants(args: &str) -> Result<Command, ParseError> {
    parse_index_argument(args, usage::SHOW_PARTICIPANTS).map(Command::ShowParticipants)
}

/// `join p/PERSON_INDEX e/EVENT_INDEX`
pub(crate) fn parse_join(args: &str) -> Result<Command, ParseError> {
    let (person, event) = parse_membership(args, usage::JOIN)?;
    Ok(Command::Join { person, event })
}

/// `disjoin p/PERSON_INDEX e/EVENT_INDEX`
pub(crate) fn parse_disjoin(args: &str) -> Result<Command, ParseError> {
    let (person, event) = parse_membership(args, usage::DISJOIN)?;
    Ok(Command::Disjoin { person, event })
}

// Person and event index pair shared by `join` and `disjoin`, in either order.
fn parse_membership(args: &str, usage: &'static str) -> Result<(Index, Index), ParseError> {
    let map = tokenize(args, &[PREFIX_PERSON, PREFIX_EVENT]);

    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(usage));
    }

    let index = |prefix| {
        map.value(prefix)
            .ok_or(ParseError::InvalidFormat(usage))
            .and_then(|value| parse_index_argument(value, usage))
    };

    Ok((index(PREFIX_PERSON)?, index(PREFIX_EVENT)?))
}
