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

//! Command-line text parsing.
//!
//! This module turns a line typed into the command box into a [`Command`].
//! Parsing happens in two steps: the line is split into a command word and an
//! argument string, then the argument string is handed to the parser
//! registered for that word.
//!
//! # Organization
//!
//! * [`tokenizer`]: Splits prefixed arguments (`n/NAME p/PHONE ...`).
//! * [`util`]: Index, tag and keyword conversions shared by the parsers.
//! * [`person`] and [`event`]: One argument parser per command.

mod event;
mod person;
pub(crate) mod tokenizer;
mod util;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{
    commands::{Command, usage},
    model::FieldError,
};

static BASIC_COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<command_word>\S+)(?P<arguments>.*)$").expect("valid command format regex")
});

/// Reasons a line could not be turned into a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid command format! \n{0}")]
    InvalidFormat(&'static str),

    #[error("{0}")]
    Constraint(&'static str),
}

impl From<FieldError> for ParseError {
    fn from(err: FieldError) -> Self {
        ParseError::Constraint(err.0)
    }
}

type ArgumentParser = fn(&str) -> Result<Command, ParseError>;

/// Every command word and the parser for its arguments.
///
/// Words that take no arguments ignore whatever follows them.
static COMMAND_PARSERS: &[(&str, ArgumentParser)] = &[
    ("add", person::parse_add),
    ("edit", person::parse_edit),
    ("delete", person::parse_delete),
    ("clear", |_| Ok(Command::Clear)),
    ("find", person::parse_find),
    ("list", |_| Ok(Command::List)),
    ("select", person::parse_select),
    ("history", |_| Ok(Command::History)),
    ("undo", |_| Ok(Command::Undo)),
    ("redo", |_| Ok(Command::Redo)),
    ("exit", |_| Ok(Command::Exit)),
    ("help", |_| Ok(Command::Help)),
    ("sort", |_| Ok(Command::Sort)),
    ("portrait", person::parse_portrait),
    ("addEvent", event::parse_add_event),
    ("editEvent", event::parse_edit_event),
    ("deleteEvent", event::parse_delete_event),
    ("findEvent", event::parse_find_event),
    ("sortEvent", |_| Ok(Command::SortEvent)),
    ("join", event::parse_join),
    ("disjoin", event::parse_disjoin),
    ("showParticipants", event::parse_show_participants),
];

/// Parses user input into commands.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct AddressBookParser;

impl AddressBookParser {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Parses one line of user input.
    ///
    /// # Errors
    ///
    /// * [`ParseError::InvalidFormat`] with the help usage for blank input, or
    ///   with a command's usage when its arguments are malformed.
    /// * [`ParseError::UnknownCommand`] when the command word is not known.
    /// * [`ParseError::Constraint`] when a value breaks its field rule.
    pub(crate) fn parse_command(&self, input: &str) -> Result<Command, ParseError> {
        let caps = BASIC_COMMAND_FORMAT
            .captures(input.trim())
            .ok_or(ParseError::InvalidFormat(usage::HELP))?;

        let command_word = &caps["command_word"];
        let arguments = &caps["arguments"];

        let parse_arguments = Self::find_parser(command_word).ok_or(ParseError::UnknownCommand)?;
        parse_arguments(arguments)
    }

    fn find_parser(command_word: &str) -> Option<ArgumentParser> {
        COMMAND_PARSERS
            .iter()
            .find(|(word, _)| *word == command_word)
            .map(|(_, parser)| *parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        EditPersonDescriptor, Index, KeywordsPredicate, PortraitPath,
        test_support::{EventBuilder, PersonBuilder},
    };

    fn first() -> Index {
        Index::from_zero_based(0)
    }

    fn parse(input: &str) -> Result<Command, ParseError> {
        AddressBookParser::new().parse_command(input)
    }

    fn keywords(words: &[&str]) -> KeywordsPredicate {
        KeywordsPredicate::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn add() {
        let builder = PersonBuilder::new().with_tags(&["friends"]);
        let command = parse(&format!("add {}", builder.add_arguments()));
        assert_eq!(command, Ok(Command::Add(builder.build())));
    }

    #[test]
    fn edit() {
        let person = PersonBuilder::new().build();
        let descriptor = EditPersonDescriptor {
            name: Some(person.name.clone()),
            phone: Some(person.phone.clone()),
            email: Some(person.email.clone()),
            address: Some(person.address.clone()),
            tags: None,
        };
        let args = PersonBuilder::new().add_arguments();

        assert_eq!(
            parse(&format!("edit 1 {args}")),
            Ok(Command::Edit { index: first(), descriptor })
        );
    }

    #[test]
    fn commands_without_arguments_ignore_trailing_text() {
        let cases = [
            ("clear", Command::Clear),
            ("list", Command::List),
            ("history", Command::History),
            ("undo", Command::Undo),
            ("redo", Command::Redo),
            ("exit", Command::Exit),
            ("help", Command::Help),
            ("sort", Command::Sort),
            ("sortEvent", Command::SortEvent),
        ];

        for (word, expected) in cases {
            assert_eq!(parse(word), Ok(expected.clone()), "{word}");
            assert_eq!(parse(&format!("{word} 3")), Ok(expected), "{word} 3");
        }
    }

    #[test]
    fn index_commands() {
        assert_eq!(parse("delete 1"), Ok(Command::Delete(first())));
        assert_eq!(parse("select 1"), Ok(Command::Select(first())));
        assert_eq!(parse("deleteEvent 1"), Ok(Command::DeleteEvent(first())));
        assert_eq!(parse("showParticipants 1"), Ok(Command::ShowParticipants(first())));
    }

    #[test]
    fn find() {
        assert_eq!(
            parse("find foo bar baz"),
            Ok(Command::Find(keywords(&["foo", "bar", "baz"])))
        );
        assert_eq!(
            parse("findEvent first second third"),
            Ok(Command::FindEvent(keywords(&["first", "second", "third"])))
        );
    }

    #[test]
    fn event_commands() {
        let builder = EventBuilder::new();
        assert_eq!(
            parse(&format!("addEvent {}", builder.add_arguments())),
            Ok(Command::AddEvent(builder.build()))
        );
        assert_eq!(
            parse("disjoin e/1 p/2"),
            Ok(Command::Disjoin {
                person: Index::from_one_based(2).unwrap(),
                event: first(),
            })
        );
        assert!(matches!(parse("editEvent 1 n/Autumn Fair"), Ok(Command::EditEvent { .. })));
        assert!(matches!(parse("join p/1 e/1"), Ok(Command::Join { .. })));
    }

    #[test]
    fn portrait() {
        assert_eq!(
            parse("portrait 1 u//home/alice/alice.jpg"),
            Ok(Command::Portrait {
                index: first(),
                path: PortraitPath::new("/home/alice/alice.jpg").unwrap(),
            })
        );
    }

    #[test]
    fn blank_input_shows_help_usage() {
        let err = parse("").unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat(usage::HELP));
        assert_eq!(err.to_string(), format!("Invalid command format! \n{}", usage::HELP));
        assert_eq!(parse("   "), Err(ParseError::InvalidFormat(usage::HELP)));
    }

    #[test]
    fn unknown_command() {
        let err = parse("unknownCommand").unwrap_err();
        assert_eq!(err, ParseError::UnknownCommand);
        assert_eq!(err.to_string(), "Unknown command");
        assert_eq!(parse("histories"), Err(ParseError::UnknownCommand));
    }

    #[test]
    fn command_words_are_case_sensitive() {
        assert_eq!(parse("ADD n/x"), Err(ParseError::UnknownCommand));
        assert_eq!(parse("addevent n/x"), Err(ParseError::UnknownCommand));
    }

    #[test]
    fn every_command_word_is_registered_once() {
        let mut words: Vec<&str> = COMMAND_PARSERS.iter().map(|(word, _)| *word).collect();
        let count = words.len();
        words.sort();
        words.dedup();
        assert_eq!(words.len(), count);
        assert_eq!(count, 22);
    }
}
