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

//! Argument parsers for the person commands.

use crate::{
    commands::{Command, usage},
    model::{Address, EditPersonDescriptor, Email, Name, Person, Phone, PortraitPath},
    parser::{
        ParseError,
        tokenizer::{
            PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_PORTRAIT, PREFIX_TAG,
            tokenize,
        },
        util::{parse_index, parse_index_argument, parse_keywords, parse_tags, parse_tags_for_edit},
    },
};

pub(crate) const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// `add n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...`
pub(crate) fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    );

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !map.has_all(&required) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(usage::ADD));
    }

    let value = |prefix| map.value(prefix).unwrap_or_default();

    let person = Person::new(
        Name::new(value(PREFIX_NAME))?,
        Phone::new(value(PREFIX_PHONE))?,
        Email::new(value(PREFIX_EMAIL))?,
        Address::new(value(PREFIX_ADDRESS))?,
        parse_tags(map.all_values(PREFIX_TAG))?,
    );

    Ok(Command::Add(person))
}

/// `edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...`
pub(crate) fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    );

    let index =
        parse_index(map.preamble()).map_err(|_| ParseError::InvalidFormat(usage::EDIT))?;

    let descriptor = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(Name::new).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::new).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::new).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::new).transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::Constraint(MESSAGE_NOT_EDITED));
    }

    Ok(Command::Edit { index, descriptor })
}

pub(crate) fn parse_delete(args: &str) -> Result<Command, ParseError> {
    parse_index_argument(args, usage::DELETE).map(Command::Delete)
}

pub(crate) fn parse_select(args: &str) -> Result<Command, ParseError> {
    parse_index_argument(args, usage::SELECT).map(Command::Select)
}

pub(crate) fn parse_find(args: &str) -> Result<Command, ParseError> {
    parse_keywords(args, usage::FIND).map(Command::Find)
}

/// `portrait INDEX u/PATH`, where an empty path removes the portrait.
pub(crate) fn parse_portrait(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_PORTRAIT]);

    let index =
        parse_index(map.preamble()).map_err(|_| ParseError::InvalidFormat(usage::PORTRAIT))?;
    let path = map
        .value(PREFIX_PORTRAIT)
        .ok_or(ParseError::InvalidFormat(usage::PORTRAIT))?;

    Ok(Command::Portrait {
        index,
        path: PortraitPath::new(path)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Index, Tag, test_support::PersonBuilder};

    fn first() -> Index {
        Index::from_zero_based(0)
    }

    #[test]
    fn add_with_all_fields() {
        let builder = PersonBuilder::new().with_tags(&["friends", "neighbours"]);
        let args = format!(" {}", builder.add_arguments());

        assert_eq!(parse_add(&args), Ok(Command::Add(builder.build())));
    }

    #[test]
    fn add_takes_last_of_repeated_values() {
        let args = " n/Bob n/Alice Pauline p/85355255 e/alice@example.com \
                    a/123, Jurong West Ave 6, #08-111";
        assert_eq!(parse_add(args), Ok(Command::Add(PersonBuilder::new().build())));
    }

    #[test]
    fn add_missing_field_is_a_format_error() {
        let args = " n/Alice p/85355255 e/alice@example.com";
        assert_eq!(parse_add(args), Err(ParseError::InvalidFormat(usage::ADD)));
    }

    #[test]
    fn add_with_preamble_is_a_format_error() {
        let args = " oops n/Alice p/85355255 e/alice@example.com a/Street";
        assert_eq!(parse_add(args), Err(ParseError::InvalidFormat(usage::ADD)));
    }

    #[test]
    fn add_reports_field_constraints() {
        let args = " n/Alice p/85 e/alice@example.com a/Street";
        assert_eq!(parse_add(args), Err(ParseError::Constraint(Phone::CONSTRAINTS)));

        let args = " n/Alice p/853 e/alice@example.com a/Street t/hello world";
        assert_eq!(parse_add(args), Err(ParseError::Constraint(Tag::CONSTRAINTS)));
    }

    #[test]
    fn edit_some_fields() {
        let descriptor = EditPersonDescriptor {
            phone: Some(Phone::new("91234567").unwrap()),
            email: Some(Email::new("johndoe@example.com").unwrap()),
            ..Default::default()
        };

        assert_eq!(
            parse_edit(" 1 p/91234567 e/johndoe@example.com"),
            Ok(Command::Edit { index: first(), descriptor })
        );
    }

    #[test]
    fn edit_empty_tag_clears_tags() {
        let descriptor = EditPersonDescriptor {
            tags: Some(Default::default()),
            ..Default::default()
        };
        assert_eq!(
            parse_edit(" 1 t/"),
            Ok(Command::Edit { index: first(), descriptor })
        );
    }

    #[test]
    fn edit_errors() {
        assert_eq!(parse_edit(" 1"), Err(ParseError::Constraint(MESSAGE_NOT_EDITED)));
        assert_eq!(parse_edit(" n/Bob"), Err(ParseError::InvalidFormat(usage::EDIT)));
        assert_eq!(parse_edit(" 0 n/Bob"), Err(ParseError::InvalidFormat(usage::EDIT)));
        assert_eq!(parse_edit(" 1 n/B*b"), Err(ParseError::Constraint(Name::CONSTRAINTS)));
    }

    #[test]
    fn index_commands() {
        assert_eq!(parse_delete(" 1"), Ok(Command::Delete(first())));
        assert_eq!(parse_select(" 1"), Ok(Command::Select(first())));
        assert_eq!(parse_delete(" a"), Err(ParseError::InvalidFormat(usage::DELETE)));
        assert_eq!(parse_select(""), Err(ParseError::InvalidFormat(usage::SELECT)));
    }

    #[test]
    fn portrait_set_and_remove() {
        assert_eq!(
            parse_portrait(" 1 u//home/alice/alice.png"),
            Ok(Command::Portrait {
                index: first(),
                path: PortraitPath::new("/home/alice/alice.png").unwrap(),
            })
        );
        assert_eq!(
            parse_portrait(" 1 u/"),
            Ok(Command::Portrait { index: first(), path: PortraitPath::default() })
        );
    }

    #[test]
    fn portrait_errors() {
        assert_eq!(parse_portrait(" 1"), Err(ParseError::InvalidFormat(usage::PORTRAIT)));
        assert_eq!(
            parse_portrait(" u/a.png"),
            Err(ParseError::InvalidFormat(usage::PORTRAIT))
        );
        assert_eq!(
            parse_portrait(" 1 u/a.gif"),
            Err(ParseError::Constraint(PortraitPath::CONSTRAINTS))
        );
    }
}
