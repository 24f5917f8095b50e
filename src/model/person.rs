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

//! Contacts and their validated fields.

use std::{collections::BTreeSet, fmt};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    ListItem,
    fields::{FieldError, is_alphanumeric_words, is_not_blank, validated},
};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)*$").expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Name(String);

impl Name {
    pub(crate) const CONSTRAINTS: &'static str = "Person names should only contain alphanumeric \
        characters and spaces, and it should not be blank";

    pub(crate) fn new(value: &str) -> Result<Self, FieldError> {
        validated(value, is_alphanumeric_words, Self::CONSTRAINTS).map(Self)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Phone(String);

impl Phone {
    pub(crate) const CONSTRAINTS: &'static str =
        "Phone numbers can only contain numbers, and should be at least 3 digits long";

    pub(crate) fn new(value: &str) -> Result<Self, FieldError> {
        validated(
            value,
            |v| v.len() >= 3 && v.chars().all(|c| c.is_ascii_digit()),
            Self::CONSTRAINTS,
        )
        .map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Email(String);

impl Email {
    pub(crate) const CONSTRAINTS: &'static str =
        "Person emails should be 2 alphanumeric/period strings separated by '@'";

    pub(crate) fn new(value: &str) -> Result<Self, FieldError> {
        validated(value, |v| EMAIL_RE.is_match(v), Self::CONSTRAINTS).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Address(String);

impl Address {
    pub(crate) const CONSTRAINTS: &'static str =
        "Person addresses can take any values, and it should not be blank";

    pub(crate) fn new(value: &str) -> Result<Self, FieldError> {
        validated(value, is_not_blank, Self::CONSTRAINTS).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Tag(String);

impl Tag {
    pub(crate) const CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub(crate) fn new(value: &str) -> Result<Self, FieldError> {
        validated(
            value,
            |v| !v.is_empty() && v.chars().all(char::is_alphanumeric),
            Self::CONSTRAINTS,
        )
        .map(Self)
    }

    #[cfg(test)]
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

/// Location of a person's portrait image; empty when the person has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct PortraitPath(String);

impl PortraitPath {
    pub(crate) const CONSTRAINTS: &'static str = "Portrait path should be the absolute path of a \
        .png or .jpg file, or empty to remove the portrait";

    pub(crate) fn new(value: &str) -> Result<Self, FieldError> {
        validated(
            value,
            |v| v.is_empty() || v.ends_with(".png") || v.ends_with(".jpg"),
            Self::CONSTRAINTS,
        )
        .map(Self)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

macro_rules! display_inner {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        })+
    };
}

display_inner!(Name, Phone, Email, Address, PortraitPath);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// A contact in the address book.
///
/// Two persons are the same contact when every field matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Person {
    pub(crate) name: Name,
    pub(crate) phone: Phone,
    pub(crate) email: Email,
    pub(crate) address: Address,
    pub(crate) tags: BTreeSet<Tag>,
    pub(crate) portrait: PortraitPath,
}

impl Person {
    pub(crate) fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            portrait: PortraitPath::default(),
        }
    }

    pub(crate) fn with_portrait(self, portrait: PortraitPath) -> Self {
        Self { portrait, ..self }
    }

    pub(crate) fn tags_text(&self) -> String {
        self.tags.iter().map(Tag::to_string).collect()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} Tags: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.tags_text()
        )
    }
}

impl ListItem for Person {
    const KIND: &'static str = "person";

    fn sort_key(&self) -> String {
        self.name.to_string()
    }
}

/// The fields an `edit` command replaces; unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct EditPersonDescriptor {
    pub(crate) name: Option<Name>,
    pub(crate) phone: Option<Phone>,
    pub(crate) email: Option<Email>,
    pub(crate) address: Option<Address>,
    pub(crate) tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub(crate) fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited copy of `person`. The portrait is never touched by an
    /// edit.
    pub(crate) fn apply(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            address: self.address.clone().unwrap_or_else(|| person.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
            portrait: person.portrait.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::PersonBuilder;

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::new("911").is_ok());
        assert_eq!(Phone::new("91"), Err(FieldError(Phone::CONSTRAINTS)));
        assert_eq!(Phone::new("9011p041"), Err(FieldError(Phone::CONSTRAINTS)));
    }

    #[test]
    fn email_needs_local_and_domain_parts() {
        assert!(Email::new("alice@example.com").is_ok());
        assert!(Email::new("a.b+c@d").is_ok());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("peterjack@").is_err());
        assert!(Email::new("peter jack@example.com").is_err());
    }

    #[test]
    fn portrait_accepts_empty_or_image_paths() {
        assert!(PortraitPath::new("").unwrap().is_empty());
        assert!(PortraitPath::new("/home/me/pic.png").is_ok());
        assert!(PortraitPath::new("/home/me/pic.jpg").is_ok());
        assert!(PortraitPath::new("/home/me/pic.gif").is_err());
    }

    #[test]
    fn tags_must_be_single_words() {
        assert!(Tag::new("friends").is_ok());
        assert!(Tag::new("best friends").is_err());
        assert!(Tag::new("").is_err());
    }

    #[test]
    fn display_lists_all_fields() {
        let person = PersonBuilder::new().with_tags(&["friends"]).build();
        assert_eq!(
            person.to_string(),
            "Alice Pauline Phone: 85355255 Email: alice@example.com \
             Address: 123, Jurong West Ave 6, #08-111 Tags: [friends]"
        );
    }

    #[test]
    fn descriptor_only_replaces_set_fields() {
        let person = PersonBuilder::new()
            .with_portrait("/tmp/alice.png")
            .build();
        let descriptor = EditPersonDescriptor {
            phone: Some(Phone::new("999").unwrap()),
            ..Default::default()
        };

        let edited = descriptor.apply(&person);

        assert_eq!(edited.phone, Phone::new("999").unwrap());
        assert_eq!(edited.name, person.name);
        assert_eq!(edited.portrait, person.portrait);
        assert!(descriptor.is_any_field_edited());
        assert!(!EditPersonDescriptor::default().is_any_field_edited());
    }
}
