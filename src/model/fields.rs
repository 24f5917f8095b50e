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

//! Shared validation helpers for value fields.

use thiserror::Error;

/// A value failed its field rule, carrying the user-facing constraint
/// message for that field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0}")]
pub(crate) struct FieldError(pub(crate) &'static str);

/// Trims `value` and checks it with `is_valid`.
pub(super) fn validated(
    value: &str,
    is_valid: impl Fn(&str) -> bool,
    constraints: &'static str,
) -> Result<String, FieldError> {
    let value = value.trim();
    if is_valid(value) {
        Ok(value.to_string())
    } else {
        Err(FieldError(constraints))
    }
}

/// Alphanumeric characters and spaces, starting with an alphanumeric.
pub(super) fn is_alphanumeric_words(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_alphanumeric() => {
            chars.all(|c| c.is_alphanumeric() || c == ' ')
        }
        _ => false,
    }
}

pub(super) fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_words() {
        assert!(is_alphanumeric_words("Alice Pauline"));
        assert!(is_alphanumeric_words("R2 D2"));
        assert!(!is_alphanumeric_words(""));
        assert!(!is_alphanumeric_words(" leading"));
        assert!(!is_alphanumeric_words("peter*"));
    }

    #[test]
    fn validated_trims_before_checking() {
        assert_eq!(validated("  abc  ", is_not_blank, "blank"), Ok("abc".to_string()));
        assert_eq!(validated("   ", is_not_blank, "blank"), Err(FieldError("blank")));
    }
}
