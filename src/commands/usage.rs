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

//! Usage text shown when a command's arguments are malformed.

pub(crate) const ADD: &str = "add: Adds a person to the address book. \
    Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
    Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
    t/friends t/owesMoney";

pub(crate) const EDIT: &str = "edit: Edits the details of the person identified by the index \
    number used in the last person listing. Existing values will be overwritten by the input \
    values.\n\
    Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
    [t/TAG]...\n\
    Example: edit 1 p/91234567 e/johndoe@example.com";

pub(crate) const DELETE: &str = "delete: Deletes the person identified by the index number used \
    in the last person listing.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: delete 1";

pub(crate) const FIND: &str = "find: Finds all persons whose names contain any of the specified \
    keywords (case-insensitive) and displays them as a list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find alice bob charlie";

pub(crate) const SELECT: &str = "select: Selects the person identified by the index number used \
    in the last person listing.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: select 1";

pub(crate) const HELP: &str = "help: Shows program usage instructions.\n\
    Example: help";

pub(crate) const PORTRAIT: &str = "portrait: Sets the portrait of the person identified by the \
    index number used in the last person listing. An empty path removes the portrait.\n\
    Parameters: INDEX (must be a positive integer) u/PATH\n\
    Example: portrait 1 u//home/alice/pictures/alice.png";

pub(crate) const ADD_EVENT: &str = "addEvent: Adds an event to the address book. \
    Parameters: n/NAME d/TIME a/VENUE\n\
    Example: addEvent n/Spring Fair d/2026-04-12 10:00 a/Central Park";

pub(crate) const EDIT_EVENT: &str = "editEvent: Edits the details of the event identified by the \
    index number used in the last event listing. Existing values will be overwritten by the \
    input values.\n\
    Parameters: INDEX (must be a positive integer) [n/NAME] [d/TIME] [a/VENUE]\n\
    Example: editEvent 1 d/2026-04-13 09:30";

pub(crate) const DELETE_EVENT: &str = "deleteEvent: Deletes the event identified by the index \
    number used in the last event listing.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: deleteEvent 1";

pub(crate) const FIND_EVENT: &str = "findEvent: Finds all events whose names contain any of the \
    specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: findEvent fair quiz";

pub(crate) const JOIN: &str = "join: Adds the person to the participants of the event, both \
    identified by the index numbers used in the last listings.\n\
    Parameters: p/PERSON_INDEX e/EVENT_INDEX\n\
    Example: join p/1 e/2";

pub(crate) const DISJOIN: &str = "disjoin: Removes the person from the participants of the \
    event, both identified by the index numbers used in the last listings.\n\
    Parameters: p/PERSON_INDEX e/EVENT_INDEX\n\
    Example: disjoin p/1 e/2";

pub(crate) const SHOW_PARTICIPANTS: &str = "showParticipants: Lists the persons taking part in \
    the event identified by the index number used in the last event listing.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: showParticipants 1";

/// Summary shown by the `help` command.
pub(crate) const SUMMARY: &str = "Commands: add, edit, delete, clear, find, list, select, \
    portrait, sort, addEvent, editEvent, deleteEvent, findEvent, sortEvent, join, disjoin, \
    showParticipants, history, undo, redo, help, exit. Press ':' to type a command and Esc to \
    leave the command box.";
