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

//! Executable user commands.
//!
//! A [`Command`] is produced by the parser and executed against a
//! [`CommandContext`], which bundles the model together with the command
//! history and the undo/redo stack. Execution either succeeds with a
//! [`CommandResult`] holding feedback for the user, or fails with a
//! [`CommandError`] leaving the model untouched.
//!
//! Commands that change the address book are undoable: executing one records
//! how to reverse it on the undo/redo stack.

mod handlers;
pub(crate) mod usage;

use thiserror::Error;

use crate::{
    history::{CommandHistory, UndoRedoStack},
    model::{
        EditEventDescriptor, EditPersonDescriptor, Event, Index, KeywordsPredicate, ListError,
        ListItem, ModelManager, Person, PortraitPath,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Add(Person),
    Edit {
        index: Index,
        descriptor: EditPersonDescriptor,
    },
    Delete(Index),
    Clear,
    Find(KeywordsPredicate),
    List,
    Select(Index),
    Sort,
    Portrait {
        index: Index,
        path: PortraitPath,
    },

    AddEvent(Event),
    EditEvent {
        index: Index,
        descriptor: EditEventDescriptor,
    },
    DeleteEvent(Index),
    FindEvent(KeywordsPredicate),
    SortEvent,
    Join {
        person: Index,
        event: Index,
    },
    Disjoin {
        person: Index,
        event: Index,
    },
    ShowParticipants(Index),

    History,
    Undo,
    Redo,
    Help,
    Exit,
}

/// What the UI should do in addition to showing the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandAction {
    None,
    ShowHelp,
    Exit,
    SelectPerson(Index),
}

/// The outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandResult {
    pub(crate) feedback: String,
    pub(crate) action: CommandAction,
}

impl CommandResult {
    pub(crate) fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            action: CommandAction::None,
        }
    }

    pub(crate) fn with_action(mut self, action: CommandAction) -> Self {
        self.action = action;
        self
    }
}

/// User-facing reasons a command could not be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum CommandError {
    #[error("The person index provided is invalid")]
    InvalidPersonIndex,

    #[error("The event index provided is invalid")]
    InvalidEventIndex,

    #[error("This person already exists in the address book")]
    DuplicatePerson,

    #[error("This event already exists in the address book")]
    DuplicateEvent,

    #[error("This person has already joined the event")]
    AlreadyJoined,

    #[error("This person does not participate in the event")]
    NotParticipating,

    #[error("No more commands to undo!")]
    NothingToUndo,

    #[error("No more commands to redo!")]
    NothingToRedo,

    #[error("The {0} could not be found in the address book")]
    Missing(&'static str),
}

impl From<ListError> for CommandError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::Duplicate(kind) if kind == Person::KIND => CommandError::DuplicatePerson,
            ListError::Duplicate(kind) if kind == Event::KIND => CommandError::DuplicateEvent,
            ListError::Duplicate(kind) | ListError::NotFound(kind) => CommandError::Missing(kind),
        }
    }
}

/// Bundles the state commands operate on, to simplify passing it to the
/// individual command handlers.
pub(crate) struct CommandContext<'a> {
    pub(crate) model: &'a mut ModelManager,
    pub(crate) history: &'a CommandHistory,
    pub(crate) undo_redo: &'a mut UndoRedoStack,
}

impl Command {
    /// Executes the command.
    ///
    /// Undoable commands push themselves, with their undo record and the
    /// resulting address book, onto the undo/redo stack.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] describing why the command was refused; the
    /// model is left unchanged in that case.
    pub(crate) fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult, CommandError> {
        let (result, undo) = match self {
            Command::Add(person) => handlers::add(ctx.model, person)?,
            Command::Edit { index, descriptor } => handlers::edit(ctx.model, *index, descriptor)?,
            Command::Delete(index) => handlers::delete(ctx.model, *index)?,
            Command::Clear => handlers::clear(ctx.model),
            Command::Find(predicate) => return Ok(handlers::find(ctx.model, predicate)),
            Command::List => return Ok(handlers::list(ctx.model)),
            Command::Select(index) => return handlers::select(ctx.model, *index),
            Command::Sort => handlers::sort(ctx.model),
            Command::Portrait { index, path } => handlers::portrait(ctx.model, *index, path)?,

            Command::AddEvent(event) => handlers::add_event(ctx.model, event)?,
            Command::EditEvent { index, descriptor } => {
                handlers::edit_event(ctx.model, *index, descriptor)?
            }
            Command::DeleteEvent(index) => handlers::delete_event(ctx.model, *index)?,
            Command::FindEvent(predicate) => {
                return Ok(handlers::find_event(ctx.model, predicate));
            }
            Command::SortEvent => handlers::sort_event(ctx.model),
            Command::Join { person, event } => handlers::join(ctx.model, *person, *event)?,
            Command::Disjoin { person, event } => handlers::disjoin(ctx.model, *person, *event)?,
            Command::ShowParticipants(index) => {
                return handlers::show_participants(ctx.model, *index);
            }

            Command::History => return Ok(handlers::history(ctx.history)),
            Command::Undo => return handlers::undo(ctx.model, ctx.undo_redo),
            Command::Redo => return handlers::redo(ctx.model, ctx.undo_redo),
            Command::Help => {
                return Ok(CommandResult::new("Opened help window.")
                    .with_action(CommandAction::ShowHelp));
            }
            Command::Exit => {
                return Ok(CommandResult::new("Exiting Address Book as requested ...")
                    .with_action(CommandAction::Exit));
            }
        };

        ctx.undo_redo
            .push(self.clone(), undo, ctx.model.address_book().clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_errors_map_to_user_messages() {
        assert_eq!(
            CommandError::from(ListError::Duplicate("person")),
            CommandError::DuplicatePerson
        );
        assert_eq!(
            CommandError::from(ListError::Duplicate("event")),
            CommandError::DuplicateEvent
        );
        assert_eq!(
            CommandError::from(ListError::NotFound("event")).to_string(),
            "The event could not be found in the address book"
        );
    }
}
