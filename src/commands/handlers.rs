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

//! Handlers for the individual commands.
//!
//! Handlers of undoable commands return the [`UndoRecord`] needed to reverse
//! them alongside their result. Every handler resolves indexes against the
//! filtered lists before touching the model, so a refused command never
//! leaves a partial change behind.

use log::debug;

use crate::{
    commands::{CommandAction, CommandError, CommandResult},
    history::{CommandHistory, UndoRecord, UndoRedoStack},
    model::{
        EditEventDescriptor, EditPersonDescriptor, Event, EventFilter, Index, KeywordsPredicate,
        ModelManager, Person, PersonFilter, PortraitPath,
    },
};

type Undoable = Result<(CommandResult, UndoRecord), CommandError>;

fn person_at(model: &ModelManager, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_person(index)
        .ok_or(CommandError::InvalidPersonIndex)
}

fn event_at(model: &ModelManager, index: Index) -> Result<Event, CommandError> {
    model
        .filtered_event(index)
        .ok_or(CommandError::InvalidEventIndex)
}

fn snapshot(model: &ModelManager) -> UndoRecord {
    UndoRecord::Snapshot(model.address_book().clone())
}

pub(super) fn add(model: &mut ModelManager, person: &Person) -> Undoable {
    let undo = snapshot(model);
    model.add_person(person)?;

    Ok((CommandResult::new(format!("New person added: {person}")), undo))
}

pub(super) fn edit(
    model: &mut ModelManager,
    index: Index,
    descriptor: &EditPersonDescriptor,
) -> Undoable {
    let target = person_at(model, index)?;
    let edited = descriptor.apply(&target);

    let undo = snapshot(model);
    model.update_person(&target, &edited)?;

    Ok((CommandResult::new(format!("Edited Person: {edited}")), undo))
}

pub(super) fn delete(model: &mut ModelManager, index: Index) -> Undoable {
    let target = person_at(model, index)?;

    let undo = snapshot(model);
    model.delete_person(&target)?;

    Ok((CommandResult::new(format!("Deleted Person: {target}")), undo))
}

pub(super) fn clear(model: &mut ModelManager) -> (CommandResult, UndoRecord) {
    let undo = snapshot(model);
    model.clear();

    (CommandResult::new("Address book has been cleared!"), undo)
}

pub(super) fn find(model: &mut ModelManager, predicate: &KeywordsPredicate) -> CommandResult {
    model.update_person_filter(PersonFilter::Keywords(predicate.clone()));
    let count = model.filtered_persons().len();

    CommandResult::new(format!("{count} persons listed!"))
}

pub(super) fn list(model: &mut ModelManager) -> CommandResult {
    model.update_person_filter(PersonFilter::All);
    CommandResult::new("Listed all persons")
}

pub(super) fn select(model: &mut ModelManager, index: Index) -> Result<CommandResult, CommandError> {
    person_at(model, index)?;

    Ok(CommandResult::new(format!("Selected Person: {index}"))
        .with_action(CommandAction::SelectPerson(index)))
}

pub(super) fn sort(model: &mut ModelManager) -> (CommandResult, UndoRecord) {
    let undo = snapshot(model);
    model.sort_persons();

    (CommandResult::new("Sorted all persons by name"), undo)
}

pub(super) fn portrait(model: &mut ModelManager, index: Index, path: &PortraitPath) -> Undoable {
    let target = person_at(model, index)?;
    let edited = target.clone().with_portrait(path.clone());

    let undo = snapshot(model);
    model.update_person(&target, &edited)?;

    let feedback = if path.is_empty() {
        format!("Portrait of {} removed", target.name)
    } else {
        format!("Portrait of {} updated", target.name)
    };
    Ok((CommandResult::new(feedback), undo))
}

pub(super) fn add_event(model: &mut ModelManager, event: &Event) -> Undoable {
    let undo = snapshot(model);
    model.add_event(event)?;

    Ok((CommandResult::new(format!("New event added: {event}")), undo))
}

pub(super) fn edit_event(
    model: &mut ModelManager,
    index: Index,
    descriptor: &EditEventDescriptor,
) -> Undoable {
    let target = event_at(model, index)?;
    let edited = descriptor.apply(&target);

    let undo = snapshot(model);
    model.update_event(&target, &edited)?;

    Ok((CommandResult::new(format!("Edited Event: {edited}")), undo))
}

/// Deleting an event is reversed by putting it back where it was rather than
/// by restoring a snapshot of the whole address book.
pub(super) fn delete_event(model: &mut ModelManager, index: Index) -> Undoable {
    let target = event_at(model, index)?;
    let position = model.delete_event(&target)?;

    let undo = UndoRecord::Reinsert {
        position,
        event: target.clone(),
    };
    Ok((CommandResult::new(format!("Deleted Event: {target}")), undo))
}

pub(super) fn find_event(model: &mut ModelManager, predicate: &KeywordsPredicate) -> CommandResult {
    model.update_event_filter(EventFilter::Keywords(predicate.clone()));
    let count = model.filtered_events().len();

    CommandResult::new(format!("{count} events listed!"))
}

pub(super) fn sort_event(model: &mut ModelManager) -> (CommandResult, UndoRecord) {
    let undo = snapshot(model);
    model.sort_events();

    (CommandResult::new("Sorted all events by name"), undo)
}

pub(super) fn join(model: &mut ModelManager, person: Index, event: Index) -> Undoable {
    let person = person_at(model, person)?;
    let event = event_at(model, event)?;

    if event.has_participant(&person.name) {
        return Err(CommandError::AlreadyJoined);
    }

    let undo = snapshot(model);
    model.join_event(&event, &person.name)?;

    let feedback = format!("{} joined {}", person.name, event.name);
    Ok((CommandResult::new(feedback), undo))
}

pub(super) fn disjoin(model: &mut ModelManager, person: Index, event: Index) -> Undoable {
    let person = person_at(model, person)?;
    let event = event_at(model, event)?;

    if !event.has_participant(&person.name) {
        return Err(CommandError::NotParticipating);
    }

    let undo = snapshot(model);
    model.disjoin_event(&event, &person.name)?;

    let feedback = format!("{} no longer participates in {}", person.name, event.name);
    Ok((CommandResult::new(feedback), undo))
}

pub(super) fn show_participants(
    model: &mut ModelManager,
    index: Index,
) -> Result<CommandResult, CommandError> {
    let event = event_at(model, index)?;

    model.update_person_filter(PersonFilter::Participants(event.participants.clone()));
    let count = model.filtered_persons().len();

    Ok(CommandResult::new(format!(
        "{count} participants of {} listed!",
        event.name
    )))
}

pub(super) fn history(history: &CommandHistory) -> CommandResult {
    if history.is_empty() {
        return CommandResult::new("You have not yet entered any commands.");
    }

    let lines: Vec<&str> = history.most_recent_first().collect();
    CommandResult::new(format!(
        "Entered commands (from most recent to earliest):\n{}",
        lines.join("\n")
    ))
}

pub(super) fn undo(
    model: &mut ModelManager,
    undo_redo: &mut UndoRedoStack,
) -> Result<CommandResult, CommandError> {
    let command = undo_redo.undo(model).ok_or(CommandError::NothingToUndo)?;
    debug!("event=undo command={command:?}");

    Ok(CommandResult::new("Undo success!"))
}

pub(super) fn redo(
    model: &mut ModelManager,
    undo_redo: &mut UndoRedoStack,
) -> Result<CommandResult, CommandError> {
    let command = undo_redo.redo(model).ok_or(CommandError::NothingToRedo)?;
    debug!("event=redo command={command:?}");

    Ok(CommandResult::new("Redo success!"))
}
