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

//! Command history and undo/redo support.
//!
//! * [`CommandHistory`] keeps every line the user submitted, for the
//!   `history` command and for recalling lines in the command box.
//! * [`UndoRedoStack`] keeps executed undoable commands together with what is
//!   needed to reverse them.

use std::collections::VecDeque;

use log::debug;

use crate::{
    commands::Command,
    model::{AddressBook, Event, ModelManager},
};

/// Lines entered by the user, oldest first.
#[derive(Debug, Default, Clone)]
pub(crate) struct CommandHistory {
    lines: Vec<String>,
}

impl CommandHistory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub(crate) fn most_recent_first(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().rev().map(String::as_str)
    }

    /// The line `back` steps before the most recent one, if any.
    pub(crate) fn recall(&self, back: usize) -> Option<&str> {
        self.most_recent_first().nth(back)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// What is needed to reverse one executed command.
#[derive(Debug, Clone)]
pub(crate) enum UndoRecord {
    /// The whole address book as it was before the command.
    Snapshot(AddressBook),

    /// A deleted event and the position it was deleted from.
    Reinsert { position: usize, event: Event },
}

impl UndoRecord {
    fn apply(&self, model: &mut ModelManager) {
        match self {
            UndoRecord::Snapshot(data) => model.reset_data(data),
            UndoRecord::Reinsert { position, event } => model.insert_event_at(*position, event),
        }
    }
}

#[derive(Debug)]
struct Entry {
    command: Command,
    undo: UndoRecord,
    after: AddressBook,
}

/// Undo and redo stacks of executed commands.
///
/// The undo stack holds at most `limit` entries, dropping the oldest first.
#[derive(Debug)]
pub(crate) struct UndoRedoStack {
    undo: VecDeque<Entry>,
    redo: Vec<Entry>,
    limit: usize,
}

impl UndoRedoStack {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Records an executed command, discarding anything that could be redone.
    ///
    /// # Arguments
    ///
    /// * `command` - The command that was executed.
    /// * `undo` - How to reverse it.
    /// * `after` - The address book as the command left it.
    pub(crate) fn push(&mut self, command: Command, undo: UndoRecord, after: AddressBook) {
        self.redo.clear();
        self.undo.push_back(Entry {
            command,
            undo,
            after,
        });

        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
        debug!("event=push_undo depth={}", self.undo.len());
    }

    #[cfg(test)]
    pub(crate) fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Reverses the most recent command and returns it, or `None` if there is
    /// nothing to undo.
    pub(crate) fn undo(&mut self, model: &mut ModelManager) -> Option<Command> {
        let entry = self.undo.pop_back()?;

        entry.undo.apply(model);
        model.show_everything();

        let command = entry.command.clone();
        self.redo.push(entry);
        Some(command)
    }

    /// Restores the state left by the most recently undone command and
    /// returns it, or `None` if there is nothing to redo.
    pub(crate) fn redo(&mut self, model: &mut ModelManager) -> Option<Command> {
        let entry = self.redo.pop()?;

        model.reset_data(&entry.after);
        model.show_everything();

        let command = entry.command.clone();
        self.undo.push_back(entry);
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        EventFilter, Index, KeywordsPredicate,
        test_support::{PersonBuilder, typical_address_book},
    };

    fn add_dan(model: &mut ModelManager, stack: &mut UndoRedoStack) -> AddressBook {
        let before = model.address_book().clone();
        let dan = PersonBuilder::new().with_name("Dan Smith").build();

        model.add_person(&dan).unwrap();
        stack.push(
            Command::Add(dan),
            UndoRecord::Snapshot(before.clone()),
            model.address_book().clone(),
        );
        before
    }

    #[test]
    fn history_recall() {
        let mut history = CommandHistory::new();
        assert!(history.is_empty());

        history.add("list");
        history.add("undo");

        assert_eq!(history.most_recent_first().count(), 2);
        assert_eq!(history.recall(0), Some("undo"));
        assert_eq!(history.recall(1), Some("list"));
        assert_eq!(history.recall(2), None);
    }

    #[test]
    fn undo_then_redo() {
        let mut model = ModelManager::new(typical_address_book());
        let mut stack = UndoRedoStack::new(5);

        let before = add_dan(&mut model, &mut stack);
        let after = model.address_book().clone();

        assert!(matches!(stack.undo(&mut model), Some(Command::Add(_))));
        assert_eq!(model.address_book(), &before);
        assert!(stack.can_redo());

        assert!(stack.redo(&mut model).is_some());
        assert_eq!(model.address_book(), &after);
        assert!(!stack.can_redo());
        assert!(stack.can_undo());
    }

    #[test]
    fn new_command_clears_redo() {
        let mut model = ModelManager::new(typical_address_book());
        let mut stack = UndoRedoStack::new(5);

        add_dan(&mut model, &mut stack);
        stack.undo(&mut model);
        assert!(stack.can_redo());

        add_dan(&mut model, &mut stack);
        assert!(!stack.can_redo());
        assert!(stack.redo(&mut model).is_none());
    }

    #[test]
    fn limit_drops_oldest() {
        let mut model = ModelManager::new(typical_address_book());
        let mut stack = UndoRedoStack::new(1);
        let data = model.address_book().clone();

        stack.push(Command::Clear, UndoRecord::Snapshot(data.clone()), data.clone());
        stack.push(Command::Sort, UndoRecord::Snapshot(data.clone()), data);

        assert!(matches!(stack.undo(&mut model), Some(Command::Sort)));
        assert!(stack.undo(&mut model).is_none());
    }

    #[test]
    fn undo_reinserts_deleted_event() {
        let mut model = ModelManager::new(typical_address_book());
        let mut stack = UndoRedoStack::new(5);
        let original = model.address_book().clone();

        let fair = model.filtered_event(Index::from_zero_based(0)).unwrap();
        let position = model.delete_event(&fair).unwrap();
        stack.push(
            Command::DeleteEvent(Index::from_zero_based(0)),
            UndoRecord::Reinsert { position, event: fair },
            model.address_book().clone(),
        );

        model.update_event_filter(EventFilter::Keywords(KeywordsPredicate::new(vec![
            "quiz".to_string(),
        ])));
        stack.undo(&mut model);

        assert_eq!(model.address_book(), &original);
        assert_eq!(model.filtered_events().len(), 2);
    }
}
