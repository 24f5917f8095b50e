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

//! Command box input logic and state management.
//!
//! This module implements the command box: a text input component that is
//! activated with `:`, hands the typed line back to the caller on Enter, and
//! lets the user step through previously entered lines with Up and Down.

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::history::CommandHistory;

/// What the command box did with a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommanderInput {
    /// The event is not for the command box.
    Ignored,
    Consumed,
    /// A non-blank line was submitted.
    Submitted(String),
}

pub(crate) struct Commander {
    active: bool,
    failed: bool,
    recall: Option<usize>,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            failed: false,
            recall: None,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Whether the text shown is a line that was just rejected.
    pub(crate) fn failed(&self) -> bool {
        self.failed
    }

    /// # Arguments
    ///
    /// * `event` - The terminal event to handle.
    /// * `history` - Previously entered lines, for recall with Up and Down.
    pub(crate) fn handle_event(&mut self, event: &Event, history: &CommandHistory) -> CommanderInput {
        let Event::Key(key_event) = event else {
            return CommanderInput::Ignored;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return CommanderInput::Consumed;
            }
            return CommanderInput::Ignored;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
            }

            KeyCode::Enter => {
                let line = self.input.value().trim().to_string();
                self.recall = None;
                if !line.is_empty() {
                    return CommanderInput::Submitted(line);
                }
            }

            KeyCode::Up => self.recall_older(history),
            KeyCode::Down => self.recall_newer(history),

            _ => {
                // Delegate all other key events to the managed input component.
                self.failed = false;
                self.input.handle_event(event);
            }
        }

        CommanderInput::Consumed
    }

    /// The submitted line was executed, clear it.
    pub(crate) fn command_succeeded(&mut self) {
        self.failed = false;
        self.input.reset();
    }

    /// The submitted line was rejected, keep it for correction.
    pub(crate) fn command_failed(&mut self) {
        self.failed = true;
    }

    fn recall_older(&mut self, history: &CommandHistory) {
        let back = self.recall.map_or(0, |back| back + 1);
        if let Some(line) = history.recall(back) {
            self.recall = Some(back);
            self.show(line);
        }
    }

    fn recall_newer(&mut self, history: &CommandHistory) {
        match self.recall {
            None => {}
            Some(0) => {
                self.recall = None;
                self.input.reset();
            }
            Some(back) => {
                self.recall = Some(back - 1);
                if let Some(line) = history.recall(back - 1) {
                    self.show(line);
                }
            }
        }
    }

    fn show(&mut self, line: &str) {
        self.failed = false;
        self.input = Input::new(line.to_string());
    }
}
