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

//! Entry point from the UI into parsing and command execution.

use log::{info, warn};
use thiserror::Error;

use crate::{
    commands::{CommandContext, CommandError, CommandResult},
    history::{CommandHistory, UndoRedoStack},
    model::ModelManager,
    parser::{AddressBookParser, ParseError},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

pub(crate) struct Logic {
    parser: AddressBookParser,
    model: ModelManager,
    history: CommandHistory,
    undo_redo: UndoRedoStack,
}

impl Logic {
    /// # Arguments
    ///
    /// * `model` - The model commands operate on.
    /// * `undo_limit` - How many commands can be undone.
    pub(crate) fn new(model: ModelManager, undo_limit: usize) -> Self {
        Self {
            parser: AddressBookParser::new(),
            model,
            history: CommandHistory::new(),
            undo_redo: UndoRedoStack::new(undo_limit),
        }
    }

    pub(crate) fn model(&self) -> &ModelManager {
        &self.model
    }

    pub(crate) fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Parses and executes one line of user input.
    ///
    /// The line is added to the command history whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::Parse`] if the line is not a valid command, or
    /// [`LogicError::Command`] if the command could not be carried out.
    pub(crate) fn execute(&mut self, line: &str) -> Result<CommandResult, LogicError> {
        info!("event=command_entered line={line:?}");

        let result = self.parse_and_execute(line);
        self.history.add(line);

        match &result {
            Ok(result) => info!("event=command_succeeded feedback={:?}", result.feedback),
            Err(e) => warn!("event=command_failed error={e:?}"),
        }
        result
    }

    fn parse_and_execute(&mut self, line: &str) -> Result<CommandResult, LogicError> {
        let command = self.parser.parse_command(line)?;

        let mut ctx = CommandContext {
            model: &mut self.model,
            history: &self.history,
            undo_redo: &mut self.undo_redo,
        };
        Ok(command.execute(&mut ctx)?)
    }
}
