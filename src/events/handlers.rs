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

use anyhow::Result;
use log::debug;

use crate::{App, commands::CommandAction, events::AppEvent};

/// Executes a line submitted from the command box and shows the outcome.
///
/// # Errors
///
/// Returns an error if the exit event cannot be sent.
pub(super) fn handle_submitted_line(app: &mut App, line: &str) -> Result<()> {
    match app.logic.execute(line) {
        Ok(result) => {
            app.commander.command_succeeded();
            app.feedback = result.feedback;
            app.feedback_is_error = false;

            sync_tables(app);

            match result.action {
                CommandAction::None => {}
                CommandAction::ShowHelp => app.show_help = true,
                CommandAction::Exit => app.event_tx.send(AppEvent::ExitApplication)?,
                CommandAction::SelectPerson(index) => app.persons.select(index.zero_based()),
            }
        }
        Err(e) => {
            app.commander.command_failed();
            app.feedback = e.to_string();
            app.feedback_is_error = true;
        }
    }

    Ok(())
}

/// Copies the filtered lists into the tables if the model changed since the
/// last copy.
pub(super) fn sync_tables(app: &mut App) {
    let model = app.logic.model();
    if app.synced_revision == Some(model.revision()) {
        return;
    }

    debug!("event=sync_tables revision={}", model.revision());
    app.persons.set_items(model.filtered_persons());
    app.events.set_items(model.filtered_events());
    app.synced_revision = Some(model.revision());
}
