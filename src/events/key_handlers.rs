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

//! Keyboard input routing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App,
    commander::CommanderInput,
    events::{AppEvent, Focus, handlers::handle_submitted_line},
};

/// Maps keyboard input to application actions.
///
/// The command box gets the first look at every key. Keys it ignores are
/// offered to the focused table, and finally to the global shortcuts.
///
/// # Errors
///
/// Returns an error if an application event cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    match app.commander.handle_event(&event, app.logic.history()) {
        CommanderInput::Submitted(line) => return handle_submitted_line(app, &line),
        CommanderInput::Consumed => return Ok(()),
        CommanderInput::Ignored => {}
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return Ok(());
    }

    let moved = match app.focus {
        Focus::Persons => app.persons.process_event(&event),
        Focus::Events => app.events.process_event(&event),
    };
    if moved {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        _ => {}
    }

    Ok(())
}
