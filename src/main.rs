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

//! # Event Book TUI.
//!
//! A terminal-based address book that keeps track of people and the events
//! they take part in.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! command layer that parses typed command lines and executes them against an
//! in-memory model.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, executes commands and
//!   renders the UI.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Input and tick
//! threads communicate with the main thread via `std::sync::mpsc` channels.

mod commander;
mod commands;
mod components;
mod config;
mod events;
mod history;
mod logging;
mod logic;
mod model;
mod parser;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    commander::Commander,
    components::RecordTable,
    config::{AppConfig, CONFIG_VERSION},
    events::{AppEvent, Focus, process_events},
    logic::Logic,
    model::{Event, ModelManager, Person, sample_address_book},
    theme::Theme,
};

const WELCOME: &str = "Welcome! Press ':' to type a command, '?' for help.";

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub logic: Logic,
    pub commander: Commander,

    pub persons: RecordTable<Person>,
    pub events: RecordTable<Event>,
    pub focus: Focus,
    pub synced_revision: Option<u64>,

    pub feedback: String,
    pub feedback_is_error: bool,
    pub show_help: bool,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: &AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut model = ModelManager::new(sample_address_book());
        if config.sort_on_start {
            model.sort_persons();
            model.sort_events();
        }

        let mut persons = RecordTable::new();
        persons.focused = true;

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            logic: Logic::new(model, config.undo_limit),
            commander: Commander::new(),
            persons,
            events: RecordTable::new(),
            focus: Focus::Persons,
            synced_revision: None,
            feedback: WELCOME.to_string(),
            feedback_is_error: false,
            show_help: false,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Persons => Focus::Events,
            Focus::Events => Focus::Persons,
        };
        self.persons.focused = self.focus == Focus::Persons;
        self.events.focused = self.focus == Focus::Events;
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let mut config = config::load_config();

    // Logging stops when the handle is dropped
    let _logger = match logging::init_logging(&config.log_level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Logging disabled: {e:#}");
            None
        }
    };

    upgrade_config(&mut config);

    let mut app = App::new(&config);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!("event=app_exit ok={}", res.is_ok());
    res.context("Application error occurred")
}

/// Writes the configuration back when it was created by an older version so
/// that new settings show up in the file.
///
/// Runs after logging has started, a failed save is only logged.
fn upgrade_config(config: &mut AppConfig) {
    if !config.upgrade() {
        return;
    }

    match config::save_config(config) {
        Ok(()) => info!("event=config_upgraded version={CONFIG_VERSION}"),
        Err(e) => warn!("event=config_save_failed error={e}"),
    }
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], disabling raw mode
/// and leaving the alternate screen. It also ensures the cursor is made
/// visible again.
///
/// This function is best-effort and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read()
                && tx_keys.send(AppEvent::Key(key)).is_err()
            {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
