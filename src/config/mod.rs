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

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "eventbook";

pub(crate) const CONFIG_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) log_level: String,
    pub(crate) undo_limit: usize,
    pub(crate) sort_on_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: "info".to_string(),
            undo_limit: 100,
            sort_on_start: false,
        }
    }
}

impl AppConfig {
    /// Moves a configuration written by an older version to the current one.
    ///
    /// Returns `true` if anything changed and the file should be saved.
    pub(crate) fn upgrade(&mut self) -> bool {
        if self.version == CONFIG_VERSION {
            return false;
        }
        self.version = CONFIG_VERSION;
        true
    }
}

/// Loads the configuration, falling back to defaults if it is missing or
/// cannot be read.
pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub(crate) fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}
