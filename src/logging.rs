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

//! File based logging.
//!
//! The terminal belongs to the user interface, so log output goes to a
//! rotating set of files in a `logs` directory next to the configuration file.
//! Starting the logger never panics: a failure is returned to the caller, who
//! can carry on without logging.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

use crate::config::CONFIG_NAME;

const LOG_FILE_BASENAME: &str = "eventbook";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts the file logger.
///
/// The returned handle must be kept alive for as long as logging is wanted.
///
/// # Arguments
///
/// * `level` - One of `trace`, `debug`, `info`, `warn` or `error`.
///
/// # Errors
///
/// Returns an error if the level is not recognised, the log directory cannot
/// be determined or created, or the logger backend fails to start.
pub(crate) fn init_logging(level: &str) -> Result<LoggerHandle> {
    let level = normalize_level(level)?;
    let log_dir = log_directory()?;

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let handle = Logger::try_with_str(level)
        .with_context(|| format!("Invalid log level {level}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("Failed to start logger")?;

    info!(
        "event=app_start version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );

    Ok(handle)
}

fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(anyhow!(
            "Unsupported log level {other:?}, expected trace|debug|info|warn|error"
        )),
    }
}

fn log_directory() -> Result<PathBuf> {
    let config_file = confy::get_configuration_file_path(CONFIG_NAME, None)
        .context("Failed to locate configuration directory")?;

    let config_dir = config_file
        .parent()
        .context("Configuration file has no parent directory")?;

    Ok(config_dir.join("logs"))
}
