// Copyright (c) 2023-2024, The BitcoinMW Developers
// Some code and concepts from:
// * Grin: https://github.com/mimblewimble/grin
// * Arti: https://gitlab.torproject.org/tpo/core/arti
// * BitcoinMW: https://github.com/bitcoinmw/bitcoinmw
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::LogState;
use mlog_conf::{ConfigOption, ConfigOptionName};
use mlog_err::*;
use std::fmt::Arguments;
use std::path::PathBuf;
use std::sync::Arc;

/// The seven severity levels in ascending order. A line is logged if its level is equal to or
/// greater than the threshold of the logger. Each level is routed to its own log file.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug)]
pub enum LogLevel {
	/// Very fine grained information that is only of interest while debugging
	Trace,
	/// Debugging information
	Debug,
	/// Standard information
	Info,
	/// Something the user should be aware of, although it may not be an error
	Warn,
	/// Error that the user must be aware of
	Error,
	/// Out of band marker records (for instance statistics "dots") kept in their own file
	Dot,
	/// Fatal error that usually causes the application to be unusable
	Fatal,
}

/// Builder used to build [`crate::Log`] implementations.
pub struct LogBuilder {}

/// The [`crate::Log`] trait is the interface to a level based logger. A logger owns one
/// append-mode file per [`crate::LogLevel`] inside its log directory, named
/// `{prefix_}{level}.log`. Loggers are created either as owned handles via
/// [`crate::LogBuilder::build_log`] (or the [`crate::logger`] macro), or as the process wide
/// logger via [`crate::log_init`].
///
/// All functions take `&self` so a logger may be shared between threads. Writes only hold the
/// internal file registry lock long enough to look up the level's file handle; the actual i/o
/// happens outside of the lock.
///
///```no_run
/// use mlog_err::*;
/// use mlog_log::*;
///
/// fn main() -> Result<(), Error> {
///     let log = logger!(LogLevel::Info, LogDir("./mylogs".to_string()), ScreenOut(false))?;
///
///     // written to ./mylogs/info.log
///     log.write(LogLevel::Info, "started\n")?;
///
///     // filtered, nothing is written and 0 is returned
///     assert_eq!(log.write(LogLevel::Debug, "not shown\n")?, 0);
///
///     // formatted write to ./mylogs/error.log
///     log.write_format(LogLevel::Error, format_args!("code={}\n", 42))?;
///     Ok(())
/// }
///```
pub trait Log {
	/// Log `line` at the specified `level`. The level's prompt is prefixed to the line; no
	/// newline is added.
	/// # Return
	/// The number of bytes written to the level's file, or 0 if `level` is below the
	/// threshold.
	/// # Errors
	/// [`mlog_err::ErrKind::Log`] - if the file accepted fewer bytes than requested. A
	/// diagnostic is also written to standard error.
	///
	/// [`mlog_err::ErrKind::Poison`] - if the file registry lock is poisoned.
	fn write(&self, level: LogLevel, line: &str) -> Result<usize, Error>;

	/// Same as [`crate::Log::write`] except that the message is formatted from `args`,
	/// usually built with [`std::format_args`]. The formatted message is clipped to 1023
	/// bytes.
	/// # Errors
	/// [`mlog_err::ErrKind::IllegalArgument`] - if formatting fails. Nothing is written.
	///
	/// Otherwise the same as [`crate::Log::write`].
	fn write_format(&self, level: LogLevel, args: Arguments<'_>) -> Result<usize, Error>;

	/// Start a [`crate::LogRecord`] at `level`. Returns [`None`] if `level` is below the
	/// threshold, so that no message composition happens for filtered records. The record is
	/// written once, when it is dropped.
	fn record(&self, level: LogLevel) -> Option<LogRecord>;

	/// Rotate every level's file. Each file is renamed to
	/// `{dir}/backup/{prefix_}{level}.log.{date}` and a fresh file is opened at the original
	/// path. If `date` is empty, today's local date formatted as `YYYYMMDD` is used.
	///
	/// Rename failures are ignored. If the fresh file cannot be opened, the level keeps
	/// writing to its previous handle. Threads that are in the middle of a write keep using
	/// the handle they looked up until their write completes.
	/// # Errors
	/// [`mlog_err::ErrKind::Poison`] - if the file registry lock is poisoned.
	fn backup_and_switch_log(&self, date: &str) -> Result<(), Error>;

	/// Set the threshold by name, ignoring case. Recognized names are `trace`, `debug`,
	/// `info`, `warn`, `error`, `dot` and `fatal`. An unrecognized name sets the threshold to
	/// `info` and returns false.
	fn set_log_level(&self, level_str: &str) -> bool;

	/// Set the threshold.
	fn set_level(&self, level: LogLevel);

	/// The current threshold.
	fn level(&self) -> LogLevel;

	/// The canonical name of the current threshold.
	fn get_level_str(&self) -> &'static str;

	/// Whether a line at `level` would currently be logged.
	fn is_enabled(&self, level: LogLevel) -> bool;

	/// The path of the active log file for `level`.
	fn file_path(&self, level: LogLevel) -> PathBuf;

	/// The log directory with any trailing '/' removed.
	fn dir(&self) -> &str;

	/// The file name prefix (without the '_' separator).
	fn prefix(&self) -> &str;

	/// Change a configuration option after the logger was built. Only
	/// [`mlog_conf::ConfigOption::ScreenOut`] and [`mlog_conf::ConfigOption::SyncEachWrite`]
	/// may be changed.
	/// # Errors
	/// [`mlog_err::ErrKind::Configuration`] - for [`mlog_conf::ConfigOption::LogDir`] and
	/// [`mlog_conf::ConfigOption::FilePrefix`].
	fn set_config_option(&self, value: ConfigOption) -> Result<(), Error>;

	/// Return the current value of a configuration option.
	fn get_config_option(&self, option: ConfigOptionName) -> Result<ConfigOption, Error>;
}

/// A line composed in memory and written to its level's file exactly once, when the record is
/// dropped. The record is seeded with the level's prompt when it is created. Values are added
/// with [`crate::LogRecord::append`] or through [`std::fmt::Write`] (the `write!` macro).
///
/// Records are obtained from [`crate::Log::record`], which already applied the threshold, so
/// the threshold is not checked again when the record is written. A record that had nothing
/// appended still writes its prompt.
///
///```no_run
/// use mlog_err::*;
/// use mlog_log::*;
/// use std::fmt::Write;
///
/// fn main() -> Result<(), Error> {
///     let log = logger!(LogLevel::Info, LogDir("./mylogs".to_string()))?;
///     if let Some(mut record) = log.record(LogLevel::Warn) {
///         record.append("disk at ").append(90).append("%");
///         write!(record, " on {}\n", "/dev/sda1")?;
///     } // written to ./mylogs/warn.log here
///     Ok(())
/// }
///```
pub struct LogRecord {
	pub(crate) level: LogLevel,
	pub(crate) buf: String,
	pub(crate) state: Arc<LogState>,
}

/// The process wide logger. Usually accessed through the macros [`crate::log_init`],
/// [`crate::mlog`], [`crate::info`] and friends.
pub struct GlobalLogFunctions {}
