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

use crate::constants::*;
use crate::types::{BoundedBuffer, FileRegistry, LogFile, LogImpl, LogState};
use crate::{Log, LogBuilder, LogLevel, LogRecord};
use mlog_conf::{ConfigBuilder, ConfigOption, ConfigOptionName as CN};
use mlog_deps::chrono::Local;
use mlog_err::*;
use std::fmt::Arguments;
use std::fs::{rename, DirBuilder};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

impl LogBuilder {
	/// Build a logger with the specified threshold and configuration. The log directory is
	/// created (including missing parents) and one file per level is opened in append mode.
	/// # Errors
	/// [`mlog_err::ErrKind::Configuration`] - if an option is specified more than once.
	///
	/// [`mlog_err::ErrKind::IO`] - if the directory cannot be created or a file cannot be
	/// opened.
	pub fn build_log(
		level: LogLevel,
		configs: Vec<ConfigOption>,
	) -> Result<Box<dyn Log + Send + Sync>, Error> {
		Ok(Box::new(LogImpl::new(level, configs)?))
	}
}

impl Log for LogImpl {
	fn write(&self, level: LogLevel, line: &str) -> Result<usize, Error> {
		self.state.write(level, line)
	}

	fn write_format(&self, level: LogLevel, args: Arguments<'_>) -> Result<usize, Error> {
		self.state.write_format(level, args)
	}

	fn record(&self, level: LogLevel) -> Option<LogRecord> {
		if self.state.is_enabled(level) {
			Some(LogRecord::new(level, self.state.clone()))
		} else {
			None
		}
	}

	fn backup_and_switch_log(&self, date: &str) -> Result<(), Error> {
		self.state.backup_and_switch_log(date)
	}

	fn set_log_level(&self, level_str: &str) -> bool {
		match LogLevel::from_name(level_str) {
			Some(level) => {
				self.set_level(level);
				true
			}
			None => {
				self.set_level(LogLevel::Info);
				false
			}
		}
	}

	fn set_level(&self, level: LogLevel) {
		self.state.threshold.store(level as u8, Ordering::Relaxed);
	}

	fn level(&self) -> LogLevel {
		self.state.threshold()
	}

	fn get_level_str(&self) -> &'static str {
		self.state.threshold().name()
	}

	fn is_enabled(&self, level: LogLevel) -> bool {
		self.state.is_enabled(level)
	}

	fn file_path(&self, level: LogLevel) -> PathBuf {
		self.state.file_path(level)
	}

	fn dir(&self) -> &str {
		&self.state.dir
	}

	fn prefix(&self) -> &str {
		&self.state.prefix
	}

	fn set_config_option(&self, value: ConfigOption) -> Result<(), Error> {
		match value {
			ConfigOption::ScreenOut(v) => self.state.screen_out.store(v, Ordering::Relaxed),
			ConfigOption::SyncEachWrite(v) => {
				self.state.sync_each_write.store(v, Ordering::Relaxed)
			}
			ConfigOption::LogDir(_) | ConfigOption::FilePrefix(_) => {
				return Err(err!(
					ErrKind::Configuration,
					"{:?} cannot be changed after the logger has been built",
					value
				));
			}
		}
		Ok(())
	}

	fn get_config_option(&self, option: CN) -> Result<ConfigOption, Error> {
		Ok(match option {
			CN::LogDir => ConfigOption::LogDir(self.state.dir.clone()),
			CN::FilePrefix => ConfigOption::FilePrefix(self.state.prefix.clone()),
			CN::ScreenOut => ConfigOption::ScreenOut(self.state.screen_out.load(Ordering::Relaxed)),
			CN::SyncEachWrite => {
				ConfigOption::SyncEachWrite(self.state.sync_each_write.load(Ordering::Relaxed))
			}
		})
	}
}

impl LogImpl {
	pub(crate) fn new(level: LogLevel, configs: Vec<ConfigOption>) -> Result<Self, Error> {
		Self::with_threshold(level, configs, Arc::new(AtomicU8::new(level as u8)))
	}

	// build a logger whose threshold is stored in `threshold`. The level is only stored once
	// every file is open, so a failed build leaves `threshold` untouched.
	pub(crate) fn with_threshold(
		level: LogLevel,
		configs: Vec<ConfigOption>,
		threshold: Arc<AtomicU8>,
	) -> Result<Self, Error> {
		let config = ConfigBuilder::build_config(configs);
		config.check_config(vec![
			CN::LogDir,
			CN::FilePrefix,
			CN::ScreenOut,
			CN::SyncEachWrite,
		])?;

		let dir = config.get_or_string(&CN::LogDir, DEFAULT_LOG_DIR.to_string());
		let prefix = config.get_or_string(&CN::FilePrefix, DEFAULT_FILE_PREFIX.to_string());
		let screen_out = config.get_or_bool(&CN::ScreenOut, DEFAULT_SCREEN_OUT);
		let sync_each_write = config.get_or_bool(&CN::SyncEachWrite, DEFAULT_SYNC_EACH_WRITE);

		create_path(&dir)?;
		let dir = strip_separator(dir);

		let mut files = vec![];
		for level in LogLevel::ALL {
			let path = PathBuf::from(format!("{}/{}", dir, file_name(&prefix, level)));
			files.push(Arc::new(LogFile::open(path)?));
		}
		let registry = FileRegistry::new(files)?;
		threshold.store(level as u8, Ordering::Relaxed);

		let state = Arc::new(LogState {
			dir,
			prefix,
			threshold,
			screen_out: AtomicBool::new(screen_out),
			sync_each_write: AtomicBool::new(sync_each_write),
			registry,
		});
		Ok(Self { state })
	}
}

impl LogState {
	pub(crate) fn threshold(&self) -> LogLevel {
		LogLevel::from_u8(self.threshold.load(Ordering::Relaxed))
	}

	pub(crate) fn is_enabled(&self, level: LogLevel) -> bool {
		level >= self.threshold()
	}

	pub(crate) fn file_path(&self, level: LogLevel) -> PathBuf {
		PathBuf::from(format!("{}/{}", self.dir, file_name(&self.prefix, level)))
	}

	pub(crate) fn write(&self, level: LogLevel, line: &str) -> Result<usize, Error> {
		if !self.is_enabled(level) {
			return Ok(0);
		}
		let prompt = level.prompt();
		let mut out = String::with_capacity(prompt.len() + line.len());
		out.push_str(prompt);
		out.push_str(line);
		self.emit(level, &out)
	}

	pub(crate) fn write_format(&self, level: LogLevel, args: Arguments<'_>) -> Result<usize, Error> {
		if !self.is_enabled(level) {
			return Ok(0);
		}
		let mut message = BoundedBuffer::new(MAX_FORMAT_LEN - 1);
		if std::fmt::write(&mut message, args).is_err() {
			return Err(err!(
				ErrKind::IllegalArgument,
				"formatting a {} message failed",
				level
			));
		}
		let prompt = level.prompt();
		let mut out = String::with_capacity(prompt.len() + message.buf.len());
		out.push_str(prompt);
		out.push_str(&message.buf);
		self.emit(level, &out)
	}

	// write an already prefixed line to stdout (if enabled) and the level's current file. No
	// threshold check happens here.
	pub(crate) fn emit(&self, level: LogLevel, line: &str) -> Result<usize, Error> {
		let bytes = line.as_bytes();
		if self.screen_out.load(Ordering::Relaxed) {
			let _ = std::io::stdout().write_all(bytes);
		}

		let file = self.registry.snapshot(level)?;
		let written = match file.append(bytes) {
			Ok(written) => written,
			Err(e) => {
				eprintln!("{}:{}, write {} failed", file!(), line!(), level.name());
				return Err(err!(ErrKind::Log, "write {} failed: {}", level.name(), e));
			}
		};

		if cfg!(debug_assertions) && self.sync_each_write.load(Ordering::Relaxed) {
			if let Err(e) = file.sync() {
				eprintln!("{}:{}, sync {} failed: {}", file!(), line!(), level.name(), e);
			}
		}

		if written < bytes.len() {
			eprintln!("{}:{}, write {} failed", file!(), line!(), level.name());
			return Err(err!(
				ErrKind::Log,
				"short write to {}: {} of {} bytes",
				file.path.display(),
				written,
				bytes.len()
			));
		}
		Ok(written)
	}

	pub(crate) fn backup_and_switch_log(&self, date: &str) -> Result<(), Error> {
		let date = if date.is_empty() {
			Local::now().format(DATE_FORMAT).to_string()
		} else {
			date.to_string()
		};

		// a missing backup directory only makes the renames below fail, which is tolerated
		let backup_dir = format!("{}/{}", self.dir, BACKUP_DIR);
		let _ = create_path(&backup_dir);

		for level in LogLevel::ALL {
			let file_name = file_name(&self.prefix, level);
			let file_path = format!("{}/{}", self.dir, file_name);
			let backup_path = format!("{}/{}.{}", backup_dir, file_name, date);
			let _ = rename(&file_path, &backup_path);

			// if the reopen fails the level keeps writing to its renamed file
			let file = match LogFile::open(PathBuf::from(&file_path)) {
				Ok(file) => file,
				Err(_) => continue,
			};

			// the previous handle is closed once the last in-flight writer releases it
			let _previous = self.registry.swap(level, Arc::new(file))?;
		}

		Ok(())
	}
}

impl BoundedBuffer {
	pub(crate) fn new(max: usize) -> Self {
		Self {
			buf: String::new(),
			max,
		}
	}
}

impl std::fmt::Write for BoundedBuffer {
	fn write_str(&mut self, s: &str) -> std::fmt::Result {
		let remaining = self.max.saturating_sub(self.buf.len());
		if s.len() <= remaining {
			self.buf.push_str(s);
		} else {
			// clip at a character boundary, the rest of the message is dropped
			let mut end = remaining;
			while !s.is_char_boundary(end) {
				end -= 1;
			}
			self.buf.push_str(&s[..end]);
		}
		Ok(())
	}
}

// {prefix_}{name}.log
pub(crate) fn file_name(prefix: &str, level: LogLevel) -> String {
	if prefix.is_empty() {
		format!("{}{}", level.name(), LOG_EXTENSION)
	} else {
		format!("{}_{}{}", prefix, level.name(), LOG_EXTENSION)
	}
}

// create `path` and any missing parents. Existing directories are not an error.
pub(crate) fn create_path(path: &str) -> Result<(), Error> {
	let mut builder = DirBuilder::new();
	builder.recursive(true);
	#[cfg(unix)]
	{
		use std::os::unix::fs::DirBuilderExt;
		builder.mode(DIR_MODE);
	}
	let text = format!("create directory {} failed", path);
	map_err!(builder.create(path), ErrKind::IO, text)
}

// remove a single trailing '/'
fn strip_separator(mut dir: String) -> String {
	if dir.ends_with('/') {
		dir.pop();
	}
	dir
}
