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

use crate::constants::THRESHOLD_UNSET;
use crate::types::LogImpl;
use crate::{GlobalLogFunctions, Log, LogLevel, LogRecord};
use mlog_conf::{ConfigOption, ConfigOptionName};
use mlog_deps::lazy_static::lazy_static;
use mlog_err::*;
use std::fmt::Arguments;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, RwLock};

// global logger and its threshold. The threshold is shared with the installed logger so that
// filtered calls never touch the lock.
lazy_static! {
	pub(crate) static ref MLOG_GLOBAL_LOG: RwLock<Option<Arc<dyn Log + Send + Sync>>> =
		RwLock::new(None);
	static ref MLOG_GLOBAL_THRESHOLD: Arc<AtomicU8> = Arc::new(AtomicU8::new(THRESHOLD_UNSET));
}

impl GlobalLogFunctions {
	/// Initialize the global logger. If the log directory cannot be created or a log file cannot
	/// be opened, a diagnostic is printed to standard error and the process exits with status
	/// -1.
	/// # Errors
	/// [`mlog_err::ErrKind::IllegalState`] - if the global logger was already initialized.
	///
	/// [`mlog_err::ErrKind::Configuration`] - if an option is specified more than once.
	pub fn init(level: LogLevel, configs: Vec<ConfigOption>) -> Result<(), Error> {
		let mut log = MLOG_GLOBAL_LOG.write()?;
		if log.is_some() {
			return Err(err!(
				ErrKind::IllegalState,
				"global logger has already been initialized"
			));
		}

		let logger = match LogImpl::with_threshold(level, configs, MLOG_GLOBAL_THRESHOLD.clone()) {
			Ok(logger) => logger,
			Err(e) => match e.kind() {
				ErrorKind::IO(_) => {
					eprintln!("{}:{}, {}", file!(), line!(), e.inner());
					std::process::exit(-1);
				}
				_ => return Err(e),
			},
		};

		*log = Some(Arc::new(logger));
		Ok(())
	}

	/// Whether [`GlobalLogFunctions::init`] has been called.
	pub fn is_init() -> Result<bool, Error> {
		Ok(MLOG_GLOBAL_LOG.read()?.is_some())
	}

	/// Return a shared handle to the global logger.
	/// # Errors
	/// [`mlog_err::ErrKind::IllegalState`] - if the global logger has not been initialized.
	pub fn handle() -> Result<Arc<dyn Log + Send + Sync>, Error> {
		match MLOG_GLOBAL_LOG.read()?.as_ref() {
			Some(log) => Ok(log.clone()),
			None => Err(err!(
				ErrKind::IllegalState,
				"global logger has not been initialized"
			)),
		}
	}

	pub fn write(level: LogLevel, line: &str) -> Result<usize, Error> {
		if Self::filtered(level) {
			return Ok(0);
		}
		Self::handle()?.write(level, line)
	}

	pub fn write_format(level: LogLevel, args: Arguments<'_>) -> Result<usize, Error> {
		if Self::filtered(level) {
			return Ok(0);
		}
		Self::handle()?.write_format(level, args)
	}

	pub fn record(level: LogLevel) -> Result<Option<LogRecord>, Error> {
		if Self::filtered(level) {
			return Ok(None);
		}
		Ok(Self::handle()?.record(level))
	}

	pub fn backup_and_switch_log(date: &str) -> Result<(), Error> {
		Self::handle()?.backup_and_switch_log(date)
	}

	pub fn set_log_level(level_str: &str) -> Result<bool, Error> {
		Ok(Self::handle()?.set_log_level(level_str))
	}

	pub fn set_level(level: LogLevel) -> Result<(), Error> {
		Self::handle()?.set_level(level);
		Ok(())
	}

	pub fn get_level_str() -> Result<&'static str, Error> {
		Ok(Self::handle()?.get_level_str())
	}

	pub fn is_enabled(level: LogLevel) -> Result<bool, Error> {
		if Self::filtered(level) {
			return Ok(false);
		}
		Ok(Self::handle()?.is_enabled(level))
	}

	pub fn set_config_option(value: ConfigOption) -> Result<(), Error> {
		Self::handle()?.set_config_option(value)
	}

	pub fn get_config_option(option: ConfigOptionName) -> Result<ConfigOption, Error> {
		Self::handle()?.get_config_option(option)
	}

	// lock free threshold check. Before init nothing is filtered so that callers get the
	// not initialized error from handle().
	fn filtered(level: LogLevel) -> bool {
		let threshold = MLOG_GLOBAL_THRESHOLD.load(Ordering::Relaxed);
		threshold != THRESHOLD_UNSET && (level as u8) < threshold
	}
}
