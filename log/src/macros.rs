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

/// Initialize the global logger at the specified threshold with an optional list of
/// [`crate::ConfigOption`] values. Unspecified options take their defaults: the log directory is
/// `./log`, the file prefix is empty and lines are echoed to standard output.
///
/// If the log directory cannot be created or a log file cannot be opened, a diagnostic is
/// printed to standard error and the process exits with status -1.
/// # Errors
/// [`mlog_err::ErrKind::IllegalState`] - if the global logger was already initialized.
///
/// [`mlog_err::ErrKind::Configuration`] - if an option is specified more than once.
/// # Examples
///```no_run
/// use mlog_err::*;
/// use mlog_log::*;
///
/// fn main() -> Result<(), Error> {
///     log_init!(LogLevel::Debug, LogDir("/var/log/myapp".to_string()), ScreenOut(false))?;
///
///     info!("server started on port {}", 8080)?;
///     trace!("not logged, below the threshold")?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! log_init {
	($level:expr $(, $config:expr)* $(,)?) => {{
		#[allow(unused_imports)]
		use $crate::ConfigOption::*;
		let configs: Vec<$crate::ConfigOption> = vec![$($config),*];
		$crate::GlobalLogFunctions::init($level, configs)
	}};
}

/// Build an independent logger. The returned `Box<dyn Log + Send + Sync>` is not affected by
/// the global logger or its macros. Accepts the same arguments as [`crate::log_init`], but a
/// failure to create the directory or open a file is returned as an error instead of ending
/// the process.
/// # Examples
///```no_run
/// use mlog_err::*;
/// use mlog_log::*;
///
/// fn main() -> Result<(), Error> {
///     let log = logger!(LogLevel::Info, LogDir("./app_log".to_string()), FilePrefix("app".to_string()))?;
///     log.write(LogLevel::Warn, "low disk space\n")?;
///     assert_eq!(log.file_path(LogLevel::Warn).to_str(), Some("./app_log/app_warn.log"));
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! logger {
	($level:expr $(, $config:expr)* $(,)?) => {{
		#[allow(unused_imports)]
		use $crate::ConfigOption::*;
		let configs: Vec<$crate::ConfigOption> = vec![$($config),*];
		$crate::LogBuilder::build_log($level, configs)
	}};
}

/// Log a formatted message at the specified level through the global logger. The arguments
/// after the level are the same as those of [`std::format`]. Returns the number of bytes
/// written, 0 if the level is below the threshold.
///```no_run
/// use mlog_err::*;
/// use mlog_log::*;
///
/// fn main() -> Result<(), Error> {
///     log_init!(LogLevel::Info)?;
///     mlog!(LogLevel::Dot, ".")?;
///     mlog!(LogLevel::Error, "code={}\n", 42)?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! mlog {
	($level:expr, $($arg:tt)+) => {{
		$crate::GlobalLogFunctions::write_format($level, format_args!($($arg)+))
	}};
}

/// Log at [`crate::LogLevel::Trace`] through the global logger. See [`crate::mlog`].
#[macro_export]
macro_rules! trace {
	($($arg:tt)+) => {{
		$crate::mlog!($crate::LogLevel::Trace, $($arg)+)
	}};
}

/// Log at [`crate::LogLevel::Debug`] through the global logger. See [`crate::mlog`].
#[macro_export]
macro_rules! debug {
	($($arg:tt)+) => {{
		$crate::mlog!($crate::LogLevel::Debug, $($arg)+)
	}};
}

/// Log at [`crate::LogLevel::Info`] through the global logger. See [`crate::mlog`].
#[macro_export]
macro_rules! info {
	($($arg:tt)+) => {{
		$crate::mlog!($crate::LogLevel::Info, $($arg)+)
	}};
}

/// Log at [`crate::LogLevel::Warn`] through the global logger. See [`crate::mlog`].
#[macro_export]
macro_rules! warn {
	($($arg:tt)+) => {{
		$crate::mlog!($crate::LogLevel::Warn, $($arg)+)
	}};
}

/// Log at [`crate::LogLevel::Error`] through the global logger. See [`crate::mlog`].
#[macro_export]
macro_rules! error {
	($($arg:tt)+) => {{
		$crate::mlog!($crate::LogLevel::Error, $($arg)+)
	}};
}

/// Log at [`crate::LogLevel::Dot`] through the global logger. See [`crate::mlog`].
#[macro_export]
macro_rules! dot {
	($($arg:tt)+) => {{
		$crate::mlog!($crate::LogLevel::Dot, $($arg)+)
	}};
}

/// Log at [`crate::LogLevel::Fatal`] through the global logger. See [`crate::mlog`].
#[macro_export]
macro_rules! fatal {
	($($arg:tt)+) => {{
		$crate::mlog!($crate::LogLevel::Fatal, $($arg)+)
	}};
}

/// Compose a record at the specified level through the global logger. Each value is appended
/// with [`crate::LogRecord::append`] and the record is written once when the macro's scope
/// ends. Nothing is composed if the level is below the threshold.
///```no_run
/// use mlog_err::*;
/// use mlog_log::*;
///
/// fn main() -> Result<(), Error> {
///     log_init!(LogLevel::Info)?;
///     let used = 90;
///     log_record!(LogLevel::Warn, "disk at ", used, "%\n")?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! log_record {
	($level:expr $(, $value:expr)* $(,)?) => {{
		match $crate::GlobalLogFunctions::record($level) {
			#[allow(unused_mut)]
			Ok(Some(mut record)) => {
				$(
					record.append($value);
				)*
				Ok(())
			}
			Ok(None) => Ok(()),
			Err(e) => Err(e),
		}
	}};
}

/// Rotate the global logger's files. With no argument, today's date is used as the backup
/// suffix. See [`crate::Log::backup_and_switch_log`].
#[macro_export]
macro_rules! log_rotate {
	() => {{
		$crate::GlobalLogFunctions::backup_and_switch_log("")
	}};
	($date:expr) => {{
		$crate::GlobalLogFunctions::backup_and_switch_log($date)
	}};
}

/// Change a configuration option of the global logger. See [`crate::Log::set_config_option`].
///```no_run
/// use mlog_err::*;
/// use mlog_log::*;
///
/// fn main() -> Result<(), Error> {
///     log_init!(LogLevel::Info)?;
///     set_log_option!(ScreenOut(false))?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! set_log_option {
	($option:expr) => {{
		#[allow(unused_imports)]
		use $crate::ConfigOption::*;
		$crate::GlobalLogFunctions::set_config_option($option)
	}};
}
