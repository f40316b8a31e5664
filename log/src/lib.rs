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

//! A process-local, level-based logger. Each of the seven levels ([`crate::LogLevel`]) is
//! routed to its own append-mode file, `{dir}/{prefix_}{level}.log`, and optionally echoed to
//! standard output. Lines below the logger's threshold are dropped before any formatting or
//! locking happens.
//!
//! A logger can be built as an independent instance with [`crate::logger`] or installed as the
//! process-wide logger with [`crate::log_init`], after which the [`crate::mlog`],
//! [`crate::info`] (and the other per-level macros) and [`crate::log_record`] macros write
//! through it.
//!
//! Rotation ([`crate::Log::backup_and_switch_log`]) moves every file into
//! `{dir}/backup/{prefix_}{level}.log.{date}` and opens a fresh one while other threads keep
//! writing. A thread that looked up a file before the rotation finishes its write to the
//! renamed file.
//!
//! # Examples
//!
//!```
//! use mlog_err::*;
//! use mlog_log::*;
//! use std::fs::read_to_string;
//!
//! fn main() -> Result<(), Error> {
//!     let dir = std::env::temp_dir().join(format!("mlog_doc_{}", std::process::id()));
//!     let dir = dir.to_string_lossy().to_string();
//!     let log = logger!(LogLevel::Info, LogDir(dir.clone()), ScreenOut(false))?;
//!
//!     log.write(LogLevel::Info, "starting\n")?;
//!     log.write_format(LogLevel::Error, format_args!("code={}\n", 42))?;
//!
//!     // below the threshold, nothing is written
//!     assert_eq!(log.write(LogLevel::Debug, "hidden\n")?, 0);
//!
//!     if let Some(mut record) = log.record(LogLevel::Warn) {
//!         record.append("disk at ").append(90).append("%\n");
//!     }
//!
//!     assert_eq!(read_to_string(log.file_path(LogLevel::Error))?, "[ERROR]\tcode=42\n");
//!     assert_eq!(read_to_string(log.file_path(LogLevel::Warn))?, "[WARN ]\tdisk at 90%\n");
//!
//!     std::fs::remove_dir_all(&dir)?;
//!     Ok(())
//! }
//!```

mod constants;
mod global;
mod level;
mod log;
mod macros;
mod public;
mod record;
mod registry;
mod types;

pub use crate::public::{GlobalLogFunctions, Log, LogBuilder, LogLevel, LogRecord};
pub use mlog_conf::{ConfigOption, ConfigOptionName};
pub use ConfigOption::*;
