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

//! # mlog
//!
//! A process-local, level-based logger. Lines are routed by severity to one file per level,
//! optionally echoed to standard output and filtered by a process-wide threshold. The logger
//! supports rotating every file into a dated backup while other threads keep writing.
//!
//! This crate re-exports the public API of its workspace crates:
//!
//! * `mlog_log` - the logging engine, the global logger and its macros.
//! * `mlog_conf` - the configuration options accepted by the logger.
//! * `mlog_err` - the error type returned by every fallible operation.
//!
//! # Examples
//!
//!```no_run
//! use mlog::*;
//!
//! fn main() -> Result<(), Error> {
//!     log_init!(LogLevel::Info, LogDir("./log".to_string()), FilePrefix("node".to_string()))?;
//!
//!     info!("listening on {}\n", "127.0.0.1:3030")?;
//!     log_record!(LogLevel::Warn, "disk at ", 90, "%\n")?;
//!
//!     // moves ./log/node_info.log to ./log/backup/node_info.log.{today} (and so on for
//!     // each level) and continues logging to fresh files
//!     log_rotate!()?;
//!     Ok(())
//! }
//!```
//!
//! Independent loggers are built with [`crate::logger`]:
//!
//!```no_run
//! use mlog::*;
//!
//! fn main() -> Result<(), Error> {
//!     let log = logger!(LogLevel::Debug, LogDir("./audit".to_string()), ScreenOut(false))?;
//!     log.write(LogLevel::Debug, "opened\n")?;
//!     assert!(!log.set_log_level("verbose"));
//!     assert_eq!(log.get_level_str(), "info");
//!     Ok(())
//! }
//!```


pub use mlog_conf::{config, Config, ConfigBuilder};
pub use mlog_err::{err, map_err, ErrKind, Error, ErrorKind};
pub use mlog_log::*;
