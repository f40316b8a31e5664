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

//! Configuration crate for mlog. Configurations are passed around as a list of
//! [`crate::ConfigOption`] values which are collected into a [`crate::Config`] by the
//! [`crate::ConfigBuilder`] or the [`crate::config`] macro. The consumer of a configuration
//! states which options it allows through [`crate::Config::check_config`].
//!
//! # Examples
//!
//!```
//! use mlog_conf::*;
//! use mlog_err::*;
//!
//! fn main() -> Result<(), Error> {
//!     let config = config!(LogDir("./mylogs".to_string()), ScreenOut(false));
//!
//!     config.check_config(vec![
//!         ConfigOptionName::LogDir,
//!         ConfigOptionName::FilePrefix,
//!         ConfigOptionName::ScreenOut,
//!     ])?;
//!
//!     assert_eq!(config.get_or_string(&ConfigOptionName::LogDir, "./log".to_string()), "./mylogs");
//!     assert_eq!(config.get_or_string(&ConfigOptionName::FilePrefix, "".to_string()), "");
//!     assert!(!config.get_or_bool(&ConfigOptionName::ScreenOut, true));
//!     Ok(())
//! }
//!```

mod builder;
mod config;
mod macros;
mod types;

pub use crate::types::{Config, ConfigBuilder, ConfigOption, ConfigOptionName};
pub use crate::ConfigOption::*;
