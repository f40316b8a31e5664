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

use mlog_err::Error;
use std::collections::HashMap;

/// A collection of [`crate::ConfigOption`] values which may be queried and validated.
pub trait Config {
	/// return the option with the specified name, if it was specified.
	fn get(&self, name: &ConfigOptionName) -> Option<ConfigOption>;
	/// return the value of a boolean option or `default` if it was not specified.
	fn get_or_bool(&self, name: &ConfigOptionName, default: bool) -> bool;
	/// return the value of a string option or `default` if it was not specified.
	fn get_or_string(&self, name: &ConfigOptionName, default: String) -> String;
	/// check that every specified option is in `allowed` and that no option is specified more
	/// than once.
	fn check_config(&self, allowed: Vec<ConfigOptionName>) -> Result<(), Error>;
}

/// Names of the configuration options. Used to look up a [`crate::ConfigOption`].
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum ConfigOptionName {
	LogDir,
	FilePrefix,
	ScreenOut,
	SyncEachWrite,
}

/// Configuration options with their values.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum ConfigOption {
	/// The directory which holds the log files. It is created if it does not exist.
	LogDir(String),
	/// Prefix of every log file name. When non-empty it is joined to the level name with '_'.
	FilePrefix(String),
	/// Echo every logged line to standard output.
	ScreenOut(bool),
	/// Sync the log file to disk after every write. Only honored in debug builds.
	SyncEachWrite(bool),
}

/// Builder for [`crate::Config`] implementations.
pub struct ConfigBuilder {}

#[derive(Clone, Debug)]
pub(crate) struct ConfigImpl {
	pub(crate) configs: Vec<ConfigOption>,
	pub(crate) hash: HashMap<ConfigOptionName, ConfigOption>,
}
