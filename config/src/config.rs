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

use crate::types::ConfigImpl;
use crate::{Config, ConfigOption, ConfigOption::*, ConfigOptionName as CN};
use mlog_err::*;
use std::collections::{HashMap, HashSet};

macro_rules! cc {
	($self:expr, $set:expr, $specified:expr, $option_name:expr) => {{
		let config_option_name = $option_name;
		let i = $option_name as usize;
		$self.check_set(&$set, &config_option_name)?;
		$self.check_index(i, $specified, format!("{:?}", config_option_name))?;
	}};
}

impl Config for ConfigImpl {
	fn get(&self, name: &CN) -> Option<ConfigOption> {
		self.hash.get(name).cloned()
	}

	fn get_or_bool(&self, name: &CN, default: bool) -> bool {
		match self.get(name) {
			Some(ConfigOption::ScreenOut(v)) => v,
			Some(ConfigOption::SyncEachWrite(v)) => v,
			_ => default,
		}
	}

	fn get_or_string(&self, name: &CN, default: String) -> String {
		match self.get(name) {
			Some(ConfigOption::LogDir(v)) => v,
			Some(ConfigOption::FilePrefix(v)) => v,
			_ => default,
		}
	}

	fn check_config(&self, allowed: Vec<CN>) -> Result<(), Error> {
		self.check_config_impl(allowed)
	}
}

impl ConfigImpl {
	// create a new config based on the specified input.
	pub(crate) fn new(configs: Vec<ConfigOption>) -> Self {
		// the hashmap allows the configs to be looked up later.
		let mut hash = HashMap::new();
		for config in &configs {
			let _ = match config {
				LogDir(_) => hash.insert(CN::LogDir, config.clone()),
				FilePrefix(_) => hash.insert(CN::FilePrefix, config.clone()),
				ScreenOut(_) => hash.insert(CN::ScreenOut, config.clone()),
				SyncEachWrite(_) => hash.insert(CN::SyncEachWrite, config.clone()),
			};
		}
		Self { configs, hash }
	}

	// check the config for duplicates and for options that are not allowed.
	pub(crate) fn check_config_impl(&self, allowed: Vec<CN>) -> Result<(), Error> {
		let mut t = HashSet::new();
		let mut s = vec![];
		for a in &allowed {
			t.insert(a);
		}

		for v in &self.configs {
			match v {
				LogDir(_) => cc!(self, t, &mut s, CN::LogDir),
				FilePrefix(_) => cc!(self, t, &mut s, CN::FilePrefix),
				ScreenOut(_) => cc!(self, t, &mut s, CN::ScreenOut),
				SyncEachWrite(_) => cc!(self, t, &mut s, CN::SyncEachWrite),
			}
		}

		Ok(())
	}

	// returns an error if the option is not in the allowed set
	fn check_set(&self, set: &HashSet<&CN>, option: &CN) -> Result<(), Error> {
		if set.contains(option) {
			Ok(())
		} else {
			Err(err!(ErrKind::Configuration, "{:?} is not allowed", option))
		}
	}

	// this checks for duplicates
	fn check_index(&self, i: usize, specified: &mut Vec<bool>, name: String) -> Result<(), Error> {
		if specified.len() <= i {
			specified.resize(i + 1, false);
		}

		if specified[i] {
			Err(err!(
				ErrKind::Configuration,
				"{} was specified more than once",
				name
			))
		} else {
			specified[i] = true;
			Ok(())
		}
	}
}
