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

use crate::constants::{LEVEL_NAMES, LEVEL_PROMPTS};
use crate::LogLevel;
use mlog_err::*;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

impl LogLevel {
	/// Every level in ascending order of severity.
	pub const ALL: [LogLevel; 7] = [
		LogLevel::Trace,
		LogLevel::Debug,
		LogLevel::Info,
		LogLevel::Warn,
		LogLevel::Error,
		LogLevel::Dot,
		LogLevel::Fatal,
	];

	/// The prompt prefixed to every line logged at this level, for example `"[INFO ]\t"`.
	pub fn prompt(&self) -> &'static str {
		LEVEL_PROMPTS[*self as usize]
	}

	/// The canonical lowercase name of this level, for example `"info"`. The name is also
	/// used for the level's log file.
	pub fn name(&self) -> &'static str {
		LEVEL_NAMES[*self as usize]
	}

	/// Look up a level by name, ignoring ASCII case. Returns [`None`] for unrecognized names.
	pub fn from_name(name: &str) -> Option<LogLevel> {
		Self::ALL
			.iter()
			.find(|level| level.name().eq_ignore_ascii_case(name))
			.copied()
	}

	// inverse of `level as u8`. Only values stored from a LogLevel are ever passed in.
	pub(crate) fn from_u8(v: u8) -> LogLevel {
		match v {
			0 => LogLevel::Trace,
			1 => LogLevel::Debug,
			2 => LogLevel::Info,
			3 => LogLevel::Warn,
			4 => LogLevel::Error,
			5 => LogLevel::Dot,
			_ => LogLevel::Fatal,
		}
	}
}

impl Display for LogLevel {
	fn fmt(&self, w: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(w, "{}", self.name())
	}
}

impl FromStr for LogLevel {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match LogLevel::from_name(s) {
			Some(level) => Ok(level),
			None => Err(err!(ErrKind::IllegalArgument, "unknown log level '{}'", s)),
		}
	}
}
