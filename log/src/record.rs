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
use crate::{LogLevel, LogRecord};
use std::fmt::{Display, Write};
use std::sync::Arc;

impl LogRecord {
	pub(crate) fn new(level: LogLevel, state: Arc<LogState>) -> Self {
		Self {
			level,
			buf: level.prompt().to_string(),
			state,
		}
	}

	/// The level this record is written at.
	pub fn level(&self) -> LogLevel {
		self.level
	}

	/// Append the [`std::fmt::Display`] output of `value` to the record. Calls may be chained.
	/// A value whose formatting fails contributes whatever it rendered before failing.
	pub fn append<T: Display>(&mut self, value: T) -> &mut Self {
		let _ = write!(self.buf, "{}", value);
		self
	}

	/// The content composed so far, including the level's prompt.
	pub fn content(&self) -> &str {
		&self.buf
	}
}

impl Write for LogRecord {
	fn write_str(&mut self, s: &str) -> std::fmt::Result {
		self.buf.push_str(s);
		Ok(())
	}
}

impl Drop for LogRecord {
	fn drop(&mut self) {
		if !self.buf.is_empty() {
			// errors were already reported on stderr by emit
			let _ = self.state.emit(self.level, &self.buf);
		}
	}
}
