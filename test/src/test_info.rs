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

use crate::types::TestInfoImpl;
use crate::{TestBuilder, TestInfo};
use mlog_deps::backtrace;
use mlog_err::Error;
use std::fs::{create_dir_all, remove_dir_all};

impl TestBuilder {
	/// Build a [`crate::TestInfo`] whose directory is named after the calling function.
	pub fn build_test_info(preserve: bool) -> Result<impl TestInfo, Error> {
		TestInfoImpl::new(preserve)
	}
}

impl TestInfo for TestInfoImpl {
	fn directory(&self) -> &String {
		&self.directory
	}
}

impl TestInfoImpl {
	pub(crate) fn new(preserve: bool) -> Result<Self, Error> {
		let mut directory = String::new();
		backtrace::trace(|frame| {
			backtrace::resolve_frame(frame, |symbol| {
				if let Some(name) = symbol.name() {
					directory = name.to_string();
				}
			});
			// keep walking until we leave backtrace and this crate's builder frames.
			directory.starts_with("backtrace")
				|| directory.contains("mlog_test::types::TestInfoImpl")
				|| directory.contains("mlog_test::public::TestBuilder")
				|| directory.is_empty()
		});

		let directory = directory.replace("::", "_");
		let directory: String = directory
			.chars()
			.map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
			.collect();
		let directory = format!(".{}.mlog", directory);

		// remove the directory if it existed from a previous failed run
		let _ = remove_dir_all(&directory);
		create_dir_all(&directory)?;

		Ok(Self {
			directory,
			preserve,
		})
	}
}

impl Drop for TestInfoImpl {
	fn drop(&mut self) {
		// if we're not preserving the directory, delete it on drop.
		if !self.preserve {
			let _ = remove_dir_all(&self.directory);
		}
	}
}
