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

use crate::types::{FileRegistry, LogFile};
use crate::LogLevel;
use mlog_err::*;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

impl LogFile {
	// open (creating if needed) the file at `path` in append mode.
	pub(crate) fn open(path: PathBuf) -> Result<Self, Error> {
		let text = format!("open {} failed", path.display());
		let file = map_err!(
			OpenOptions::new().read(true).append(true).create(true).open(&path),
			ErrKind::IO,
			text
		)?;
		Ok(Self { file, path })
	}

	// a single write call. Returns the number of bytes the OS accepted.
	pub(crate) fn append(&self, bytes: &[u8]) -> Result<usize, Error> {
		Ok((&self.file).write(bytes)?)
	}

	pub(crate) fn sync(&self) -> Result<(), Error> {
		Ok(self.file.sync_data()?)
	}
}

impl FileRegistry {
	pub(crate) fn new(files: Vec<Arc<LogFile>>) -> Result<Self, Error> {
		if files.len() != LogLevel::ALL.len() {
			return Err(err!(
				ErrKind::IllegalArgument,
				"a file registry needs exactly one file per level, found {}",
				files.len()
			));
		}
		Ok(Self {
			files: RwLock::new(files),
		})
	}

	// clone the level's current handle. The read lock is released before returning so the
	// caller's i/o never happens under the lock.
	pub(crate) fn snapshot(&self, level: LogLevel) -> Result<Arc<LogFile>, Error> {
		let files = self.files.read()?;
		Ok(files[level as usize].clone())
	}

	// install a new handle for `level` and return the previous one. Dropping the returned
	// handle outside of the lock closes the file unless a writer still holds a snapshot.
	pub(crate) fn swap(&self, level: LogLevel, file: Arc<LogFile>) -> Result<Arc<LogFile>, Error> {
		let mut files = self.files.write()?;
		Ok(std::mem::replace(&mut files[level as usize], file))
	}
}
