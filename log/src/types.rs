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

use std::fs::File;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU8};
use std::sync::{Arc, RwLock};

// Crate local types

// an open log file. The file is closed when the last Arc referencing it is dropped.
pub(crate) struct LogFile {
	pub(crate) file: File,
	pub(crate) path: PathBuf,
}

// level -> current file, indexed by the level's discriminant. Always holds one entry per level.
pub(crate) struct FileRegistry {
	pub(crate) files: RwLock<Vec<Arc<LogFile>>>,
}

// state shared by a logger and the records it hands out.
pub(crate) struct LogState {
	pub(crate) dir: String,
	pub(crate) prefix: String,
	pub(crate) threshold: Arc<AtomicU8>,
	pub(crate) screen_out: AtomicBool,
	pub(crate) sync_each_write: AtomicBool,
	pub(crate) registry: FileRegistry,
}

pub(crate) struct LogImpl {
	pub(crate) state: Arc<LogState>,
}

// fmt::Write sink that keeps at most `max` bytes and silently drops the rest.
pub(crate) struct BoundedBuffer {
	pub(crate) buf: String,
	pub(crate) max: usize,
}
