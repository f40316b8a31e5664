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

// These are local constants used in the logging crate

// display prompt of each level, indexed by the level's discriminant
pub(crate) const LEVEL_PROMPTS: [&str; 7] = [
	"[TRACE]\t",
	"[DEBUG]\t",
	"[INFO ]\t",
	"[WARN ]\t",
	"[ERROR]\t",
	"[ DOT ]\t",
	"[FATAL]\t",
];
// canonical name of each level, indexed by the level's discriminant
pub(crate) const LEVEL_NAMES: [&str; 7] = ["trace", "debug", "info", "warn", "error", "dot", "fatal"];
// size of the buffer formatted messages are rendered into (one byte is reserved, so at most
// MAX_FORMAT_LEN - 1 bytes of a formatted message are kept)
pub(crate) const MAX_FORMAT_LEN: usize = 1024;
// subdirectory of the log directory that receives rotated files
pub(crate) const BACKUP_DIR: &str = "backup";
// extension of every log file
pub(crate) const LOG_EXTENSION: &str = ".log";
// format of the default rotation date
pub(crate) const DATE_FORMAT: &str = "%Y%m%d";
// permissions of created log directories
#[cfg(unix)]
pub(crate) const DIR_MODE: u32 = 0o775;
// defaults used when the corresponding option is not configured
pub(crate) const DEFAULT_LOG_DIR: &str = "./log";
pub(crate) const DEFAULT_FILE_PREFIX: &str = "";
pub(crate) const DEFAULT_SCREEN_OUT: bool = true;
pub(crate) const DEFAULT_SYNC_EACH_WRITE: bool = false;
// value of the global threshold before the global logger is initialized
pub(crate) const THRESHOLD_UNSET: u8 = u8::MAX;
