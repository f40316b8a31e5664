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

//! Test utilities for the mlog crates. The [`crate::test_info`] macro returns a
//! [`crate::TestInfo`] which owns a scratch directory named after the calling test. The
//! directory is removed when the [`crate::TestInfo`] is dropped unless it was preserved.
//!
//! # Examples
//!
//!```
//! use mlog_err::*;
//! use mlog_test::*;
//! use std::path::PathBuf;
//!
//! fn main() -> Result<(), Error> {
//!     let test_info = test_info!()?;
//!     let mut path = PathBuf::from(test_info.directory());
//!     path.push("data.txt");
//!     std::fs::write(&path, "abc")?;
//!     assert_eq!(std::fs::read_to_string(&path)?, "abc");
//!     Ok(())
//! }
//!```

mod macros;
mod public;
mod test;
mod test_info;
mod types;

pub use crate::public::{TestBuilder, TestInfo};
