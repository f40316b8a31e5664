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

//! The error crate used by the mlog crates. All fallible functions return [`crate::Error`]
//! which wraps an [`crate::ErrorKind`]. Errors are usually created through the [`crate::err`]
//! macro and foreign errors are converted with the [`crate::map_err`] macro or the `?` operator.
//!
//! # Examples
//!
//!```
//! use mlog_err::*;
//!
//! fn check_positive(v: i32) -> Result<i32, Error> {
//!     if v <= 0 {
//!         return Err(err!(ErrKind::IllegalArgument, "expected positive value, found {}", v));
//!     }
//!     Ok(v)
//! }
//!
//! fn main() -> Result<(), Error> {
//!     assert_eq!(check_positive(3)?, 3);
//!
//!     let e = check_positive(-1).unwrap_err();
//!     assert_eq!(e.kind(), ErrorKind::IllegalArgument("expected positive value, found -1".to_string()));
//!
//!     let res = map_err!("x1".parse::<u32>(), ErrKind::Configuration, "bad number");
//!     assert!(matches!(res.unwrap_err().kind(), ErrorKind::Configuration(_)));
//!     Ok(())
//! }
//!```

mod error;
mod macros;
mod public;
mod test;

pub use crate::public::{ErrKind, Error, ErrorKind};
