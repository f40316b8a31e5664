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

/// Build an [`crate::Error`] of the specified [`crate::ErrKind`] with a message. The message
/// may be a format string followed by its parameters.
#[macro_export]
macro_rules! err {
	($kind:expr, $msg:expr, $($param:tt)*) => {{
		let msg = &format!($msg, $($param)*)[..];
		$crate::err!($kind, msg)
	}};
	($kind:expr, $msg:expr) => {{
		use $crate::{ErrKind, Error, ErrorKind};
		let error: Error = match $kind {
			ErrKind::IO => ErrorKind::IO($msg.to_string()).into(),
			ErrKind::Log => ErrorKind::Log($msg.to_string()).into(),
			ErrKind::Utf8 => ErrorKind::Utf8($msg.to_string()).into(),
			ErrKind::Configuration => ErrorKind::Configuration($msg.to_string()).into(),
			ErrKind::Poison => ErrorKind::Poison($msg.to_string()).into(),
			ErrKind::IllegalArgument => ErrorKind::IllegalArgument($msg.to_string()).into(),
			ErrKind::IllegalState => ErrorKind::IllegalState($msg.to_string()).into(),
			ErrKind::Misc => ErrorKind::Misc($msg.to_string()).into(),
			ErrKind::Test => ErrorKind::Test($msg.to_string()).into(),
		};
		error
	}};
}

/// Map the error of a [`std::result::Result`] into an [`crate::Error`] of the specified
/// [`crate::ErrKind`]. An optional message is prepended to the original error's text.
#[macro_export]
macro_rules! map_err {
	($in_err:expr, $kind:expr) => {{
		$crate::map_err!($in_err, $kind, "")
	}};
	($in_err:expr, $kind:expr, $msg:expr) => {{
		use $crate::{ErrKind, Error, ErrorKind};
		$in_err.map_err(|e| -> Error {
			let text = format!("{}: {}", $msg, e);
			match $kind {
				ErrKind::IO => ErrorKind::IO(text).into(),
				ErrKind::Log => ErrorKind::Log(text).into(),
				ErrKind::Utf8 => ErrorKind::Utf8(text).into(),
				ErrKind::Configuration => ErrorKind::Configuration(text).into(),
				ErrKind::Poison => ErrorKind::Poison(text).into(),
				ErrKind::IllegalArgument => ErrorKind::IllegalArgument(text).into(),
				ErrKind::IllegalState => ErrorKind::IllegalState(text).into(),
				ErrKind::Misc => ErrorKind::Misc(text).into(),
				ErrKind::Test => ErrorKind::Test(text).into(),
			}
		})
	}};
}
