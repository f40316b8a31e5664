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

#[cfg(test)]
mod test {
	use crate::{err, map_err, ErrKind, Error, ErrorKind};
	use std::fs::File;
	use std::sync::{Arc, Mutex, RwLock};

	fn test_kind(k: ErrKind, s: &str, error: Error) -> Result<(), Error> {
		let err: Error = err!(k, s);
		assert_eq!(error.kind(), err.kind());
		Ok(())
	}

	#[test]
	fn test_ekinds() -> Result<(), Error> {
		let s = "s";
		let ss = "s".to_string();

		test_kind(ErrKind::IO, s, ErrorKind::IO(ss.clone()).into())?;
		test_kind(ErrKind::Log, s, ErrorKind::Log(ss.clone()).into())?;
		test_kind(ErrKind::Utf8, s, ErrorKind::Utf8(ss.clone()).into())?;
		test_kind(
			ErrKind::Configuration,
			s,
			ErrorKind::Configuration(ss.clone()).into(),
		)?;
		test_kind(ErrKind::Poison, s, ErrorKind::Poison(ss.clone()).into())?;
		test_kind(
			ErrKind::IllegalArgument,
			s,
			ErrorKind::IllegalArgument(ss.clone()).into(),
		)?;
		test_kind(
			ErrKind::IllegalState,
			s,
			ErrorKind::IllegalState(ss.clone()).into(),
		)?;
		test_kind(ErrKind::Misc, s, ErrorKind::Misc(ss.clone()).into())?;
		test_kind(ErrKind::Test, s, ErrorKind::Test(ss.clone()).into())?;

		Ok(())
	}

	#[test]
	fn test_map_err() -> Result<(), Error> {
		let res = map_err!(File::open("/path/to/nothing"), ErrKind::Log, "another msg");
		assert!(matches!(res.as_ref().unwrap_err().kind(), ErrorKind::Log(_)));
		assert!(res.unwrap_err().inner().contains("another msg"));

		let res = map_err!(File::open("/path/to/nothing"), ErrKind::IO);
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::IO(_)));

		let res: Result<u32, _> = "abc".parse::<u32>();
		let res = map_err!(res, ErrKind::Configuration, "level");
		assert!(matches!(
			res.unwrap_err().kind(),
			ErrorKind::Configuration(_)
		));

		Ok(())
	}

	fn open_missing() -> Result<File, Error> {
		Ok(File::open("/no/path/here")?)
	}

	#[allow(invalid_from_utf8)]
	fn get_utf8() -> Result<String, Error> {
		Ok(std::str::from_utf8(&[0xC0])?.to_string())
	}

	#[test]
	fn test_conversions() -> Result<(), Error> {
		let e = open_missing().unwrap_err();
		assert!(matches!(e.kind(), ErrorKind::IO(_)));
		assert!(e.to_string().starts_with("IO Error: "));
		assert!(e.cause().is_none());
		assert!(e.backtrace().is_some());

		let e = get_utf8().unwrap_err();
		assert!(matches!(e.kind(), ErrorKind::Utf8(_)));

		let e: Error = String::from_utf8(vec![0, 255]).unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::Utf8(_)));

		let e: Error = "x".parse::<u8>().unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::Misc(_)));

		let e: Error = std::fmt::Error.into();
		assert!(matches!(e.kind(), ErrorKind::IllegalArgument(_)));

		Ok(())
	}

	#[test]
	fn test_poison() -> Result<(), Error> {
		let mutex = Arc::new(Mutex::new(0));
		let mutex_clone = mutex.clone();
		let lock = Arc::new(RwLock::new(0));
		let lock_clone = lock.clone();
		let _ = std::thread::spawn(move || -> Result<u32, Error> {
			let _mutex = mutex_clone.lock();
			let _x = lock.write();
			let y: Option<u32> = None;
			Ok(y.unwrap())
		})
		.join();

		let e: Error = lock_clone.write().unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::Poison(_)));
		let e: Error = lock_clone.read().unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::Poison(_)));
		let e: Error = mutex.lock().unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::Poison(_)));

		let x = err!(ErrKind::Poison, "");
		let y = err!(ErrKind::IllegalArgument, "");
		let z = err!(ErrKind::Poison, "");

		assert_ne!(x, y);
		assert_eq!(x, z);

		Ok(())
	}

	#[test]
	fn test_param() -> Result<(), Error> {
		let e = err!(ErrKind::Misc, "this is a test {} {}", 1, 2);
		let s = "Miscellaneous Error: this is a test 1 2".to_string();
		assert_eq!(&(e.to_string())[0..s.len()], &s[..]);
		assert_eq!(e.inner(), s);
		Ok(())
	}
}
