// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fs::{self, File},
	io::{self, BufReader, Read},
	path::{Path, PathBuf},
};

use compdiag_type::{Result, SampleMeasurement};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::SampleError;

/// Uniquely named file that receives one sample and is removed on drop.
#[derive(Debug)]
pub struct ScratchFile {
	path: PathBuf,
}

impl ScratchFile {
	/// Creates an empty file named `compdiag-<uuid>.tmp` in `dir`.
	pub fn create(dir: &Path) -> Result<Self> {
		let path = dir.join(format!("compdiag-{}.tmp", Uuid::new_v4()));
		File::create_new(&path).map_err(|source| SampleError::CreateScratch {
			path: path.clone(),
			source,
		})?;
		debug!(path = %path.display(), "created scratch file");
		Ok(Self {
			path,
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Byte size and line count of the file. A final line without a newline
	/// still counts. A file the tool removed measures as empty.
	pub fn measure(&self) -> Result<SampleMeasurement> {
		let file = match File::open(&self.path) {
			Ok(file) => file,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				warn!(path = %self.path.display(), "sample output missing, measuring as empty");
				return Ok(SampleMeasurement::default());
			}
			Err(source) => {
				return Err(SampleError::Measure {
					path: self.path.clone(),
					source,
				}
				.into());
			}
		};

		count(file).map_err(|source| {
			SampleError::Measure {
				path: self.path.clone(),
				source,
			}
			.into()
		})
	}
}

fn count(file: File) -> io::Result<SampleMeasurement> {
	let mut reader = BufReader::new(file);
	let mut buf = [0u8; 64 * 1024];
	let mut bytes = 0u64;
	let mut lines = 0u64;
	let mut last = None;

	loop {
		let n = reader.read(&mut buf)?;
		if n == 0 {
			break;
		}
		bytes += n as u64;
		lines += buf[..n].iter().filter(|&&b| b == b'\n').count() as u64;
		last = Some(buf[n - 1]);
	}

	if matches!(last, Some(b) if b != b'\n') {
		lines += 1;
	}

	Ok(SampleMeasurement::new(bytes, lines))
}

impl Drop for ScratchFile {
	fn drop(&mut self) {
		// the tool may have put a directory where the output file was
		let removed = match fs::symlink_metadata(&self.path) {
			Ok(meta) if meta.is_dir() => fs::remove_dir_all(&self.path),
			_ => fs::remove_file(&self.path),
		};
		match removed {
			Ok(()) => debug!(path = %self.path.display(), "removed scratch file"),
			Err(err) if err.kind() == io::ErrorKind::NotFound => {}
			Err(err) => warn!(path = %self.path.display(), error = %err, "cannot remove scratch file"),
		}
	}
}
