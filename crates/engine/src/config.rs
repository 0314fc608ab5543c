// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{env, path::PathBuf};

use compdiag_type::{Result, error::diagnostic::config, return_error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisConfig {
	/// Directory receiving the scratch sample files.
	pub tmpdir: PathBuf,
}

impl DiagnosisConfig {
	pub fn new(tmpdir: impl Into<PathBuf>) -> Self {
		Self {
			tmpdir: tmpdir.into(),
		}
	}

	/// Uses the current working directory for scratch files.
	pub fn current_dir() -> Result<Self> {
		match env::current_dir() {
			Ok(dir) => Ok(Self::new(dir)),
			Err(err) => return_error!(config::working_dir_unavailable(err.to_string())),
		}
	}

	pub fn validate(&self) -> Result<()> {
		if !self.tmpdir.is_dir() {
			return_error!(config::invalid_temp_dir(&self.tmpdir));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::env;

	use super::*;

	#[test]
	fn test_existing_directory_is_valid() {
		assert!(DiagnosisConfig::new(env::temp_dir()).validate().is_ok());
	}

	#[test]
	fn test_missing_directory_is_rejected() {
		let config = DiagnosisConfig::new("/nonexistent/compdiag/tmp");
		let err = config.validate().unwrap_err();
		assert_eq!(err.code(), "CONFIG_001");
		assert_eq!(err.message, "/nonexistent/compdiag/tmp is not a valid directory");
	}

	#[test]
	fn test_file_is_rejected() {
		let file = env::temp_dir().join(format!("compdiag-config-{}.txt", std::process::id()));
		std::fs::write(&file, "x").unwrap();
		let err = DiagnosisConfig::new(&file).validate().unwrap_err();
		std::fs::remove_file(&file).unwrap();
		assert_eq!(err.code(), "CONFIG_001");
	}
}
