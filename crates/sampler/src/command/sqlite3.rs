// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	ffi::OsString,
	fs::File,
	path::{Path, PathBuf},
	process::{Command, Stdio},
};

use compdiag_type::{Dialect, Result, TableName};
use tracing::instrument;

use super::SamplerConfig;
use crate::{RowSampler, SampleError, SampleOutcome};

pub const DEFAULT_SQLITE3: &str = "sqlite3";

/// Samples a local SQLite file through the `sqlite3` shell in list mode,
/// which writes rows the same way `vsql -At` does.
#[derive(Debug, Clone)]
pub struct Sqlite3Sampler {
	database: PathBuf,
	config: SamplerConfig,
}

impl Sqlite3Sampler {
	pub fn new(database: impl Into<PathBuf>) -> Self {
		Self::with_config(database, SamplerConfig::sqlite3())
	}

	pub fn with_config(database: impl Into<PathBuf>, config: SamplerConfig) -> Self {
		Self {
			database: database.into(),
			config,
		}
	}

	pub fn program(&self) -> &Path {
		&self.config.program
	}

	pub fn args(&self, table: &TableName) -> Vec<OsString> {
		vec![
			"-list".into(),
			"-noheader".into(),
			self.database.as_os_str().to_os_string(),
			self.config.query.render(Dialect::Sqlite, table).into(),
		]
	}
}

impl RowSampler for Sqlite3Sampler {
	#[instrument(name = "sampler::sqlite3", level = "debug", skip(self, output))]
	fn sample(&mut self, table: &TableName, output: &Path) -> Result<SampleOutcome> {
		let stdout = File::create(output).map_err(|source| SampleError::CreateScratch {
			path: output.to_path_buf(),
			source,
		})?;

		let mut command = Command::new(self.program());
		command.args(self.args(table)).stdin(Stdio::null()).stdout(stdout);
		super::run(self.program(), command)
	}
}
