// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Samplers that shell out to a database command line client.

mod sqlite3;
mod vsql;

use std::{
	path::{Path, PathBuf},
	process::{Command, ExitStatus},
};

pub use sqlite3::{DEFAULT_SQLITE3, Sqlite3Sampler};
use tracing::debug;
pub use vsql::{DEFAULT_VSQL, VsqlSampler, VsqlTarget};

use crate::{SampleError, SampleOutcome, SampleQuery};

/// Which client binary to run and what to ask it for.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
	pub program: PathBuf,
	pub query: SampleQuery,
}

impl SamplerConfig {
	pub fn vsql() -> Self {
		Self {
			program: PathBuf::from(DEFAULT_VSQL),
			query: SampleQuery::default(),
		}
	}

	pub fn sqlite3() -> Self {
		Self {
			program: PathBuf::from(DEFAULT_SQLITE3),
			query: SampleQuery::default(),
		}
	}

	pub fn program(mut self, program: impl Into<PathBuf>) -> Self {
		self.program = program.into();
		self
	}

	pub fn query(mut self, query: SampleQuery) -> Self {
		self.query = query;
		self
	}
}

impl Default for SamplerConfig {
	fn default() -> Self {
		Self::vsql()
	}
}

/// Runs `command` to completion and turns its status into an outcome.
fn run(program: &Path, mut command: Command) -> compdiag_type::Result<SampleOutcome> {
	let status: ExitStatus = command.status().map_err(|source| SampleError::Spawn {
		program: program.to_path_buf(),
		source,
	})?;
	debug!(program = %program.display(), ?status, "sampling tool finished");
	Ok(SampleOutcome {
		exit_code: status.code(),
	})
}
