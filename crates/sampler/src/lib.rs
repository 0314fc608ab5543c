// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Raw size of a random row sample.
//!
//! A [`RowSampler`] writes a sample of a table into a file, one row per line.
//! [`take_sample`] hands it a fresh [`ScratchFile`], measures what was written
//! and removes the file again, whatever happens in between.

mod command;
pub mod error;
mod query;
mod scratch;

use std::path::Path;

use compdiag_type::{Result, SampleMeasurement, TableName};
pub use command::{DEFAULT_SQLITE3, DEFAULT_VSQL, SamplerConfig, Sqlite3Sampler, VsqlSampler, VsqlTarget};
pub use error::SampleError;
pub use query::{DEFAULT_SAMPLE_LIMIT, DEFAULT_SAMPLE_RATE, SampleQuery};
pub use scratch::ScratchFile;
use tracing::{instrument, warn};

/// How the sampling tool exited. The status is reported, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOutcome {
	/// Exit code, `None` when the tool was terminated by a signal.
	pub exit_code: Option<i32>,
}

impl SampleOutcome {
	pub fn success() -> Self {
		Self {
			exit_code: Some(0),
		}
	}

	pub fn is_success(&self) -> bool {
		self.exit_code == Some(0)
	}
}

/// Writes a random sample of `table` into `output`, one row per line.
pub trait RowSampler {
	fn sample(&mut self, table: &TableName, output: &Path) -> Result<SampleOutcome>;
}

impl<S: RowSampler + ?Sized> RowSampler for Box<S> {
	fn sample(&mut self, table: &TableName, output: &Path) -> Result<SampleOutcome> {
		(**self).sample(table, output)
	}
}

/// Samples `table` into a scratch file inside `tmpdir` and measures it.
///
/// The scratch file is removed before this returns, on success and on error.
/// A failing tool is only logged; whatever it left behind is measured.
#[instrument(name = "sampler::take_sample", level = "debug", skip(sampler, tmpdir))]
pub fn take_sample<S: RowSampler + ?Sized>(
	sampler: &mut S,
	tmpdir: &Path,
	table: &TableName,
) -> Result<SampleMeasurement> {
	let scratch = ScratchFile::create(tmpdir)?;

	let outcome = sampler.sample(table, scratch.path())?;
	if !outcome.is_success() {
		warn!(%table, exit_code = ?outcome.exit_code, "sampling tool did not exit cleanly");
	}

	scratch.measure()
}
