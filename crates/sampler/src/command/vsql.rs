// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	ffi::OsString,
	path::Path,
	process::{Command, Stdio},
};

use compdiag_type::{Dialect, Password, Result, TableName};
use tracing::instrument;

use super::SamplerConfig;
use crate::{RowSampler, SampleOutcome};

pub const DEFAULT_VSQL: &str = "/opt/vertica/bin/vsql";

/// Where vsql connects to.
#[derive(Debug, Clone)]
pub struct VsqlTarget {
	pub host: String,
	pub database: String,
	pub user: String,
	pub password: Password,
}

/// Samples through `vsql -At`: unaligned, tuples only, `|` separated.
#[derive(Debug, Clone)]
pub struct VsqlSampler {
	target: VsqlTarget,
	config: SamplerConfig,
}

impl VsqlSampler {
	pub fn new(target: VsqlTarget) -> Self {
		Self::with_config(target, SamplerConfig::vsql())
	}

	pub fn with_config(target: VsqlTarget, config: SamplerConfig) -> Self {
		Self {
			target,
			config,
		}
	}

	pub fn program(&self) -> &Path {
		&self.config.program
	}

	/// Command line arguments, password included.
	pub fn args(&self, table: &TableName, output: &Path) -> Vec<OsString> {
		vec![
			"-At".into(),
			"-h".into(),
			self.target.host.clone().into(),
			"-d".into(),
			self.target.database.clone().into(),
			"-U".into(),
			self.target.user.clone().into(),
			"-w".into(),
			self.target.password.expose().into(),
			"-o".into(),
			output.as_os_str().to_os_string(),
			"-c".into(),
			self.config.query.render(Dialect::Vertica, table).into(),
		]
	}
}

impl RowSampler for VsqlSampler {
	#[instrument(name = "sampler::vsql", level = "debug", skip(self, output))]
	fn sample(&mut self, table: &TableName, output: &Path) -> Result<SampleOutcome> {
		let mut command = Command::new(self.program());
		command.args(self.args(table, output)).stdin(Stdio::null());
		super::run(self.program(), command)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_program() {
		assert_eq!(sampler().program(), Path::new(DEFAULT_VSQL));
	}

	fn target() -> VsqlTarget {
		VsqlTarget {
			host: "vertica01".to_string(),
			database: "analytics".to_string(),
			user: "dbadmin".to_string(),
			password: Password::new("s3cret"),
		}
	}

	fn sampler() -> VsqlSampler {
		VsqlSampler::new(target())
	}

	#[test]
	fn test_args() {
		let table = TableName::qualified("public", "orders");
		let args: Vec<String> = sampler()
			.args(&table, Path::new("/tmp/out.tmp"))
			.into_iter()
			.map(|a| a.into_string().unwrap())
			.collect();

		assert_eq!(
			args,
			[
				"-At",
				"-h",
				"vertica01",
				"-d",
				"analytics",
				"-U",
				"dbadmin",
				"-w",
				"s3cret",
				"-o",
				"/tmp/out.tmp",
				"-c",
				"SELECT * FROM public.orders WHERE RANDOM() < 0.05 LIMIT 10000000",
			]
		);
	}

	#[test]
	fn test_debug_hides_password() {
		let rendered = format!("{:?}", sampler());
		assert!(!rendered.contains("s3cret"));
	}

	#[test]
	fn test_missing_program_fails_to_spawn() {
		let mut sampler =
			VsqlSampler::with_config(target(), SamplerConfig::vsql().program("/nonexistent/compdiag/vsql"));
		let err = sampler.sample(&TableName::qualified("public", "orders"), Path::new("/tmp/unused.tmp")).unwrap_err();
		assert_eq!(err.code(), "SAMPLE_002");
	}
}
