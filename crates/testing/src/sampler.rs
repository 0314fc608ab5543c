// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashMap,
	fs, io,
	path::{Path, PathBuf},
};

use compdiag_sampler::{RowSampler, SampleError, SampleOutcome};
use compdiag_type::{Result, TableName};

/// What the sampler does for one table.
#[derive(Debug, Clone)]
pub enum Script {
	/// Writes `output` and exits with `exit_code`.
	Write {
		output: String,
		exit_code: i32,
	},
	/// Removes the output file, as a tool that failed early might.
	Remove,
	/// Replaces the output file with a directory, so measuring it fails.
	Directory,
	/// Writes `output`, then fails as if the tool could not be started.
	Error {
		output: String,
	},
}

/// [`RowSampler`] that writes canned output instead of running a client.
/// Tables without a script get empty output and exit code 0.
#[derive(Debug, Default)]
pub struct ScriptedSampler {
	scripts: HashMap<String, Script>,
	calls: Vec<TableName>,
	outputs: Vec<PathBuf>,
}

impl ScriptedSampler {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn output(mut self, table: &str, output: impl Into<String>) -> Self {
		self.scripts.insert(
			table.to_string(),
			Script::Write {
				output: output.into(),
				exit_code: 0,
			},
		);
		self
	}

	pub fn failing(mut self, table: &str, output: impl Into<String>, exit_code: i32) -> Self {
		self.scripts.insert(
			table.to_string(),
			Script::Write {
				output: output.into(),
				exit_code,
			},
		);
		self
	}

	pub fn removing(mut self, table: &str) -> Self {
		self.scripts.insert(table.to_string(), Script::Remove);
		self
	}

	pub fn directory(mut self, table: &str) -> Self {
		self.scripts.insert(table.to_string(), Script::Directory);
		self
	}

	pub fn erroring(mut self, table: &str, output: impl Into<String>) -> Self {
		self.scripts.insert(
			table.to_string(),
			Script::Error {
				output: output.into(),
			},
		);
		self
	}

	/// Tables sampled so far, in call order.
	pub fn calls(&self) -> &[TableName] {
		&self.calls
	}

	/// Output paths handed to the sampler, in call order.
	pub fn outputs(&self) -> &[PathBuf] {
		&self.outputs
	}
}

/// `rows` lines of `width` bytes each, newline included.
pub fn lines(rows: usize, width: usize) -> String {
	assert!(width >= 1);
	let mut line = "x".repeat(width - 1);
	line.push('\n');
	line.repeat(rows)
}

impl RowSampler for ScriptedSampler {
	fn sample(&mut self, table: &TableName, output: &Path) -> Result<SampleOutcome> {
		self.calls.push(table.clone());
		self.outputs.push(output.to_path_buf());

		match self.scripts.get(table.as_str()) {
			Some(Script::Write {
				output: content,
				exit_code,
			}) => {
				fs::write(output, content).expect("write scripted output");
				Ok(SampleOutcome {
					exit_code: Some(*exit_code),
				})
			}
			Some(Script::Remove) => {
				fs::remove_file(output).expect("remove scripted output");
				Ok(SampleOutcome {
					exit_code: Some(1),
				})
			}
			Some(Script::Directory) => {
				fs::remove_file(output).expect("remove scripted output");
				fs::create_dir(output).expect("create directory at output");
				Ok(SampleOutcome::success())
			}
			Some(Script::Error {
				output: content,
			}) => {
				fs::write(output, content).expect("write scripted output");
				Err(SampleError::Spawn {
					program: PathBuf::from("scripted"),
					source: io::Error::other("scripted failure"),
				}
				.into())
			}
			None => Ok(SampleOutcome::success()),
		}
	}
}
