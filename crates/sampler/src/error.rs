// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{io, path::PathBuf};

use compdiag_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
	#[error("cannot create scratch file {path}: {source}")]
	CreateScratch {
		path: PathBuf,
		source: io::Error,
	},

	#[error("cannot run {program}: {source}")]
	Spawn {
		program: PathBuf,
		source: io::Error,
	},

	#[error("cannot read sample output {path}: {source}")]
	Measure {
		path: PathBuf,
		source: io::Error,
	},
}

impl IntoDiagnostic for SampleError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SampleError::CreateScratch {
				path,
				source,
			} => Diagnostic {
				code: "SAMPLE_001".to_string(),
				statement: None,
				message: format!("cannot create scratch file {}: {}", path.display(), source),
				label: None,
				help: Some("Make sure the temp directory is writable, or pick another one with --tmpdir"
					.to_string()),
				notes: vec![],
				cause: None,
			},

			SampleError::Spawn {
				program,
				source,
			} => Diagnostic {
				code: "SAMPLE_002".to_string(),
				statement: None,
				message: format!("cannot run sampling tool {}: {}", program.display(), source),
				label: None,
				help: Some("Install the client or point compdiag at it with --vsql / --sqlite3".to_string()),
				notes: vec![],
				cause: None,
			},

			SampleError::Measure {
				path,
				source,
			} => Diagnostic {
				code: "SAMPLE_003".to_string(),
				statement: None,
				message: format!("cannot read sample output {}: {}", path.display(), source),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<SampleError> for Error {
	fn from(err: SampleError) -> Self {
		Error(err.into_diagnostic())
	}
}
