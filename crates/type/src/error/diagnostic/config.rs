// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::Path;

use super::Diagnostic;

/// The directory for scratch sample files does not exist or is not a directory
pub fn invalid_temp_dir(path: &Path) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		statement: None,
		message: format!("{} is not a valid directory", path.display()),
		label: None,
		help: Some("Pass an existing, writable directory with --tmpdir".to_string()),
		notes: vec!["Sample output is written there and removed after each table".to_string()],
		cause: None,
	}
}

/// The current working directory could not be determined
pub fn working_dir_unavailable(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_002".to_string(),
		statement: None,
		message: format!("cannot determine the current directory: {}", reason.into()),
		label: None,
		help: Some("Pass the temp directory explicitly with --tmpdir".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// The password could not be read from the terminal
pub fn password_prompt_failed(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_003".to_string(),
		statement: None,
		message: format!("cannot read password: {}", reason.into()),
		label: None,
		help: Some("Run compdiag from an interactive terminal".to_string()),
		notes: vec!["The password is only ever read interactively".to_string()],
		cause: None,
	}
}
