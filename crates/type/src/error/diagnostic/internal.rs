// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// An invariant inside compdiag itself was violated.
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		statement: None,
		message: reason.into(),
		label: None,
		help: Some(format!(
			"This is an internal error of compdiag {} ({} {}), please report it together with the message above",
			env!("CARGO_PKG_VERSION"),
			std::env::consts::OS,
			std::env::consts::ARCH
		)),
		notes: vec![],
		cause: None,
	}
}
