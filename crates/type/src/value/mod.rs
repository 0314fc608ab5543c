// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod dialect;
mod password;
mod projection;
mod table;

pub use dialect::Dialect;
pub use password::Password;
pub use projection::{ProjectionType, REPLICA_MARKER, REPLICA_SUFFIX_LEN, short_projection_name};
pub use table::TableName;

use crate::{Diagnostic, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
	#[error("unknown projection type `{0}`")]
	UnknownProjectionType(String),

	#[error("table name must not be empty")]
	EmptyTableName,
}

impl IntoDiagnostic for ValueError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			ValueError::UnknownProjectionType(value) => Diagnostic {
				code: "VALUE_001".to_string(),
				statement: None,
				message: format!("unknown projection type `{}`", value),
				label: Some("expected one of `S`, `R` or `M`".to_string()),
				help: Some("The proj_type column of diag_compression was written by something other than compdiag"
					.to_string()),
				notes: vec![],
				cause: None,
			},
			ValueError::EmptyTableName => Diagnostic {
				code: "VALUE_002".to_string(),
				statement: None,
				message: "table name must not be empty".to_string(),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}
