// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use compdiag_type::{Diagnostic, Error, IntoDiagnostic, TableName};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("Couldn't connect: {message}")]
	ConnectionFailed {
		driver: String,
		message: String,
	},

	#[error("driver `{driver}` needs the `{feature}` feature")]
	DriverUnavailable {
		driver: String,
		feature: &'static str,
	},

	#[error("statement failed: {message}")]
	Statement {
		statement: String,
		message: String,
	},

	#[error("cannot look up `{object}`: {message}")]
	MetadataLookup {
		object: String,
		message: String,
	},

	#[error("cannot {action} transaction: {message}")]
	Transaction {
		action: &'static str,
		message: String,
	},

	#[error("unexpected value in column {column}: {value}")]
	UnexpectedValue {
		column: usize,
		value: String,
	},

	#[error("{column} value {value} does not fit an INT column")]
	OutOfRange {
		column: &'static str,
		value: u64,
	},

	#[error("division by zero: table {table} has no stored rows")]
	ZeroStoredRows {
		table: TableName,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			CatalogError::ConnectionFailed {
				driver,
				message,
			} => Diagnostic {
				code: "CONNECT_001".to_string(),
				statement: None,
				message: format!("Couldn't connect: {}", message),
				label: Some(format!("using driver `{}`", driver)),
				help: Some("Check host, database name, user and password, and that the ODBC driver is installed"
					.to_string()),
				notes: vec![],
				cause: None,
			},

			CatalogError::DriverUnavailable {
				driver,
				feature,
			} => Diagnostic {
				code: "CONNECT_002".to_string(),
				statement: None,
				message: format!("driver `{}` is not available in this build", driver),
				label: None,
				help: Some(format!("Rebuild compdiag with `--features {}`", feature)),
				notes: vec!["The `SQLite` driver is always available".to_string()],
				cause: None,
			},

			CatalogError::Statement {
				statement,
				message,
			} => Diagnostic {
				code: "CATALOG_001".to_string(),
				statement: Some(statement),
				message: format!("statement failed: {}", message),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},

			CatalogError::MetadataLookup {
				object,
				message,
			} => Diagnostic {
				code: "CATALOG_002".to_string(),
				statement: None,
				message: format!("cannot look up `{}` in the catalog: {}", object, message),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},

			CatalogError::Transaction {
				action,
				message,
			} => Diagnostic {
				code: "CATALOG_003".to_string(),
				statement: None,
				message: format!("cannot {} transaction: {}", action, message),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},

			CatalogError::UnexpectedValue {
				column,
				value,
			} => Diagnostic {
				code: "CATALOG_004".to_string(),
				statement: None,
				message: format!("unexpected value in result column {}: {}", column, value),
				label: None,
				help: Some("The result table may have been altered by hand".to_string()),
				notes: vec![],
				cause: None,
			},

			CatalogError::OutOfRange {
				column,
				value,
			} => Diagnostic {
				code: "CATALOG_005".to_string(),
				statement: None,
				message: format!("{} value {} does not fit an INT column", column, value),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},

			CatalogError::ZeroStoredRows {
				table,
			} => Diagnostic {
				code: "AGGREGATE_001".to_string(),
				statement: None,
				message: format!("division by zero: table `{}` has no stored rows", table),
				label: Some("stored bytes per row is undefined".to_string()),
				help: Some("Remove or populate the empty table, then run compdiag again".to_string()),
				notes: vec!["No rows were inserted into diag_compression".to_string()],
				cause: None,
			},
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error(err.into_diagnostic())
	}
}
