// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// SQL flavour spoken by the connected catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
	/// Vertica reached through ODBC.
	Vertica,
	/// A local SQLite file carrying a `projection_storage` table.
	Sqlite,
}

impl Dialect {
	/// Expression yielding the current timestamp.
	pub fn now(&self) -> &'static str {
		match self {
			Dialect::Vertica => "NOW()",
			Dialect::Sqlite => "CURRENT_TIMESTAMP",
		}
	}
}

impl Display for Dialect {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Dialect::Vertica => f.write_str("vertica"),
			Dialect::Sqlite => f.write_str("sqlite"),
		}
	}
}
