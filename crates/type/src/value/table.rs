// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::ValueError;

/// Schema qualified table name as stored in `diag_compression.table_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableName(String);

impl TableName {
	pub fn new(name: impl Into<String>) -> Result<Self, ValueError> {
		let name = name.into();
		if name.trim().is_empty() {
			return Err(ValueError::EmptyTableName);
		}
		Ok(Self(name))
	}

	pub fn qualified(schema: &str, table: &str) -> Self {
		Self(format!("{}.{}", schema, table))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for TableName {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for TableName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_qualified() {
		assert_eq!(TableName::qualified("public", "orders").as_str(), "public.orders");
	}

	#[test]
	fn test_serializes_as_plain_string() {
		let name = TableName::qualified("public", "orders");
		assert_eq!(serde_json::to_string(&name).unwrap(), "\"public.orders\"");
	}

	#[test]
	fn test_empty_rejected() {
		assert_eq!(TableName::new("  "), Err(ValueError::EmptyTableName));
	}
}
