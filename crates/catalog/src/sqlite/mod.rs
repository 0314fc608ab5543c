// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite implementation of [`CatalogClient`].
//!
//! Serves local dry runs against a file that carries a `projection_storage`
//! table shaped like Vertica's, and the test suite.

mod connection;

use std::path::Path;

use compdiag_type::Dialect;
use rusqlite::{
	Connection, ToSql, params_from_iter,
	types::{ToSqlOutput, ValueRef},
};
use tracing::{debug, instrument};

use crate::{CatalogClient, CatalogError, Result, Row, Value};

pub struct SqliteCatalog {
	conn: Connection,
}

impl SqliteCatalog {
	/// Opens an existing database file. The file is never created.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Ok(Self {
			conn: connection::connect(path.as_ref())?,
		})
	}

	/// A fresh in-memory database, used by tests.
	pub fn in_memory() -> Result<Self> {
		Ok(Self {
			conn: connection::connect_in_memory()?,
		})
	}
}

impl ToSql for Value {
	fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
		Ok(match self {
			Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
			Value::Int(v) => ToSqlOutput::from(*v),
			Value::Float(v) => ToSqlOutput::from(*v),
			Value::Text(s) => ToSqlOutput::from(s.as_str()),
		})
	}
}

fn statement_failed(sql: &str, err: rusqlite::Error) -> compdiag_type::Error {
	CatalogError::Statement {
		statement: sql.to_string(),
		message: err.to_string(),
	}
	.into()
}

fn transaction_failed(action: &'static str, err: rusqlite::Error) -> compdiag_type::Error {
	CatalogError::Transaction {
		action,
		message: err.to_string(),
	}
	.into()
}

impl CatalogClient for SqliteCatalog {
	fn dialect(&self) -> Dialect {
		Dialect::Sqlite
	}

	#[instrument(name = "catalog::sqlite::exists", level = "trace", skip(self), ret)]
	fn object_exists(&mut self, name: &str) -> Result<bool> {
		let lookup = |err: rusqlite::Error| -> compdiag_type::Error {
			CatalogError::MetadataLookup {
				object: name.to_string(),
				message: err.to_string(),
			}
			.into()
		};

		let mut stmt = self
			.conn
			.prepare("SELECT 1 FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1")
			.map_err(lookup)?;
		stmt.exists([name]).map_err(lookup)
	}

	#[instrument(name = "catalog::sqlite::execute", level = "trace", skip(self, sql, params), fields(params = params.len()))]
	fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
		debug!(sql, "execute");
		let mut stmt = self.conn.prepare(sql).map_err(|e| statement_failed(sql, e))?;
		let affected = stmt.execute(params_from_iter(params.iter())).map_err(|e| statement_failed(sql, e))?;
		Ok(affected as u64)
	}

	#[instrument(name = "catalog::sqlite::query", level = "trace", skip(self, sql, params), fields(params = params.len()))]
	fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
		debug!(sql, "query");
		let mut stmt = self.conn.prepare(sql).map_err(|e| statement_failed(sql, e))?;
		let columns = stmt.column_count();

		let mapped = stmt
			.query_map(params_from_iter(params.iter()), |row| {
				let mut values = Vec::with_capacity(columns);
				for idx in 0..columns {
					values.push(match row.get_ref(idx)? {
						ValueRef::Null => Value::Null,
						ValueRef::Integer(v) => Value::Int(v),
						ValueRef::Real(v) => Value::Float(v),
						ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
						ValueRef::Blob(b) => Value::Text(String::from_utf8_lossy(b).into_owned()),
					});
				}
				Ok(Row(values))
			})
			.map_err(|e| statement_failed(sql, e))?;

		let rows = mapped.collect::<rusqlite::Result<Vec<_>>>().map_err(|e| statement_failed(sql, e))?;
		Ok(rows)
	}

	fn begin(&mut self) -> Result<()> {
		self.conn.execute_batch("BEGIN").map_err(|e| transaction_failed("begin", e))
	}

	fn commit(&mut self) -> Result<()> {
		self.conn.execute_batch("COMMIT").map_err(|e| transaction_failed("commit", e))
	}

	fn rollback(&mut self) -> Result<()> {
		self.conn.execute_batch("ROLLBACK").map_err(|e| transaction_failed("rollback", e))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_object_exists() {
		let mut catalog = SqliteCatalog::in_memory().unwrap();
		assert!(!catalog.object_exists("t").unwrap());

		catalog.execute("CREATE TABLE t (a INT)", &[]).unwrap();
		catalog.execute("CREATE VIEW v AS SELECT a FROM t", &[]).unwrap();
		assert!(catalog.object_exists("t").unwrap());
		assert!(catalog.object_exists("v").unwrap());
	}

	#[test]
	fn test_roundtrip_values() {
		let mut catalog = SqliteCatalog::in_memory().unwrap();
		catalog.execute("CREATE TABLE t (a INT, b FLOAT, c VARCHAR(10), d INT)", &[]).unwrap();
		let affected = catalog
			.execute(
				"INSERT INTO t VALUES (?, ?, ?, ?)",
				&[Value::Int(1), Value::Float(0.5), Value::from("x"), Value::Null],
			)
			.unwrap();
		assert_eq!(affected, 1);

		let rows = catalog.query("SELECT a, b, c, d FROM t", &[]).unwrap();
		assert_eq!(rows, vec![Row(vec![Value::Int(1), Value::Float(0.5), Value::from("x"), Value::Null])]);
	}

	#[test]
	fn test_rollback_discards() {
		let mut catalog = SqliteCatalog::in_memory().unwrap();
		catalog.execute("CREATE TABLE t (a INT)", &[]).unwrap();

		catalog.begin().unwrap();
		catalog.execute("INSERT INTO t VALUES (1)", &[]).unwrap();
		catalog.rollback().unwrap();

		assert!(catalog.query("SELECT a FROM t", &[]).unwrap().is_empty());
	}

	#[test]
	fn test_statement_error_carries_sql() {
		let mut catalog = SqliteCatalog::in_memory().unwrap();
		let err = catalog.query("SELECT * FROM missing", &[]).unwrap_err();
		assert_eq!(err.code, "CATALOG_001");
		assert_eq!(err.statement.as_deref(), Some("SELECT * FROM missing"));
	}

	#[test]
	fn test_open_missing_file_fails() {
		let err = SqliteCatalog::open("/nonexistent/compdiag/diag.db").err().unwrap();
		assert_eq!(err.code, "CONNECT_001");
	}
}
