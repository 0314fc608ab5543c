// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! ODBC implementation of [`CatalogClient`], used for Vertica.

use std::sync::OnceLock;

use compdiag_type::Dialect;
use odbc_api::{
	Connection, ConnectionOptions, Cursor, Environment, IntoParameter, Nullable, ResultSetMetadata,
	parameter::InputParameter,
};
use tracing::{debug, instrument};

use crate::{CatalogClient, CatalogError, ConnectConfig, Result, Row, Value};

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

fn environment(driver: &str) -> Result<&'static Environment> {
	if let Some(env) = ENVIRONMENT.get() {
		return Ok(env);
	}
	let env = Environment::new().map_err(|e| CatalogError::ConnectionFailed {
		driver: driver.to_string(),
		message: format!("cannot allocate ODBC environment: {}", e),
	})?;
	Ok(ENVIRONMENT.get_or_init(|| env))
}

pub struct OdbcCatalog {
	conn: Connection<'static>,
}

impl OdbcCatalog {
	pub fn connect(config: &ConnectConfig) -> Result<Self> {
		let env = environment(&config.driver)?;
		let conn = env
			.connect_with_connection_string(&config.connection_string(), ConnectionOptions::default())
			.map_err(|e| CatalogError::ConnectionFailed {
				driver: config.driver.clone(),
				message: e.to_string(),
			})?;
		Ok(Self {
			conn,
		})
	}
}

fn parameters(params: &[Value]) -> Vec<Box<dyn InputParameter>> {
	params.iter()
		.map(|param| -> Box<dyn InputParameter> {
			match param {
				Value::Null => Box::new(Nullable::<i64>::null()),
				Value::Int(v) => Box::new(*v),
				Value::Float(v) => Box::new(*v),
				Value::Text(s) => Box::new(s.clone().into_parameter()),
			}
		})
		.collect()
}

fn statement_failed(sql: &str, err: odbc_api::Error) -> compdiag_type::Error {
	CatalogError::Statement {
		statement: sql.to_string(),
		message: err.to_string(),
	}
	.into()
}

fn transaction_failed(action: &'static str, err: odbc_api::Error) -> compdiag_type::Error {
	CatalogError::Transaction {
		action,
		message: err.to_string(),
	}
	.into()
}

impl CatalogClient for OdbcCatalog {
	fn dialect(&self) -> Dialect {
		Dialect::Vertica
	}

	#[instrument(name = "catalog::odbc::exists", level = "trace", skip(self), ret)]
	fn object_exists(&mut self, name: &str) -> Result<bool> {
		let lookup = |err: odbc_api::Error| -> compdiag_type::Error {
			CatalogError::MetadataLookup {
				object: name.to_string(),
				message: err.to_string(),
			}
			.into()
		};

		let mut cursor = self.conn.tables("", "", name, "").map_err(lookup)?;
		let found = cursor.next_row().map_err(lookup)?.is_some();
		Ok(found)
	}

	#[instrument(name = "catalog::odbc::execute", level = "trace", skip(self, sql, params), fields(params = params.len()))]
	fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
		debug!(sql, "execute");
		let params = parameters(params);
		let mut statement = self.conn.preallocate().map_err(|e| statement_failed(sql, e))?;
		drop(statement.execute(sql, params.as_slice()).map_err(|e| statement_failed(sql, e))?);
		let affected = statement.row_count().map_err(|e| statement_failed(sql, e))?;
		Ok(affected.unwrap_or(0) as u64)
	}

	#[instrument(name = "catalog::odbc::query", level = "trace", skip(self, sql, params), fields(params = params.len()))]
	fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
		debug!(sql, "query");
		let params = parameters(params);
		let mut statement = self.conn.preallocate().map_err(|e| statement_failed(sql, e))?;

		let mut rows = Vec::new();
		if let Some(mut cursor) = statement.execute(sql, params.as_slice()).map_err(|e| statement_failed(sql, e))? {
			let columns = cursor.num_result_cols().map_err(|e| statement_failed(sql, e))? as u16;
			let mut buf = Vec::new();
			while let Some(mut row) = cursor.next_row().map_err(|e| statement_failed(sql, e))? {
				let mut values = Vec::with_capacity(columns as usize);
				for col in 1..=columns {
					buf.clear();
					let present = row.get_text(col, &mut buf).map_err(|e| statement_failed(sql, e))?;
					values.push(if present {
						Value::Text(String::from_utf8_lossy(&buf).into_owned())
					} else {
						Value::Null
					});
				}
				rows.push(Row(values));
			}
		}
		Ok(rows)
	}

	fn begin(&mut self) -> Result<()> {
		self.conn.set_autocommit(false).map_err(|e| transaction_failed("begin", e))
	}

	fn commit(&mut self) -> Result<()> {
		self.conn.commit().map_err(|e| transaction_failed("commit", e))?;
		self.conn.set_autocommit(true).map_err(|e| transaction_failed("commit", e))
	}

	fn rollback(&mut self) -> Result<()> {
		self.conn.rollback().map_err(|e| transaction_failed("rollback", e))?;
		self.conn.set_autocommit(true).map_err(|e| transaction_failed("rollback", e))
	}
}
