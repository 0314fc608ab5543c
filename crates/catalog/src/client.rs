// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use compdiag_type::Dialect;

use crate::{CatalogError, Result};

/// Statement parameter or result cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Null,
	Int(i64),
	Float(f64),
	Text(String),
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(v)
	}
}

/// One result row. Getters convert between the representations drivers
/// hand back: ODBC returns every cell as text, SQLite returns native types.
#[derive(Debug, Clone, PartialEq)]
pub struct Row(pub Vec<Value>);

impl Row {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn cell(&self, idx: usize) -> Result<&Value> {
		self.0.get(idx).ok_or_else(|| {
			CatalogError::UnexpectedValue {
				column: idx,
				value: format!("row has only {} columns", self.0.len()),
			}
			.into()
		})
	}

	pub fn get_opt_i64(&self, idx: usize) -> Result<Option<i64>> {
		match self.cell(idx)? {
			Value::Null => Ok(None),
			Value::Int(v) => Ok(Some(*v)),
			Value::Float(v) if v.fract() == 0.0 => Ok(Some(*v as i64)),
			Value::Text(s) => match s.trim().parse::<i64>() {
				Ok(v) => Ok(Some(v)),
				Err(_) => Err(unexpected(idx, s)),
			},
			other => Err(unexpected(idx, &format!("{other:?}"))),
		}
	}

	pub fn get_i64(&self, idx: usize) -> Result<i64> {
		self.get_opt_i64(idx)?.ok_or_else(|| unexpected(idx, "NULL"))
	}

	pub fn get_opt_f64(&self, idx: usize) -> Result<Option<f64>> {
		match self.cell(idx)? {
			Value::Null => Ok(None),
			Value::Int(v) => Ok(Some(*v as f64)),
			Value::Float(v) => Ok(Some(*v)),
			Value::Text(s) => match s.trim().parse::<f64>() {
				Ok(v) => Ok(Some(v)),
				Err(_) => Err(unexpected(idx, s)),
			},
		}
	}

	pub fn get_f64(&self, idx: usize) -> Result<f64> {
		self.get_opt_f64(idx)?.ok_or_else(|| unexpected(idx, "NULL"))
	}

	pub fn get_opt_text(&self, idx: usize) -> Result<Option<String>> {
		match self.cell(idx)? {
			Value::Null => Ok(None),
			Value::Int(v) => Ok(Some(v.to_string())),
			Value::Float(v) => Ok(Some(v.to_string())),
			Value::Text(s) => Ok(Some(s.clone())),
		}
	}

	pub fn get_text(&self, idx: usize) -> Result<String> {
		self.get_opt_text(idx)?.ok_or_else(|| unexpected(idx, "NULL"))
	}
}

fn unexpected(column: usize, value: &str) -> compdiag_type::Error {
	CatalogError::UnexpectedValue {
		column,
		value: value.to_string(),
	}
	.into()
}

/// Connection to the database catalog.
///
/// Implementations execute one statement at a time; statements are prepared,
/// run and dropped inside each call. Outside of [`begin`](Self::begin) /
/// [`commit`](Self::commit) every statement commits on its own.
pub trait CatalogClient {
	fn dialect(&self) -> Dialect;

	/// Whether a table or view with this name exists.
	fn object_exists(&mut self, name: &str) -> Result<bool>;

	/// Runs a statement, returning the number of affected rows.
	fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64>;

	/// Runs a query and collects all rows.
	fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>>;

	fn begin(&mut self) -> Result<()>;

	fn commit(&mut self) -> Result<()>;

	fn rollback(&mut self) -> Result<()>;
}

impl<C: CatalogClient + ?Sized> CatalogClient for Box<C> {
	fn dialect(&self) -> Dialect {
		(**self).dialect()
	}

	fn object_exists(&mut self, name: &str) -> Result<bool> {
		(**self).object_exists(name)
	}

	fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
		(**self).execute(sql, params)
	}

	fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
		(**self).query(sql, params)
	}

	fn begin(&mut self) -> Result<()> {
		(**self).begin()
	}

	fn commit(&mut self) -> Result<()> {
		(**self).commit()
	}

	fn rollback(&mut self) -> Result<()> {
		(**self).rollback()
	}
}

/// Runs `f` inside a transaction, committing on success and rolling back on
/// error.
pub(crate) fn in_transaction<C, T, F>(client: &mut C, f: F) -> Result<T>
where
	C: CatalogClient + ?Sized,
	F: FnOnce(&mut C) -> Result<T>,
{
	client.begin()?;
	match f(client) {
		Ok(value) => {
			client.commit()?;
			Ok(value)
		}
		Err(err) => {
			if let Err(rollback) = client.rollback() {
				tracing::warn!(err = %rollback, "rollback failed");
			}
			Err(err)
		}
	}
}
