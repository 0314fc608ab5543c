// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Pending rows of `diag_compression` and their write-back.

use compdiag_type::{CompressionRow, CompressionUpdate, PendingTable, ProjectionType, TableName};
use tracing::{debug, instrument, warn};

use crate::{CatalogClient, CatalogError, Result, Row, Value, client::in_transaction, sql};

/// Rows whose sample columns are still NULL.
#[instrument(name = "catalog::stats::pending", level = "debug", skip(client))]
pub fn pending_tables<C: CatalogClient + ?Sized>(client: &mut C) -> Result<Vec<PendingTable>> {
	let rows = client.query(sql::select_pending(), &[])?;

	let mut result = Vec::with_capacity(rows.len());
	for row in &rows {
		let table = TableName::new(row.get_text(0)?)?;
		// a NULL rowsize can only come from a hand written row
		let stored_rowsize = match row.get_opt_f64(1)? {
			Some(rowsize) => rowsize,
			None => {
				warn!(%table, "pending row without stored rowsize");
				0.0
			}
		};
		result.push(PendingTable {
			table,
			stored_rowsize,
		});
	}

	debug!(pending = result.len(), "pending tables");
	Ok(result)
}

/// Writes the sample results into the pending rows of `table` and commits.
/// Returns the number of rows updated; rows already sampled never match.
#[instrument(name = "catalog::stats::update", level = "debug", skip(client, update), fields(
	sample_bytes = update.sample_bytes,
	sample_rows = update.sample_rows,
	compression = update.compression
))]
pub fn update_stats<C: CatalogClient + ?Sized>(
	client: &mut C,
	table: &TableName,
	update: &CompressionUpdate,
) -> Result<u64> {
	let params = [
		Value::Int(to_i64("sample_bytes", update.sample_bytes)?),
		Value::Int(to_i64("sample_rows", update.sample_rows)?),
		Value::Float(update.sample_rowsize),
		Value::Float(update.compression),
		Value::from(table.as_str()),
	];

	in_transaction(client, |client| client.execute(sql::update_sample(), &params))
}

/// All rows recorded for `table`, oldest first.
pub fn rows_for_table<C: CatalogClient + ?Sized>(client: &mut C, table: &TableName) -> Result<Vec<CompressionRow>> {
	let rows = client.query(sql::select_rows_for_table(), &[Value::from(table.as_str())])?;
	rows.iter().map(compression_row).collect()
}

fn compression_row(row: &Row) -> Result<CompressionRow> {
	Ok(CompressionRow {
		table: TableName::new(row.get_text(0)?)?,
		stored_bytes: row.get_i64(1)?,
		stored_rows: row.get_i64(2)?,
		stored_rowsize: row.get_f64(3)?,
		projection_count: row.get_i64(4)?,
		projection_type: ProjectionType::parse(&row.get_text(5)?)?,
		sample_bytes: row.get_opt_i64(6)?,
		sample_rows: row.get_opt_i64(7)?,
		sample_rowsize: row.get_opt_f64(8)?,
		compression: row.get_opt_f64(9)?,
		diag_date: row.get_opt_text(10)?,
	})
}

fn to_i64(column: &'static str, value: u64) -> Result<i64> {
	i64::try_from(value).map_err(|_| {
		CatalogError::OutOfRange {
			column,
			value,
		}
		.into()
	})
}
