// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Per table stored footprint, inserted as pending rows.

use compdiag_type::{ProjectionType, TableFootprint, TableName};
use tracing::{debug, info, instrument};

use crate::{CatalogClient, CatalogError, Result, Row, Value, client::in_transaction, sql};

/// Reads the stored footprint of every table from `diag_projections`.
///
/// Bytes per row is a plain division by the stored row count; a table without
/// rows fails the whole aggregation with `AGGREGATE_001`.
#[instrument(name = "catalog::aggregate::footprints", level = "debug", skip(client))]
pub fn table_footprints<C: CatalogClient + ?Sized>(client: &mut C) -> Result<Vec<TableFootprint>> {
	let rows = client.query(sql::select_table_footprints(), &[])?;
	rows.iter().map(footprint_from_row).collect()
}

fn footprint_from_row(row: &Row) -> Result<TableFootprint> {
	let table = TableName::new(row.get_text(0)?)?;
	let stored_bytes = row.get_i64(1)?;
	let stored_rows = row.get_i64(2)?;
	let projection_count = row.get_i64(3)?;
	let min_type = ProjectionType::parse(&row.get_text(4)?)?;
	let max_type = ProjectionType::parse(&row.get_text(5)?)?;

	let Some(stored_rowsize) = TableFootprint::rowsize(stored_bytes, stored_rows) else {
		return Err(CatalogError::ZeroStoredRows {
			table,
		}
		.into());
	};

	Ok(TableFootprint {
		table,
		stored_bytes,
		stored_rows,
		stored_rowsize,
		projection_count,
		projection_type: ProjectionType::combine(min_type, max_type),
	})
}

/// Inserts one pending row per table into `diag_compression` and returns
/// the number of rows inserted. Either every table is inserted or none.
#[instrument(name = "catalog::aggregate::insert", level = "debug", skip(client))]
pub fn insert_stats<C: CatalogClient + ?Sized>(client: &mut C) -> Result<u64> {
	let footprints = table_footprints(client)?;
	let statement = sql::insert_footprint(client.dialect());

	let inserted = in_transaction(client, |client| {
		let mut inserted = 0;
		for footprint in &footprints {
			debug!(
				table = %footprint.table,
				bytes = footprint.stored_bytes,
				rows = footprint.stored_rows,
				projection_type = %footprint.projection_type,
				"inserting footprint"
			);
			inserted += client.execute(
				&statement,
				&[
					Value::from(footprint.table.as_str()),
					Value::Int(footprint.stored_bytes),
					Value::Int(footprint.stored_rows),
					Value::Float(footprint.stored_rowsize),
					Value::Int(footprint.projection_count),
					Value::Text(footprint.projection_type.as_char().to_string()),
				],
			)?;
		}
		Ok(inserted)
	})?;

	info!(inserted, "inserted footprints");
	Ok(inserted)
}
