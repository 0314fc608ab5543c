// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use compdiag_catalog::{CatalogClient, Value, sqlite::SqliteCatalog};

const CREATE_PROJECTION_STORAGE: &str = "CREATE TABLE projection_storage (
	node_name VARCHAR(128),
	anchor_table_schema VARCHAR(128),
	anchor_table_name VARCHAR(128),
	projection_name VARCHAR(128),
	used_bytes INTEGER,
	row_count INTEGER
)";

const INSERT_PROJECTION_STORAGE: &str = "INSERT INTO projection_storage \
	(node_name, anchor_table_schema, anchor_table_name, projection_name, used_bytes, row_count) \
	VALUES (?, ?, ?, ?, ?, ?)";

/// One row of the engine's per-node projection storage metadata.
#[derive(Debug, Clone)]
pub struct ProjectionStorage {
	pub node: &'static str,
	pub schema: &'static str,
	pub table: &'static str,
	pub projection: &'static str,
	pub used_bytes: i64,
	pub row_count: i64,
}

impl ProjectionStorage {
	pub fn new(
		node: &'static str,
		schema: &'static str,
		table: &'static str,
		projection: &'static str,
		used_bytes: i64,
		row_count: i64,
	) -> Self {
		Self {
			node,
			schema,
			table,
			projection,
			used_bytes,
			row_count,
		}
	}
}

/// In-memory SQLite catalog with a `projection_storage` table holding `rows`.
pub fn seeded_catalog(rows: &[ProjectionStorage]) -> SqliteCatalog {
	let mut catalog = SqliteCatalog::in_memory().expect("open in-memory catalog");
	catalog.execute(CREATE_PROJECTION_STORAGE, &[]).expect("create projection_storage");

	for row in rows {
		catalog.execute(
			INSERT_PROJECTION_STORAGE,
			&[
				Value::from(row.node),
				Value::from(row.schema),
				Value::from(row.table),
				Value::from(row.projection),
				Value::from(row.used_bytes),
				Value::from(row.row_count),
			],
		)
		.expect("seed projection_storage");
	}

	catalog
}
