// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use compdiag_catalog::{
	CatalogClient, PROJECTION_VIEW, RESULT_TABLE,
	aggregate::{insert_stats, table_footprints},
	schema::{SchemaReport, ensure_schema},
	stats::{pending_tables, rows_for_table, update_stats},
};
use compdiag_testing::{ProjectionStorage, seeded_catalog};
use compdiag_type::{CompressionUpdate, ProjectionType, SampleMeasurement, TableFootprint, TableName};

fn storage() -> Vec<ProjectionStorage> {
	vec![
		// segmented, one projection spread over three nodes
		ProjectionStorage::new("node0001", "public", "orders", "orders_super", 100, 10),
		ProjectionStorage::new("node0002", "public", "orders", "orders_super", 100, 10),
		ProjectionStorage::new("node0003", "public", "orders", "orders_super", 100, 10),
		// replicated, one full copy per node
		ProjectionStorage::new("node0001", "public", "dims", "dims_super_node0001", 400, 20),
		ProjectionStorage::new("node0002", "public", "dims", "dims_super_node0002", 400, 20),
		ProjectionStorage::new("node0003", "public", "dims", "dims_super_node0003", 400, 20),
		// both kinds on the same table
		ProjectionStorage::new("node0001", "store", "items", "items_super", 50, 5),
		ProjectionStorage::new("node0002", "store", "items", "items_super", 50, 5),
		ProjectionStorage::new("node0001", "store", "items", "items_rep_node0001", 20, 10),
		ProjectionStorage::new("node0002", "store", "items", "items_rep_node0002", 20, 10),
	]
}

fn footprint(footprints: &[TableFootprint], table: &str) -> TableFootprint {
	footprints.iter().find(|f| f.table.as_str() == table).cloned().unwrap()
}

#[test]
fn test_schema_is_created_once() {
	let mut catalog = seeded_catalog(&storage());

	let first = ensure_schema(&mut catalog).unwrap();
	assert_eq!(
		first,
		SchemaReport {
			created_table: true,
			created_view: true,
		}
	);
	assert!(catalog.object_exists(RESULT_TABLE).unwrap());
	assert!(catalog.object_exists(PROJECTION_VIEW).unwrap());

	let second = ensure_schema(&mut catalog).unwrap();
	assert_eq!(second, SchemaReport::default());
}

#[test]
fn test_footprints_by_projection_type() {
	let mut catalog = seeded_catalog(&storage());
	ensure_schema(&mut catalog).unwrap();

	let footprints = table_footprints(&mut catalog).unwrap();
	assert_eq!(footprints.len(), 3);

	let orders = footprint(&footprints, "public.orders");
	assert_eq!(orders.stored_bytes, 300);
	assert_eq!(orders.stored_rows, 30);
	assert_eq!(orders.stored_rowsize, 10.0);
	assert_eq!(orders.projection_count, 1);
	assert_eq!(orders.projection_type, ProjectionType::Segmented);

	let dims = footprint(&footprints, "public.dims");
	assert_eq!(dims.stored_bytes, 1200);
	assert_eq!(dims.stored_rows, 20);
	assert_eq!(dims.stored_rowsize, 60.0);
	assert_eq!(dims.projection_count, 1);
	assert_eq!(dims.projection_type, ProjectionType::Replicated);

	let items = footprint(&footprints, "store.items");
	assert_eq!(items.stored_bytes, 140);
	assert_eq!(items.stored_rows, 10);
	assert_eq!(items.stored_rowsize, 14.0);
	assert_eq!(items.projection_count, 2);
	assert_eq!(items.projection_type, ProjectionType::Mixed);
}

#[test]
fn test_insert_creates_pending_rows() {
	let mut catalog = seeded_catalog(&storage());
	ensure_schema(&mut catalog).unwrap();

	assert_eq!(insert_stats(&mut catalog).unwrap(), 3);

	let pending = pending_tables(&mut catalog).unwrap();
	assert_eq!(pending.len(), 3);

	let rows = rows_for_table(&mut catalog, &TableName::qualified("public", "dims")).unwrap();
	assert_eq!(rows.len(), 1);
	let row = &rows[0];
	assert!(row.is_pending());
	assert_eq!(row.stored_bytes, 1200);
	assert_eq!(row.projection_type, ProjectionType::Replicated);
	assert_eq!(row.sample_rowsize, None);
	assert_eq!(row.compression, None);
	assert!(row.diag_date.is_some());
}

#[test]
fn test_zero_stored_rows_inserts_nothing() {
	let mut rows = storage();
	rows.push(ProjectionStorage::new("node0001", "public", "empty", "empty_super", 64, 0));
	let mut catalog = seeded_catalog(&rows);
	ensure_schema(&mut catalog).unwrap();

	let err = insert_stats(&mut catalog).unwrap_err();
	assert_eq!(err.code(), "AGGREGATE_001");

	assert!(pending_tables(&mut catalog).unwrap().is_empty());
	let count = catalog.query("SELECT COUNT(*) FROM diag_compression", &[]).unwrap();
	assert_eq!(count[0].get_i64(0).unwrap(), 0);
}

#[test]
fn test_update_fills_pending_row() {
	let rows = [ProjectionStorage::new("node0001", "public", "orders", "orders_super", 1_000_000, 10_000)];
	let mut catalog = seeded_catalog(&rows);
	ensure_schema(&mut catalog).unwrap();
	insert_stats(&mut catalog).unwrap();

	let pending = pending_tables(&mut catalog).unwrap();
	assert_eq!(pending.len(), 1);
	assert_eq!(pending[0].stored_rowsize, 100.0);

	let update = CompressionUpdate::compute(pending[0].stored_rowsize, SampleMeasurement::new(500_000, 10_000));
	let table = TableName::qualified("public", "orders");
	assert_eq!(update_stats(&mut catalog, &table, &update).unwrap(), 1);

	let rows = rows_for_table(&mut catalog, &table).unwrap();
	assert_eq!(rows.len(), 1);
	assert_eq!(rows[0].sample_bytes, Some(500_000));
	assert_eq!(rows[0].sample_rows, Some(10_000));
	assert_eq!(rows[0].sample_rowsize, Some(50.0));
	assert_eq!(rows[0].compression, Some(0.5));
	assert!(!rows[0].is_pending());
	assert!(pending_tables(&mut catalog).unwrap().is_empty());
}

#[test]
fn test_update_leaves_finished_rows_alone() {
	let rows = [ProjectionStorage::new("node0001", "public", "orders", "orders_super", 1_000_000, 10_000)];
	let mut catalog = seeded_catalog(&rows);
	ensure_schema(&mut catalog).unwrap();
	insert_stats(&mut catalog).unwrap();

	let table = TableName::qualified("public", "orders");
	let first = CompressionUpdate::compute(100.0, SampleMeasurement::new(500_000, 10_000));
	update_stats(&mut catalog, &table, &first).unwrap();

	let second = CompressionUpdate::compute(100.0, SampleMeasurement::new(1, 1));
	assert_eq!(update_stats(&mut catalog, &table, &second).unwrap(), 0);

	let rows = rows_for_table(&mut catalog, &table).unwrap();
	assert_eq!(rows[0].compression, Some(0.5));
}

#[test]
fn test_rerun_adds_a_new_batch() {
	let rows = [ProjectionStorage::new("node0001", "public", "orders", "orders_super", 1_000_000, 10_000)];
	let mut catalog = seeded_catalog(&rows);
	let table = TableName::qualified("public", "orders");

	ensure_schema(&mut catalog).unwrap();
	insert_stats(&mut catalog).unwrap();
	let update = CompressionUpdate::compute(100.0, SampleMeasurement::new(500_000, 10_000));
	update_stats(&mut catalog, &table, &update).unwrap();

	ensure_schema(&mut catalog).unwrap();
	assert_eq!(insert_stats(&mut catalog).unwrap(), 1);

	let rows = rows_for_table(&mut catalog, &table).unwrap();
	assert_eq!(rows.len(), 2);
	assert_eq!(rows.iter().filter(|r| r.is_pending()).count(), 1);
	assert_eq!(pending_tables(&mut catalog).unwrap().len(), 1);
}

#[test]
fn test_oversized_sample_is_rejected() {
	let rows = [ProjectionStorage::new("node0001", "public", "orders", "orders_super", 1_000_000, 10_000)];
	let mut catalog = seeded_catalog(&rows);
	ensure_schema(&mut catalog).unwrap();
	insert_stats(&mut catalog).unwrap();

	let table = TableName::qualified("public", "orders");
	let update = CompressionUpdate {
		sample_bytes: u64::MAX,
		sample_rows: 1,
		sample_rowsize: u64::MAX as f64,
		compression: 1.0,
	};

	let err = update_stats(&mut catalog, &table, &update).unwrap_err();
	assert_eq!(err.code(), "CATALOG_005");
	assert_eq!(pending_tables(&mut catalog).unwrap().len(), 1);
}
