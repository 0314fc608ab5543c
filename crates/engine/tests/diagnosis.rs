// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use compdiag_catalog::stats::{pending_tables, rows_for_table};
use compdiag_engine::{Diagnosis, DiagnosisConfig, DiagnosisSummary, NoopReport, Report, TableCompression};
use compdiag_testing::{ProjectionStorage, ScriptedSampler, entries, lines, seeded_catalog, temp_dir};
use compdiag_type::TableName;

#[derive(Default)]
struct Recorder {
	inserted: Vec<u64>,
	sampled: Vec<TableCompression>,
}

impl Report for Recorder {
	fn inserted(&mut self, rows: u64) {
		self.inserted.push(rows);
	}

	fn sampled(&mut self, table: &TableCompression) {
		self.sampled.push(table.clone());
	}
}

fn orders() -> TableName {
	TableName::qualified("public", "orders")
}

fn storage() -> Vec<ProjectionStorage> {
	vec![
		ProjectionStorage::new("node0001", "public", "orders", "orders_super", 600_000, 5_000),
		ProjectionStorage::new("node0002", "public", "orders", "orders_super", 400_000, 5_000),
		ProjectionStorage::new("node0001", "public", "dims", "dims_super_node0001", 800, 8),
		ProjectionStorage::new("node0002", "public", "dims", "dims_super_node0002", 800, 8),
	]
}

#[test]
fn test_end_to_end() {
	temp_dir(|dir| {
		let mut catalog = seeded_catalog(&storage());
		let mut sampler = ScriptedSampler::new().output("public.orders", lines(10_000, 50));
		let mut report = Recorder::default();

		let summary = Diagnosis::new(&mut catalog, &mut sampler, DiagnosisConfig::new(dir))
			.run(&mut report)
			.unwrap();

		assert_eq!(summary.inserted, 2);
		assert_eq!(summary.sampled.len(), 2);
		assert_eq!(report.inserted, [2]);
		assert_eq!(report.sampled, summary.sampled);

		let orders_result = summary.sampled.iter().find(|t| t.table == orders()).unwrap();
		assert_eq!(orders_result.stored_rowsize, 100.0);
		assert_eq!(orders_result.sample_bytes, 500_000);
		assert_eq!(orders_result.sample_rows, 10_000);
		assert_eq!(orders_result.sample_rowsize, 50.0);
		assert_eq!(orders_result.compression, 0.5);

		let rows = rows_for_table(&mut catalog, &orders()).unwrap();
		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0].sample_bytes, Some(500_000));
		assert_eq!(rows[0].sample_rows, Some(10_000));
		assert_eq!(rows[0].sample_rowsize, Some(50.0));
		assert_eq!(rows[0].compression, Some(0.5));
		assert!(pending_tables(&mut catalog).unwrap().is_empty());

		assert_eq!(entries(dir), 0);
	})
}

#[test]
fn test_empty_sample_yields_zero() {
	temp_dir(|dir| {
		let mut catalog = seeded_catalog(&storage());
		let mut sampler = ScriptedSampler::new();

		let summary = Diagnosis::new(&mut catalog, &mut sampler, DiagnosisConfig::new(dir))
			.run(&mut NoopReport)
			.unwrap();

		let dims = summary.sampled.iter().find(|t| t.table.as_str() == "public.dims").unwrap();
		assert_eq!(dims.sample_rows, 0);
		assert_eq!(dims.sample_rowsize, 0.0);
		assert_eq!(dims.compression, 0.0);

		let rows = rows_for_table(&mut catalog, &TableName::qualified("public", "dims")).unwrap();
		assert_eq!(rows[0].sample_rows, Some(0));
		assert_eq!(rows[0].compression, Some(0.0));
	})
}

#[test]
fn test_failing_tool_does_not_abort() {
	temp_dir(|dir| {
		let mut catalog = seeded_catalog(&storage());
		let mut sampler = ScriptedSampler::new().failing("public.orders", "", 1).removing("public.dims");

		let summary = Diagnosis::new(&mut catalog, &mut sampler, DiagnosisConfig::new(dir))
			.run(&mut NoopReport)
			.unwrap();

		assert_eq!(summary.sampled.len(), 2);
		assert!(summary.sampled.iter().all(|t| t.compression == 0.0));
		assert!(pending_tables(&mut catalog).unwrap().is_empty());
		assert_eq!(entries(dir), 0);
	})
}

#[test]
fn test_second_run_samples_new_batch_only() {
	temp_dir(|dir| {
		let mut catalog = seeded_catalog(&storage());
		let mut sampler = ScriptedSampler::new().output("public.orders", lines(10_000, 50));

		Diagnosis::new(&mut catalog, &mut sampler, DiagnosisConfig::new(dir)).run(&mut NoopReport).unwrap();
		let second =
			Diagnosis::new(&mut catalog, &mut sampler, DiagnosisConfig::new(dir)).run(&mut NoopReport).unwrap();

		assert_eq!(second.inserted, 2);
		assert_eq!(second.sampled.len(), 2);
		assert_eq!(sampler.calls().len(), 4);

		let rows = rows_for_table(&mut catalog, &orders()).unwrap();
		assert_eq!(rows.len(), 2);
		assert!(rows.iter().all(|r| r.compression == Some(0.5)));
	})
}

#[test]
fn test_zero_stored_rows_aborts_before_sampling() {
	temp_dir(|dir| {
		let mut rows = storage();
		rows.push(ProjectionStorage::new("node0001", "public", "empty", "empty_super", 64, 0));
		let mut catalog = seeded_catalog(&rows);
		let mut sampler = ScriptedSampler::new();
		let mut report = Recorder::default();

		let err = Diagnosis::new(&mut catalog, &mut sampler, DiagnosisConfig::new(dir))
			.run(&mut report)
			.unwrap_err();

		assert_eq!(err.code(), "AGGREGATE_001");
		assert!(report.inserted.is_empty());
		assert!(sampler.calls().is_empty());
	})
}

#[test]
fn test_invalid_tmpdir_is_rejected() {
	temp_dir(|dir| {
		let mut catalog = seeded_catalog(&storage());
		let mut sampler = ScriptedSampler::new();

		let err = Diagnosis::new(&mut catalog, &mut sampler, DiagnosisConfig::new(dir.join("missing")))
			.run(&mut NoopReport)
			.unwrap_err();

		assert_eq!(err.code(), "CONFIG_001");
		assert!(sampler.calls().is_empty());
	})
}

#[test]
fn test_summary_serializes() {
	let summary = DiagnosisSummary {
		inserted: 1,
		sampled: vec![TableCompression {
			table: orders(),
			stored_rowsize: 100.0,
			sample_bytes: 500_000,
			sample_rows: 10_000,
			sample_rowsize: 50.0,
			compression: 0.5,
		}],
	};

	let json = serde_json::to_value(&summary).unwrap();
	assert_eq!(json["inserted"], 1);
	assert_eq!(json["sampled"][0]["table"], "public.orders");
	assert_eq!(json["sampled"][0]["compression"], 0.5);
}
