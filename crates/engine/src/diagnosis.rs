// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use compdiag_catalog::{
	CatalogClient,
	aggregate::insert_stats,
	schema::ensure_schema,
	stats::{pending_tables, update_stats},
};
use compdiag_sampler::{RowSampler, take_sample};
use compdiag_type::{CompressionUpdate, Result, TableName};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{DiagnosisConfig, Report};

/// Outcome for one sampled table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCompression {
	pub table: TableName,
	pub stored_rowsize: f64,
	pub sample_bytes: u64,
	pub sample_rows: u64,
	pub sample_rowsize: f64,
	pub compression: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisSummary {
	/// Rows added to the result table by this run.
	pub inserted: u64,
	/// Every pending table, in the order it was sampled.
	pub sampled: Vec<TableCompression>,
}

/// One diagnosis run over a catalog.
///
/// Steps run strictly in sequence and the first error aborts the run. Rows
/// already updated stay committed, so a later run picks up where this one
/// stopped.
pub struct Diagnosis<'a> {
	catalog: &'a mut dyn CatalogClient,
	sampler: &'a mut dyn RowSampler,
	config: DiagnosisConfig,
}

impl<'a> Diagnosis<'a> {
	pub fn new(
		catalog: &'a mut dyn CatalogClient,
		sampler: &'a mut dyn RowSampler,
		config: DiagnosisConfig,
	) -> Self {
		Self {
			catalog,
			sampler,
			config,
		}
	}

	#[instrument(name = "engine::diagnosis", level = "info", skip_all, fields(dialect = %self.catalog.dialect()))]
	pub fn run(&mut self, report: &mut dyn Report) -> Result<DiagnosisSummary> {
		self.config.validate()?;

		let schema = ensure_schema(&mut *self.catalog)?;
		if schema.created_table || schema.created_view {
			info!(table = schema.created_table, view = schema.created_view, "initialized schema");
		}

		let inserted = insert_stats(&mut *self.catalog)?;
		report.inserted(inserted);

		let pending = pending_tables(&mut *self.catalog)?;
		let mut sampled = Vec::with_capacity(pending.len());

		for table in pending {
			let measurement = take_sample(&mut *self.sampler, &self.config.tmpdir, &table.table)?;
			let update = CompressionUpdate::compute(table.stored_rowsize, measurement);

			let updated = update_stats(&mut *self.catalog, &table.table, &update)?;
			if updated == 0 {
				warn!(table = %table.table, "no pending row left to update");
			}

			let result = TableCompression {
				table: table.table,
				stored_rowsize: table.stored_rowsize,
				sample_bytes: update.sample_bytes,
				sample_rows: update.sample_rows,
				sample_rowsize: update.sample_rowsize,
				compression: update.compression,
			};
			info!(table = %result.table, compression = result.compression, "sampled table");
			report.sampled(&result);
			sampled.push(result);
		}

		Ok(DiagnosisSummary {
			inserted,
			sampled,
		})
	}
}
