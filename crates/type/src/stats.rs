// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Rows of `diag_compression` and the arithmetic that fills them.

use serde::{Deserialize, Serialize};

use crate::{ProjectionType, TableName};

/// Stored footprint of one table, as produced by the aggregation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFootprint {
	pub table: TableName,
	pub stored_bytes: i64,
	pub stored_rows: i64,
	pub stored_rowsize: f64,
	pub projection_count: i64,
	pub projection_type: ProjectionType,
}

impl TableFootprint {
	/// Bytes per stored row, `None` when the table has no rows.
	pub fn rowsize(stored_bytes: i64, stored_rows: i64) -> Option<f64> {
		if stored_rows == 0 {
			return None;
		}
		Some(stored_bytes as f64 / stored_rows as f64)
	}
}

/// A row of `diag_compression` still waiting for its sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTable {
	pub table: TableName,
	pub stored_rowsize: f64,
}

/// Raw size of a sample as written by the sampling tool, one row per line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleMeasurement {
	pub bytes: u64,
	pub rows: u64,
}

impl SampleMeasurement {
	pub fn new(bytes: u64, rows: u64) -> Self {
		Self {
			bytes,
			rows,
		}
	}

	/// Raw bytes per sampled row, zero for an empty sample.
	pub fn rowsize(&self) -> f64 {
		if self.rows == 0 {
			return 0.0;
		}
		self.bytes as f64 / self.rows as f64
	}
}

/// Values written back into a pending row once its sample is measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionUpdate {
	pub sample_bytes: u64,
	pub sample_rows: u64,
	pub sample_rowsize: f64,
	pub compression: f64,
}

impl CompressionUpdate {
	/// Derives sample rowsize and compression ratio. Both are zero instead of
	/// a division error when the sample is empty or the stored rowsize is zero.
	pub fn compute(stored_rowsize: f64, sample: SampleMeasurement) -> Self {
		let sample_rowsize = sample.rowsize();
		let compression = if stored_rowsize == 0.0 {
			0.0
		} else {
			sample_rowsize / stored_rowsize
		};

		Self {
			sample_bytes: sample.bytes,
			sample_rows: sample.rows,
			sample_rowsize,
			compression,
		}
	}
}

/// A full row of `diag_compression`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionRow {
	pub table: TableName,
	pub stored_bytes: i64,
	pub stored_rows: i64,
	pub stored_rowsize: f64,
	pub projection_count: i64,
	pub projection_type: ProjectionType,
	pub sample_bytes: Option<i64>,
	pub sample_rows: Option<i64>,
	pub sample_rowsize: Option<f64>,
	pub compression: Option<f64>,
	pub diag_date: Option<String>,
}

impl CompressionRow {
	pub fn is_pending(&self) -> bool {
		self.sample_bytes.is_none() && self.sample_rows.is_none()
	}
}
