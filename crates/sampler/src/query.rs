// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use compdiag_type::{Dialect, TableName};

/// Fraction of rows kept by the random filter.
pub const DEFAULT_SAMPLE_RATE: f64 = 0.05;

/// Upper bound on sampled rows.
pub const DEFAULT_SAMPLE_LIMIT: u64 = 10_000_000;

/// SQLite's `random()` spans the whole i64 range; the filter compares the
/// remainder against this many buckets instead.
const SQLITE_BUCKETS: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleQuery {
	pub rate: f64,
	pub limit: u64,
}

impl Default for SampleQuery {
	fn default() -> Self {
		Self {
			rate: DEFAULT_SAMPLE_RATE,
			limit: DEFAULT_SAMPLE_LIMIT,
		}
	}
}

impl SampleQuery {
	pub fn render(&self, dialect: Dialect, table: &TableName) -> String {
		match dialect {
			Dialect::Vertica => {
				format!("SELECT * FROM {} WHERE RANDOM() < {} LIMIT {}", table, self.rate, self.limit)
			}
			Dialect::Sqlite => {
				let threshold = (self.rate * SQLITE_BUCKETS as f64).round() as i64;
				format!(
					"SELECT * FROM {} WHERE abs(random() % {}) < {} LIMIT {}",
					table, SQLITE_BUCKETS, threshold, self.limit
				)
			}
		}
	}
}
