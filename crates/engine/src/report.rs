// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::TableCompression;

/// Receives progress of a [`Diagnosis`](crate::Diagnosis) run as it happens.
pub trait Report {
	fn inserted(&mut self, rows: u64);

	fn sampled(&mut self, table: &TableCompression);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReport;

impl Report for NoopReport {
	fn inserted(&mut self, _rows: u64) {}

	fn sampled(&mut self, _table: &TableCompression) {}
}
