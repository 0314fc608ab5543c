// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::Write;

use compdiag_catalog::RESULT_TABLE;
use compdiag_engine::{Report, TableCompression};
use tracing::warn;

/// Operator lines on stdout, one per step.
pub struct ConsoleReport<W: Write> {
	out: W,
}

impl<W: Write> ConsoleReport<W> {
	pub fn new(out: W) -> Self {
		Self {
			out,
		}
	}

	fn line(&mut self, line: String) {
		if let Err(err) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
			warn!(error = %err, "cannot write report");
		}
	}
}

impl<W: Write> Report for ConsoleReport<W> {
	fn inserted(&mut self, rows: u64) {
		self.line(format!("Inserted {} rows into {}", rows, RESULT_TABLE));
	}

	fn sampled(&mut self, table: &TableCompression) {
		self.line(format!("{:?} compression for table {}", table.compression, table.table));
	}
}

#[cfg(test)]
mod tests {
	use compdiag_type::TableName;

	use super::*;

	#[test]
	fn test_lines() {
		let mut out = Vec::new();
		{
			let mut report = ConsoleReport::new(&mut out);
			report.inserted(3);
			report.sampled(&TableCompression {
				table: TableName::qualified("public", "orders"),
				stored_rowsize: 100.0,
				sample_bytes: 500_000,
				sample_rows: 10_000,
				sample_rowsize: 50.0,
				compression: 0.5,
			});
			report.sampled(&TableCompression {
				table: TableName::qualified("public", "dims"),
				stored_rowsize: 0.0,
				sample_bytes: 0,
				sample_rows: 0,
				sample_rowsize: 0.0,
				compression: 0.0,
			});
		}

		assert_eq!(
			String::from_utf8(out).unwrap(),
			"Inserted 3 rows into diag_compression\n\
			 0.5 compression for table public.orders\n\
			 0.0 compression for table public.dims\n"
		);
	}
}
