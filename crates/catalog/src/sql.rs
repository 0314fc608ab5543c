// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQL text for every statement compdiag runs, per dialect.
//!
//! Column names of `diag_compression` are those of the deployed table, so
//! results from earlier runs stay readable.

use compdiag_type::Dialect;

pub fn create_result_table() -> &'static str {
	"CREATE TABLE diag_compression
(
    table_name      VARCHAR(400),
    vertica_bytes   INT,
    vertica_rows    INT,
    vertica_rowsize FLOAT,
    proj_count      INT,
    proj_type       CHAR(1),
    sample_bytes    INT,
    sample_rows     INT,
    sample_rowsize  FLOAT,
    compression     FLOAT,
    diag_date       TIMESTAMP
)"
}

/// Per projection summary over `projection_storage`.
///
/// A projection whose last nine characters contain `_node` is one node copy
/// of a replicated projection: its row count is taken once (max), segmented
/// projections add up their per-node row counts.
pub fn create_projection_view(dialect: Dialect) -> &'static str {
	match dialect {
		Dialect::Vertica => {
			"CREATE VIEW diag_projections AS
SELECT anchor_table_schema,
       anchor_table_name,
       projection_name,
       SUM(used_bytes) AS used_bytes,
       CASE INSTR(RIGHT(projection_name, 9), '_node')
           WHEN 0 THEN projection_name
           ELSE SPLIT_PART(projection_name, '_node', 1)
       END AS pjname_short,
       CASE INSTR(RIGHT(projection_name, 9), '_node')
           WHEN 0 THEN 'S'
           ELSE 'R'
       END AS pjtype,
       CASE INSTR(RIGHT(projection_name, 9), '_node')
           WHEN 0 THEN SUM(row_count)
           ELSE MAX(row_count)
       END AS row_count
FROM projection_storage
GROUP BY projection_name,
         anchor_table_schema,
         anchor_table_name"
		}
		Dialect::Sqlite => {
			"CREATE VIEW diag_projections AS
SELECT anchor_table_schema,
       anchor_table_name,
       projection_name,
       SUM(used_bytes) AS used_bytes,
       CASE instr(substr(projection_name, -9), '_node')
           WHEN 0 THEN projection_name
           ELSE substr(projection_name, 1, instr(projection_name, '_node') - 1)
       END AS pjname_short,
       CASE instr(substr(projection_name, -9), '_node')
           WHEN 0 THEN 'S'
           ELSE 'R'
       END AS pjtype,
       CASE instr(substr(projection_name, -9), '_node')
           WHEN 0 THEN SUM(row_count)
           ELSE MAX(row_count)
       END AS row_count
FROM projection_storage
GROUP BY projection_name,
         anchor_table_schema,
         anchor_table_name"
		}
	}
}

/// Stored footprint per table. Columns: table_name, stored bytes, stored
/// rows, distinct short projection names, lowest and highest projection type.
pub fn select_table_footprints() -> &'static str {
	"SELECT anchor_table_schema || '.' || anchor_table_name AS table_name,
       SUM(used_bytes) AS vertica_bytes,
       MAX(row_count) AS vertica_rows,
       COUNT(DISTINCT pjname_short) AS proj_count,
       MIN(pjtype) AS min_pjtype,
       MAX(pjtype) AS max_pjtype
FROM diag_projections
GROUP BY anchor_table_schema,
         anchor_table_name"
}

pub fn insert_footprint(dialect: Dialect) -> String {
	format!(
		"INSERT INTO diag_compression
    (table_name, vertica_bytes, vertica_rows, vertica_rowsize, proj_count, proj_type,
     sample_bytes, sample_rows, sample_rowsize, compression, diag_date)
VALUES (?, ?, ?, ?, ?, ?, NULL, NULL, NULL, NULL, {})",
		dialect.now()
	)
}

pub fn select_pending() -> &'static str {
	"SELECT table_name, vertica_rowsize
FROM diag_compression
WHERE sample_bytes IS NULL
  AND sample_rows IS NULL"
}

pub fn update_sample() -> &'static str {
	"UPDATE diag_compression
SET sample_bytes = ?,
    sample_rows = ?,
    sample_rowsize = ?,
    compression = ?
WHERE table_name = ?
  AND sample_bytes IS NULL
  AND sample_rows IS NULL"
}

pub fn select_rows_for_table() -> &'static str {
	"SELECT table_name, vertica_bytes, vertica_rows, vertica_rowsize, proj_count, proj_type,
       sample_bytes, sample_rows, sample_rowsize, compression, diag_date
FROM diag_compression
WHERE table_name = ?
ORDER BY diag_date"
}
