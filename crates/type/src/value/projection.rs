// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::ValueError;

/// Marker Vertica appends to the per-node copies of a replicated projection,
/// e.g. `orders_super_node0003`.
pub const REPLICA_MARKER: &str = "_node";

/// Number of trailing characters searched for [`REPLICA_MARKER`].
pub const REPLICA_SUFFIX_LEN: usize = 9;

/// How a projection, or all projections of a table, are laid out across nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectionType {
	/// Replicated on every node; row counts are taken once.
	Replicated,
	/// Partitioned across nodes; row counts add up.
	Segmented,
	/// The table has projections of both kinds.
	Mixed,
}

impl ProjectionType {
	/// Classifies a single projection by its name.
	///
	/// A projection is replicated when its last nine characters contain
	/// `_node`; everything else is segmented. Same rule as the
	/// `diag_projections` view.
	pub fn classify(projection_name: &str) -> Self {
		if replica_suffix(projection_name).contains(REPLICA_MARKER) {
			ProjectionType::Replicated
		} else {
			ProjectionType::Segmented
		}
	}

	/// Folds the lowest and highest projection type of a table into the
	/// table-level flag.
	pub fn combine(min: ProjectionType, max: ProjectionType) -> Self {
		if min != max {
			ProjectionType::Mixed
		} else {
			min
		}
	}

	pub fn as_char(&self) -> char {
		match self {
			ProjectionType::Replicated => 'R',
			ProjectionType::Segmented => 'S',
			ProjectionType::Mixed => 'M',
		}
	}

	pub fn from_char(c: char) -> Result<Self, ValueError> {
		match c {
			'R' => Ok(ProjectionType::Replicated),
			'S' => Ok(ProjectionType::Segmented),
			'M' => Ok(ProjectionType::Mixed),
			other => Err(ValueError::UnknownProjectionType(other.to_string())),
		}
	}

	/// Parses the `CHAR(1)` column value, tolerating the blank padding some
	/// drivers return.
	pub fn parse(value: &str) -> Result<Self, ValueError> {
		let mut chars = value.trim().chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Self::from_char(c),
			_ => Err(ValueError::UnknownProjectionType(value.to_string())),
		}
	}
}

impl Display for ProjectionType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_char())
	}
}

/// Name shared by all node copies of a projection: replicated projections
/// are cut before the first `_node`, segmented ones are kept whole.
pub fn short_projection_name(projection_name: &str) -> &str {
	match ProjectionType::classify(projection_name) {
		ProjectionType::Replicated => match projection_name.find(REPLICA_MARKER) {
			Some(idx) => &projection_name[..idx],
			None => projection_name,
		},
		_ => projection_name,
	}
}

fn replica_suffix(name: &str) -> &str {
	match name.char_indices().rev().nth(REPLICA_SUFFIX_LEN - 1) {
		Some((idx, _)) => &name[idx..],
		None => name,
	}
}
