// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Idempotent creation of the result table and the projection view.
//!
//! An existing object is left untouched, whatever its definition.

use tracing::{debug, info, instrument};

use crate::{CatalogClient, PROJECTION_VIEW, RESULT_TABLE, Result, sql};

/// Which objects a call to [`ensure_schema`] had to create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaReport {
	pub created_table: bool,
	pub created_view: bool,
}

#[instrument(name = "catalog::schema::ensure_table", level = "debug", skip(client))]
pub fn ensure_result_table<C: CatalogClient + ?Sized>(client: &mut C) -> Result<bool> {
	if client.object_exists(RESULT_TABLE)? {
		debug!(table = RESULT_TABLE, "result table exists");
		return Ok(false);
	}

	client.execute(sql::create_result_table(), &[])?;
	info!(table = RESULT_TABLE, "created result table");
	Ok(true)
}

#[instrument(name = "catalog::schema::ensure_view", level = "debug", skip(client))]
pub fn ensure_projection_view<C: CatalogClient + ?Sized>(client: &mut C) -> Result<bool> {
	if client.object_exists(PROJECTION_VIEW)? {
		debug!(view = PROJECTION_VIEW, "projection view exists");
		return Ok(false);
	}

	client.execute(sql::create_projection_view(client.dialect()), &[])?;
	info!(view = PROJECTION_VIEW, "created projection view");
	Ok(true)
}

pub fn ensure_schema<C: CatalogClient + ?Sized>(client: &mut C) -> Result<SchemaReport> {
	let created_table = ensure_result_table(client)?;
	let created_view = ensure_projection_view(client)?;

	Ok(SchemaReport {
		created_table,
		created_view,
	})
}
