// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite connection utilities.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::{CatalogError, Result, SQLITE_DRIVER};

fn connection_failed(path: &str, error: rusqlite::Error) -> compdiag_type::Error {
	CatalogError::ConnectionFailed {
		driver: SQLITE_DRIVER.to_string(),
		message: format!("cannot open database at {}: {}", path, error),
	}
	.into()
}

/// Open an existing database file for reading and writing.
pub(super) fn connect(path: &Path) -> Result<Connection> {
	let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
	Connection::open_with_flags(path, flags).map_err(|e| connection_failed(&path.display().to_string(), e))
}

pub(super) fn connect_in_memory() -> Result<Connection> {
	Connection::open_in_memory().map_err(|e| connection_failed(":memory:", e))
}
