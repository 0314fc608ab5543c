// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Everything compdiag does inside the database: the `diag_compression`
//! result table, the `diag_projections` view, the per-table aggregation and
//! the write-back of sample results.

pub mod aggregate;
mod client;
mod connect;
pub mod error;
#[cfg(feature = "odbc")]
pub mod odbc;
pub mod schema;
pub mod sql;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod stats;

pub use client::{CatalogClient, Row, Value};
pub use connect::{ConnectConfig, Connector, DEFAULT_DRIVER, DEFAULT_HOST, SQLITE_DRIVER};
pub use error::CatalogError;

pub type Result<T> = compdiag_type::Result<T>;

/// Name of the persisted result table.
pub const RESULT_TABLE: &str = "diag_compression";

/// Name of the per-projection aggregation view.
pub const PROJECTION_VIEW: &str = "diag_projections";
