// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod stats;
pub mod value;

pub use error::{Error, IntoDiagnostic, diagnostic::Diagnostic};
pub use stats::{CompressionRow, CompressionUpdate, PendingTable, SampleMeasurement, TableFootprint};
pub use value::{Dialect, Password, ProjectionType, TableName, short_projection_name};

pub type Result<T> = std::result::Result<T, Error>;
