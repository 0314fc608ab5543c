// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! The compression diagnosis: ensure the result objects exist, record the
//! stored footprint of every table, then sample each pending table and write
//! its compression ratio back.

mod config;
mod diagnosis;
mod report;

pub use config::DiagnosisConfig;
pub use diagnosis::{Diagnosis, DiagnosisSummary, TableCompression};
pub use report::{NoopReport, Report};
