// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Fixtures shared by the integration tests of the compdiag crates.

mod catalog;
mod sampler;
mod tempdir;

pub use catalog::{ProjectionStorage, seeded_catalog};
pub use sampler::{Script, ScriptedSampler, lines};
pub use tempdir::{entries, temp_dir};
