// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{env, fs, path::Path};

use uuid::Uuid;

/// Runs `f` inside a fresh directory that is removed afterwards.
pub fn temp_dir<F, R>(f: F) -> R
where
	F: FnOnce(&Path) -> R,
{
	let mut path = env::temp_dir();
	path.push(format!("compdiag-test-{}", Uuid::new_v4()));

	fs::create_dir(&path).expect("create temp dir");
	let result = f(&path);

	let _ = fs::remove_dir_all(&path);
	result
}

/// Number of entries in `dir`.
pub fn entries(dir: &Path) -> usize {
	fs::read_dir(dir).expect("read temp dir").count()
}
