// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display, Formatter};

/// Database password. Never printed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(String);

impl Password {
	pub fn new(password: impl Into<String>) -> Self {
		Self(password.into())
	}

	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl Debug for Password {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("Password(***)")
	}
}

impl Display for Password {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("***")
	}
}
