// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use compdiag_catalog::{DEFAULT_DRIVER, DEFAULT_HOST};
use compdiag_sampler::DEFAULT_VSQL;

/// Compare what Vertica stores per row with the raw size of a 5% row sample,
/// table by table, and record the ratio in `diag_compression`.
#[derive(Debug, Parser)]
#[command(name = "compdiag", version, about, long_about = None)]
pub struct Cli {
	/// Database name (a file path when the driver is SQLite)
	pub dbname: String,

	/// ODBC driver
	#[arg(long, default_value = DEFAULT_DRIVER)]
	pub driver: String,

	/// Database host
	#[arg(long, default_value = DEFAULT_HOST)]
	pub host: String,

	/// Database user (default: current user)
	#[arg(long)]
	pub user: Option<String>,

	/// Where sample output is written (default: current directory)
	#[arg(long)]
	pub tmpdir: Option<PathBuf>,

	/// vsql binary used for sampling
	#[arg(long, default_value = DEFAULT_VSQL)]
	pub vsql: PathBuf,

	/// sqlite3 binary used for sampling SQLite catalogs
	#[arg(long)]
	pub sqlite3: Option<PathBuf>,

	/// Print the run summary as JSON instead of one line per table
	#[arg(long)]
	pub json: bool,

	/// More log output on stderr, repeat for more
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,
}

impl Cli {
	pub fn user(&self) -> String {
		self.user.clone().unwrap_or_else(whoami::username)
	}

	pub fn log_level(&self) -> &'static str {
		match self.verbose {
			0 => "warn",
			1 => "info",
			2 => "debug",
			_ => "trace",
		}
	}
}
