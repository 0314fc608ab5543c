// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod cli;
mod report;

use std::{
	io,
	path::{Path, PathBuf},
	process::ExitCode,
};

use clap::Parser;
use compdiag_catalog::{ConnectConfig, Connector};
use compdiag_engine::{Diagnosis, DiagnosisConfig, DiagnosisSummary, NoopReport};
use compdiag_sampler::{
	DEFAULT_SQLITE3, RowSampler, SamplerConfig, Sqlite3Sampler, VsqlSampler, VsqlTarget,
};
use compdiag_type::{Dialect, Password, Result, error, error::diagnostic};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::Cli, report::ConsoleReport};

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(&cli);

	match run(&cli) {
		Ok(summary) => {
			debug!(inserted = summary.inserted, sampled = summary.sampled.len(), "finished");
			ExitCode::SUCCESS
		}
		Err(err) => {
			eprintln!("{err}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(cli: &Cli) {
	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
		.with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
		.init();
}

fn run(cli: &Cli) -> Result<DiagnosisSummary> {
	let config = match &cli.tmpdir {
		Some(dir) => DiagnosisConfig::new(dir),
		None => DiagnosisConfig::current_dir()?,
	};
	config.validate()?;

	let password = prompt_password()?;
	let connect = ConnectConfig::new(&cli.dbname, cli.user(), password).driver(&cli.driver).host(&cli.host);
	info!(driver = %connect.driver, host = %connect.host, database = %connect.database, "connecting");

	let mut catalog = Connector::connect(&connect)?;
	let mut sampler = sampler(cli, catalog.dialect(), &connect);

	let summary = if cli.json {
		Diagnosis::new(&mut *catalog, &mut *sampler, config).run(&mut NoopReport)?
	} else {
		let mut report = ConsoleReport::new(io::stdout().lock());
		Diagnosis::new(&mut *catalog, &mut *sampler, config).run(&mut report)?
	};

	if cli.json {
		let json = serde_json::to_string_pretty(&summary)
			.map_err(|e| error!(diagnostic::internal::internal(format!("cannot serialize summary: {e}"))))?;
		println!("{json}");
	}

	Ok(summary)
}

fn prompt_password() -> Result<Password> {
	rpassword::prompt_password("Password: ")
		.map(Password::new)
		.map_err(|e| error!(diagnostic::config::password_prompt_failed(e.to_string())))
}

fn sampler(cli: &Cli, dialect: Dialect, connect: &ConnectConfig) -> Box<dyn RowSampler> {
	match dialect {
		Dialect::Vertica => Box::new(VsqlSampler::with_config(
			VsqlTarget {
				host: connect.host.clone(),
				database: connect.database.clone(),
				user: connect.user.clone(),
				password: connect.password.clone(),
			},
			SamplerConfig::vsql().program(&cli.vsql),
		)),
		Dialect::Sqlite => {
			let program = cli.sqlite3.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_SQLITE3));
			Box::new(Sqlite3Sampler::with_config(
				Path::new(&cli.dbname),
				SamplerConfig::sqlite3().program(program),
			))
		}
	}
}
