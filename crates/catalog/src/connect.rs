// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use compdiag_type::Password;
use tracing::{info, instrument};

use crate::{CatalogClient, Result};

/// ODBC driver used when none is given.
pub const DEFAULT_DRIVER: &str = "HPVertica";

pub const DEFAULT_HOST: &str = "localhost";

/// Driver name selecting the built-in SQLite backend; the database name is
/// then a file path.
pub const SQLITE_DRIVER: &str = "SQLite";

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectConfig {
	pub driver: String,
	pub host: String,
	pub database: String,
	pub user: String,
	pub password: Password,
}

impl ConnectConfig {
	pub fn new(database: impl Into<String>, user: impl Into<String>, password: Password) -> Self {
		Self {
			driver: DEFAULT_DRIVER.to_string(),
			host: DEFAULT_HOST.to_string(),
			database: database.into(),
			user: user.into(),
			password,
		}
	}

	pub fn driver(mut self, driver: impl Into<String>) -> Self {
		self.driver = driver.into();
		self
	}

	pub fn host(mut self, host: impl Into<String>) -> Self {
		self.host = host.into();
		self
	}

	pub fn is_sqlite(&self) -> bool {
		self.driver.eq_ignore_ascii_case(SQLITE_DRIVER)
	}

	/// ODBC connection string. Contains the password in clear text.
	pub fn connection_string(&self) -> String {
		format!(
			"DRIVER={{{}}};SERVER={};DATABASE={};UID={};PWD={}",
			self.driver,
			self.host,
			self.database,
			self.user,
			self.password.expose()
		)
	}
}

pub struct Connector;

impl Connector {
	/// Opens the single connection used for the whole run.
	#[instrument(name = "catalog::connect", level = "info", skip(config), fields(
		driver = %config.driver,
		host = %config.host,
		database = %config.database,
		user = %config.user
	))]
	pub fn connect(config: &ConnectConfig) -> Result<Box<dyn CatalogClient>> {
		let client: Box<dyn CatalogClient> = if config.is_sqlite() {
			Self::connect_sqlite(config)?
		} else {
			Self::connect_odbc(config)?
		};
		info!(dialect = %client.dialect(), "connected");
		Ok(client)
	}

	#[cfg(feature = "sqlite")]
	fn connect_sqlite(config: &ConnectConfig) -> Result<Box<dyn CatalogClient>> {
		Ok(Box::new(crate::sqlite::SqliteCatalog::open(&config.database)?))
	}

	#[cfg(not(feature = "sqlite"))]
	fn connect_sqlite(config: &ConnectConfig) -> Result<Box<dyn CatalogClient>> {
		Err(crate::CatalogError::DriverUnavailable {
			driver: config.driver.clone(),
			feature: "sqlite",
		}
		.into())
	}

	#[cfg(feature = "odbc")]
	fn connect_odbc(config: &ConnectConfig) -> Result<Box<dyn CatalogClient>> {
		Ok(Box::new(crate::odbc::OdbcCatalog::connect(config)?))
	}

	#[cfg(not(feature = "odbc"))]
	fn connect_odbc(config: &ConnectConfig) -> Result<Box<dyn CatalogClient>> {
		Err(crate::CatalogError::DriverUnavailable {
			driver: config.driver.clone(),
			feature: "odbc",
		}
		.into())
	}
}
