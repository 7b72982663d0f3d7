//! Automapper CLI - generate MyBatis mapper statements from the command line
//!
//! Table metadata comes from JSON column catalogs exported from the Oracle data
//! dictionary, configured in an `automapper.toml` file.
//!
//! # Configuration
//!
//! ```toml
//! catalog = "./catalog.json"
//!
//! [generate]
//! useIfUpdate = false
//! useIfWhere = true
//! parameterType = "model"
//! ```
//!
//! A catalog file looks like:
//!
//! ```json
//! { "product": "Oracle Database 19c",
//!   "tables": [ { "tableName": "EMP",
//!                 "columns": [ { "columnName": "EMP_ID", "dataType": "NUMBER", "primaryKey": "Y" } ] } ] }
//! ```
//!
//! # Commands
//!
//! - `automapper generate [TABLE]` - Print the SELECT/INSERT/UPDATE/DELETE statements for a table
//! - `automapper tables` - List the tables in the catalog
//! - `automapper check` - Validate the catalog

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod output;

pub use config::{Config, Error as ConfigError};
pub use error::CliError;
