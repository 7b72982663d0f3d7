//! Error types for the CLI

use thiserror::Error;

use crate::config::ConfigError;
use crate::db;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] db::Error),

    /// Table name missing or blank
    #[error("No table name given")]
    NoTable,

    /// Table has no columns, or is not in the catalog
    #[error("No columns found for table '{0}'")]
    NoColumns(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
