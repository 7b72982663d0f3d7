//! Configuration for the automapper CLI
//!
//! Loaded from `automapper.toml`:
//!
//! ```toml
//! catalog = ["./catalog/*.json"]
//!
//! [generate]
//! useIfUpdate = true
//! useIfWhere = false
//! parameterType = "hashmap"
//! ```

use std::path::{Path, PathBuf};

use automapper_types::{GenerationFlags, ParamStyle};
use serde::Deserialize;

/// Default config file name
pub const CONFIG_FILE: &str = "automapper.toml";

/// Catalog used when neither the config nor the environment names one
pub const DEFAULT_CATALOG: &str = "./catalog.json";

// ============================================================================
// Config types
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub generate: GenerateDefaults,
}

/// One catalog path/glob or many
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Catalog {
    One(String),
    Many(Vec<String>),
}

impl Default for Catalog {
    fn default() -> Self {
        Self::One(DEFAULT_CATALOG.into())
    }
}

impl Catalog {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::One(s) => std::slice::from_ref(s),
            Self::Many(v) => v,
        };
        slice.iter().map(String::as_str)
    }

    pub fn display(&self) -> String {
        match self {
            Self::One(s) => s.clone(),
            Self::Many(v) => v.join(", "),
        }
    }

    /// Resolve catalog files (with glob support)
    ///
    /// A pattern matching nothing still counts when it names an existing file.
    pub fn files(&self) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::new();

        for pattern in self.iter() {
            match glob::glob(pattern) {
                Ok(paths) => {
                    let mut matched: Vec<_> = paths.filter_map(Result::ok).collect();
                    if matched.is_empty() {
                        let p = PathBuf::from(pattern);
                        if p.exists() {
                            files.push(p);
                        }
                    } else {
                        matched.sort();
                        files.extend(matched);
                    }
                }
                Err(e) => return Err(Error::Glob(pattern.into(), e)),
            }
        }

        if files.is_empty() {
            return Err(Error::NoCatalogFiles(self.display()));
        }

        Ok(files)
    }
}

/// Defaults for `automapper generate`
///
/// UPDATE guards are on unless configured off; WHERE guards are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerateDefaults {
    #[serde(default = "default_true")]
    pub use_if_update: bool,
    #[serde(default)]
    pub use_if_where: bool,
    #[serde(default)]
    pub parameter_type: ParamStyle,
}

impl Default for GenerateDefaults {
    fn default() -> Self {
        Self {
            use_if_update: true,
            use_if_where: false,
            parameter_type: ParamStyle::Model,
        }
    }
}

fn default_true() -> bool {
    true
}

impl GenerateDefaults {
    /// Flags after applying command line overrides. A given switch wins in either
    /// direction; an absent one keeps the configured value.
    pub fn flags(
        &self,
        if_update: Option<bool>,
        if_where: Option<bool>,
        param_type: Option<ParamStyle>,
    ) -> GenerationFlags {
        GenerationFlags::new(
            if_update.unwrap_or(self.use_if_update),
            if_where.unwrap_or(self.use_if_where),
            param_type.unwrap_or(self.parameter_type),
        )
    }
}

// ============================================================================
// Config implementation
// ============================================================================

impl Config {
    /// Load from the default config file, falling back to defaults if it is absent
    pub fn load() -> Result<Self, Error> {
        match Self::load_from(Path::new(CONFIG_FILE)) {
            Err(Error::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        toml::from_str(&content).map_err(|e| Error::Parse(path.into(), e))
    }

    /// Replace the catalog, e.g. from `AUTOMAPPER_CATALOG`
    pub fn with_catalog(mut self, catalog: Option<String>) -> Self {
        if let Some(c) = catalog {
            self.catalog = Catalog::One(c);
        }
        self
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid glob '{0}': {1}")]
    Glob(String, #[source] glob::PatternError),

    #[error("no catalog files found: {0}")]
    NoCatalogFiles(String),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================
