//! Table metadata access for CLI commands
//!
//! Commands only talk to the [`MetadataProvider`] and [`ConnectionProbe`] traits.
//! [`JsonCatalog`] implements both over column catalogs exported from the Oracle
//! data dictionary.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use automapper_types::{ColumnDescriptor, Table};
use serde::Deserialize;

use crate::config::{self, Catalog};

/// Source of table column metadata.
pub trait MetadataProvider {
    /// Columns of `table` in dictionary order; empty if the table is unknown.
    fn fetch_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, Error>;

    /// All table names, sorted and de-duplicated.
    fn fetch_all_table_names(&self) -> Result<Vec<String>, Error>;

    /// The table with its columns, named as the source spells it.
    fn fetch_table(&self, table: &str) -> Result<Table, Error> {
        Ok(Table::new(table, self.fetch_columns(table)?))
    }
}

/// Connectivity check against a metadata source.
pub trait ConnectionProbe {
    fn check_connection(&self) -> Result<ConnectionInfo, Error>;
}

/// Summary of a successful connectivity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// Database product name recorded in the catalog
    pub product: String,
    /// Number of catalog files read
    pub files: usize,
    /// Number of distinct tables
    pub tables: usize,
}

/// Product name fragment every catalog must carry
const SUPPORTED_PRODUCT: &str = "oracle";

// ============================================================================
// Catalog file format
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    #[serde(default)]
    product: String,
    #[serde(default)]
    tables: Vec<Table>,
}

// ============================================================================
// JSON catalog
// ============================================================================

/// Column catalog read from one or more JSON files.
///
/// Later files win when two files describe the same table.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    files: Vec<PathBuf>,
    product: String,
    tables: BTreeMap<String, Table>,
}

impl JsonCatalog {
    /// Resolve the configured catalog patterns and read every matching file
    pub fn open(catalog: &Catalog) -> Result<Self, Error> {
        let files = catalog.files()?;
        Self::from_files(files)
    }

    /// Open the catalog and verify it is a reachable Oracle catalog
    pub fn connect(catalog: &Catalog) -> Result<Self, Error> {
        let catalog = Self::open(catalog)?;
        let info = catalog.check_connection()?;
        tracing::debug!(product = %info.product, tables = info.tables, "catalog connected");
        Ok(catalog)
    }

    /// Read and merge the given catalog files, in order
    pub fn from_files(files: Vec<PathBuf>) -> Result<Self, Error> {
        let mut product = String::new();
        let mut tables = BTreeMap::new();

        for path in &files {
            let file = read_catalog(path)?;
            tracing::debug!(
                path = %path.display(),
                tables = file.tables.len(),
                "loaded catalog file"
            );

            if product.is_empty() {
                product = file.product;
            } else if !file.product.is_empty() && file.product != product {
                tracing::warn!(
                    path = %path.display(),
                    product = %file.product,
                    "catalog product differs from {product}"
                );
            }

            for table in file.tables {
                if tables.contains_key(&table.name) {
                    tracing::debug!(table = %table.name, "table replaced by later catalog file");
                }
                tables.insert(table.name.clone(), table);
            }
        }

        Ok(Self {
            files,
            product,
            tables,
        })
    }

    /// Catalog files in read order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Look up a table: exact name first, then ASCII case-insensitive.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name).or_else(|| {
            self.tables
                .values()
                .find(|t| t.name.eq_ignore_ascii_case(name))
        })
    }
}

fn read_catalog(path: &Path) -> Result<CatalogFile, Error> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io(path.into(), e))?;
    serde_json::from_str(&content).map_err(|e| Error::Parse(path.into(), e))
}

impl MetadataProvider for JsonCatalog {
    fn fetch_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, Error> {
        match self.table(table) {
            Some(t) => Ok(t.columns.clone()),
            None => {
                tracing::debug!(table, "table not in catalog");
                Ok(Vec::new())
            }
        }
    }

    fn fetch_all_table_names(&self) -> Result<Vec<String>, Error> {
        // BTreeMap keys are already sorted and unique
        Ok(self.tables.keys().cloned().collect())
    }

    fn fetch_table(&self, table: &str) -> Result<Table, Error> {
        Ok(self
            .table(table)
            .cloned()
            .unwrap_or_else(|| Table::new(table, Vec::new())))
    }
}

impl ConnectionProbe for JsonCatalog {
    fn check_connection(&self) -> Result<ConnectionInfo, Error> {
        if !self.product.to_lowercase().contains(SUPPORTED_PRODUCT) {
            return Err(Error::UnsupportedDatabase(if self.product.is_empty() {
                "(unknown)".into()
            } else {
                self.product.clone()
            }));
        }

        Ok(ConnectionInfo {
            product: self.product.clone(),
            files: self.files.len(),
            tables: self.tables.len(),
        })
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::Error),

    #[error("failed to read catalog {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse catalog {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("unsupported database '{0}': only Oracle catalogs are supported")]
    UnsupportedDatabase(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HR: &str = r#"{
        "product": "Oracle Database 19c Enterprise Edition",
        "tables": [
            {
                "tableName": "EMP",
                "tableComments": "Employees",
                "columns": [
                    { "columnName": "EMP_ID", "dataType": "NUMBER", "primaryKey": "Y", "columnComments": "사번" },
                    { "columnName": "EMP_NAME", "dataType": "VARCHAR2(50)", "primaryKey": "N" }
                ]
            },
            { "tableName": "DEPT", "columns": [] }
        ]
    }"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_dictionary_columns() {
        let temp = TempDir::new().unwrap();
        let catalog = JsonCatalog::from_files(vec![write(&temp, "hr.json", HR)]).unwrap();

        let columns = catalog.fetch_columns("EMP").unwrap();
        assert_eq!(
            columns,
            vec![
                ColumnDescriptor::new("EMP_ID", "NUMBER")
                    .primary()
                    .with_comment("사번"),
                ColumnDescriptor::new("EMP_NAME", "VARCHAR2(50)"),
            ]
        );
    }

    #[test]
    fn lookup_falls_back_to_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let catalog = JsonCatalog::from_files(vec![write(&temp, "hr.json", HR)]).unwrap();
        assert_eq!(catalog.fetch_columns("emp").unwrap().len(), 2);
        assert_eq!(catalog.table("Emp").map(|t| t.name.as_str()), Some("EMP"));
    }

    #[test]
    fn fetch_table_keeps_catalog_spelling() {
        let temp = TempDir::new().unwrap();
        let catalog = JsonCatalog::from_files(vec![write(&temp, "hr.json", HR)]).unwrap();

        let table = catalog.fetch_table("emp").unwrap();
        assert_eq!(table.name, "EMP");
        assert_eq!(table.comment.as_deref(), Some("Employees"));
        assert_eq!(table.columns.len(), 2);

        let missing = catalog.fetch_table("nope").unwrap();
        assert_eq!(missing.name, "nope");
        assert!(missing.is_empty());
    }

    #[test]
    fn unknown_table_is_empty() {
        let temp = TempDir::new().unwrap();
        let catalog = JsonCatalog::from_files(vec![write(&temp, "hr.json", HR)]).unwrap();
        assert!(catalog.fetch_columns("NOPE").unwrap().is_empty());
    }

    #[test]
    fn table_names_are_sorted() {
        let temp = TempDir::new().unwrap();
        let catalog = JsonCatalog::from_files(vec![write(&temp, "hr.json", HR)]).unwrap();
        assert_eq!(catalog.fetch_all_table_names().unwrap(), ["DEPT", "EMP"]);
    }

    #[test]
    fn later_files_replace_tables() {
        let temp = TempDir::new().unwrap();
        let first = write(&temp, "a.json", HR);
        let second = write(
            &temp,
            "b.json",
            r#"{ "tables": [ { "tableName": "EMP", "columns": [ { "columnName": "ID", "dataType": "NUMBER", "primaryKey": true } ] } ] }"#,
        );
        let catalog = JsonCatalog::from_files(vec![first, second]).unwrap();

        assert_eq!(
            catalog.fetch_columns("EMP").unwrap(),
            vec![ColumnDescriptor::new("ID", "NUMBER").primary()]
        );
        assert_eq!(catalog.fetch_all_table_names().unwrap(), ["DEPT", "EMP"]);

        let info = catalog.check_connection().unwrap();
        assert_eq!(info.files, 2);
        assert_eq!(info.tables, 2);
        assert!(info.product.starts_with("Oracle"));
    }

    #[test]
    fn check_rejects_other_products() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "pg.json", r#"{ "product": "PostgreSQL 16", "tables": [] }"#);
        let err = JsonCatalog::from_files(vec![path])
            .unwrap()
            .check_connection()
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedDatabase(p) if p == "PostgreSQL 16"));
    }

    #[test]
    fn connect_checks_the_catalog() {
        let temp = TempDir::new().unwrap();
        write(&temp, "catalog.json", r#"{ "product": "MySQL 8.0", "tables": [] }"#);
        let pattern = temp.path().join("*.json").to_string_lossy().into_owned();
        assert!(matches!(
            JsonCatalog::connect(&Catalog::One(pattern)),
            Err(Error::UnsupportedDatabase(_))
        ));

        write(&temp, "catalog.json", HR);
        let pattern = temp.path().join("*.json").to_string_lossy().into_owned();
        assert!(JsonCatalog::connect(&Catalog::One(pattern)).is_ok());
    }

    #[test]
    fn check_rejects_missing_product() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "x.json", r#"{ "tables": [] }"#);
        let catalog = JsonCatalog::from_files(vec![path]).unwrap();
        assert!(matches!(
            catalog.check_connection(),
            Err(Error::UnsupportedDatabase(_))
        ));
    }

    #[test]
    fn malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "bad.json", "{ \"tables\": [");
        assert!(matches!(
            JsonCatalog::from_files(vec![path]),
            Err(Error::Parse(..))
        ));
    }

    #[test]
    fn missing_file() {
        let err = JsonCatalog::from_files(vec![PathBuf::from("does/not/exist.json")]).unwrap_err();
        assert!(matches!(err, Error::Io(..)));
    }

    #[test]
    fn open_resolves_config_catalog() {
        let temp = TempDir::new().unwrap();
        write(&temp, "hr.json", HR);
        let pattern = temp.path().join("*.json").to_string_lossy().into_owned();
        let catalog = JsonCatalog::open(&Catalog::One(pattern)).unwrap();
        assert_eq!(catalog.files().len(), 1);

        let err = JsonCatalog::open(&Catalog::One("nothing/*.json".into())).unwrap_err();
        assert!(matches!(err, Error::Config(config::Error::NoCatalogFiles(_))));
    }
}
