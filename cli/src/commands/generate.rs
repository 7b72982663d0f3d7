//! Generate command - prints the mapper statements for one table

use std::io::{self, IsTerminal};

use automapper_core::MapperGenerator;
use automapper_types::{GenerationFlags, ParamStyle};
use inquire::Select;

use crate::config::Config;
use crate::db::{JsonCatalog, MetadataProvider};
use crate::error::CliError;

pub fn run(
    config: &Config,
    table: Option<String>,
    if_update: Option<bool>,
    if_where: Option<bool>,
    param_type: Option<ParamStyle>,
) -> Result<(), CliError> {
    let catalog = JsonCatalog::connect(&config.catalog)?;
    let flags = config.generate.flags(if_update, if_where, param_type);

    let table = match table {
        Some(t) => t,
        None => pick_table(&catalog)?,
    };

    let mapper = render(&catalog, &table, flags)?;
    print!("{mapper}");
    Ok(())
}

/// Fetch `table` and render all four statements under the provider's spelling of
/// its name.
///
/// Blank table names and tables without columns are rejected before anything is
/// generated.
pub fn render<P: MetadataProvider>(
    provider: &P,
    table: &str,
    flags: GenerationFlags,
) -> Result<String, CliError> {
    let name = table.trim();
    if name.is_empty() {
        return Err(CliError::NoTable);
    }

    let table = provider.fetch_table(name)?;
    if table.is_empty() {
        return Err(CliError::NoColumns(name.to_string()));
    }

    Ok(MapperGenerator::new(flags).generate(&table))
}

/// Let the user pick a table interactively.
fn pick_table(catalog: &JsonCatalog) -> Result<String, CliError> {
    if !io::stdin().is_terminal() {
        return Err(CliError::NoTable);
    }

    let names = catalog.fetch_all_table_names()?;
    if names.is_empty() {
        return Err(CliError::Other("Catalog contains no tables".into()));
    }

    Select::new("Select table:", names)
        .with_page_size(15)
        .prompt()
        .map_err(|e| CliError::Other(format!("Prompt cancelled: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use automapper_types::ColumnDescriptor;

    struct Fixed(Vec<ColumnDescriptor>);

    impl MetadataProvider for Fixed {
        fn fetch_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, db::Error> {
            Ok(if table == "EMP" {
                self.0.clone()
            } else {
                Vec::new()
            })
        }

        fn fetch_all_table_names(&self) -> Result<Vec<String>, db::Error> {
            Ok(vec!["EMP".into()])
        }
    }

    fn emp() -> Fixed {
        Fixed(vec![
            ColumnDescriptor::new("EMP_ID", "NUMBER").primary(),
            ColumnDescriptor::new("EMP_NAME", "VARCHAR2(50)"),
        ])
    }

    #[test]
    fn renders_all_statements() {
        let out = render(&emp(), "EMP", GenerationFlags::default()).unwrap();
        for tag in ["</select>", "</insert>", "</update>", "</delete>"] {
            assert!(out.contains(tag), "missing {tag}");
        }
    }

    #[test]
    fn trims_table_name() {
        let out = render(&emp(), "  EMP ", GenerationFlags::default()).unwrap();
        assert!(out.contains("FROM EMP\n"));
    }

    #[test]
    fn blank_table_name() {
        let err = render(&emp(), "   ", GenerationFlags::default()).unwrap_err();
        assert!(matches!(err, CliError::NoTable));
    }

    #[test]
    fn table_without_columns() {
        let err = render(&emp(), "DEPT", GenerationFlags::default()).unwrap_err();
        assert!(matches!(err, CliError::NoColumns(t) if t == "DEPT"));
    }
}
