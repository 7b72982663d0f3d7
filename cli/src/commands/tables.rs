//! Tables command - lists the tables in the catalog

use crate::config::Config;
use crate::db::{JsonCatalog, MetadataProvider};
use crate::error::CliError;
use crate::output;

pub fn run(config: &Config, filter: Option<&str>) -> Result<(), CliError> {
    let catalog = JsonCatalog::connect(&config.catalog)?;
    let names = matching(catalog.fetch_all_table_names()?, filter);

    if names.is_empty() {
        eprintln!("{}", output::muted("No tables found"));
        return Ok(());
    }

    for name in &names {
        println!("{name}");
    }
    Ok(())
}

/// Keep names containing `filter`, ignoring case.
fn matching(names: Vec<String>, filter: Option<&str>) -> Vec<String> {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => {
            let needle = f.to_lowercase();
            names
                .into_iter()
                .filter(|n| n.to_lowercase().contains(&needle))
                .collect()
        }
        None => names,
    }
}
