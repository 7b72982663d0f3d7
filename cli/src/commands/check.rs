//! Check command - validates configuration and catalog

use crate::config::Config;
use crate::db::{ConnectionProbe, JsonCatalog};
use crate::error::CliError;
use crate::output;

pub fn run(config: &Config) -> Result<(), CliError> {
    println!("{}", output::heading("Checking configuration..."));
    println!();
    println!("  {}: {}", output::label("Catalog"), config.catalog.display());
    println!(
        "  {}: {}",
        output::label("Parameter type"),
        config.generate.parameter_type
    );

    println!();
    print!("  {} Catalog files... ", output::label("Checking"));
    let catalog = match JsonCatalog::open(&config.catalog) {
        Ok(catalog) => {
            println!("{}", output::status_ok());
            for f in catalog.files() {
                println!("    {}", f.display());
            }
            catalog
        }
        Err(e) => {
            println!("{}", output::status_error());
            return Err(e.into());
        }
    };

    println!();
    print!("  {} Database... ", output::label("Checking"));
    match catalog.check_connection() {
        Ok(info) => {
            println!("{}", output::status_ok());
            println!("    {}: {}", output::label("Product"), info.product);
            println!("    {}: {}", output::label("Tables"), info.tables);
        }
        Err(e) => {
            println!("{}", output::status_error());
            return Err(e.into());
        }
    }

    println!();
    println!("{}", output::success("Configuration is valid"));
    Ok(())
}
