//! Catalog command implementation.

use crate::error::Result;
use crate::output::Formatter;
use milsym_domain::catalog;

/// Execute the catalog command.
pub fn execute_catalog(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_catalog(catalog::UNITS)?);
    Ok(())
}
