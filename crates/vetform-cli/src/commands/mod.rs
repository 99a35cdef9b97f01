//! Command implementations.
//!
//! Each submodule translates CLI arguments into core calls and displays the
//! results.  No validation rules live here.

pub mod check;
pub mod completions;
pub mod countries;
pub mod normalize;

use std::path::PathBuf;

use vetform_adapters::{BuiltinCatalog, FileCatalog};
use vetform_core::application::CountrySource;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Resolve the country whitelist source shared by `check` and `countries`.
///
/// Priority: an explicit file, then an explicit catalog name, then the
/// configured default, then the `global` built-in.
pub(crate) fn resolve_source(
    catalog: Option<&str>,
    countries_file: Option<PathBuf>,
    config: &AppConfig,
) -> CliResult<Box<dyn CountrySource>> {
    if let Some(path) = countries_file {
        return Ok(Box::new(FileCatalog::new(path)));
    }

    let name = catalog
        .map(str::to_string)
        .or_else(|| config.defaults.catalog.clone())
        .unwrap_or_else(|| "global".to_string());

    match BuiltinCatalog::named(&name) {
        Some(catalog) => Ok(Box::new(catalog)),
        None => Err(CliError::UnknownCatalog {
            name,
            available: BuiltinCatalog::NAMES.to_vec(),
        }),
    }
}
