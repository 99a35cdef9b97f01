//! Implementation of the `vetform countries` command.
//!
//! Lists the whitelist the validator would judge against, after the same
//! construction checks `check` performs — so an empty or unreadable
//! whitelist fails here with the same error it would fail with at
//! validation setup.

use tracing::instrument;

use vetform_core::{application::ValidationService, domain::ValidatorPolicy};

use crate::{
    cli::{CountriesArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `vetform countries` command.
#[instrument(skip_all)]
pub fn execute(
    args: CountriesArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let source = super::resolve_source(args.catalog.as_deref(), args.countries_file.clone(), &config)?;
    let origin = source.origin();
    let service = ValidationService::from_source(source.as_ref(), ValidatorPolicy::strict())
        .map_err(CliError::Core)?;

    let countries: Vec<&str> = service.countries().collect();

    if output.format() == OutputFormat::Json {
        let json =
            serde_json::to_string_pretty(&countries).map_err(|e| CliError::InvalidInput {
                message: format!("could not serialize country list: {e}"),
            })?;
        output.payload(&json)?;
        return Ok(());
    }

    if !global.quiet {
        output.header(&format!(
            "Accepted countries ({}, {} entries):",
            origin,
            countries.len()
        ))?;
    }
    for country in countries {
        output.payload(country)?;
    }
    Ok(())
}
