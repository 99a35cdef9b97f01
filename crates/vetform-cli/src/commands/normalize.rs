//! Implementation of the `vetform normalize` command.
//!
//! Exposes the name-normalization utility on its own: UIs store and display
//! the normalized form, so it must be reachable without running a full
//! validation.

use tracing::instrument;

use vetform_core::domain::normalize_full_name;

use crate::{
    cli::{NormalizeArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `vetform normalize` command.
#[instrument(skip_all)]
pub fn execute(args: NormalizeArgs, output: OutputManager) -> CliResult<()> {
    let normalized = normalize_full_name(&args.name);

    if output.format() == OutputFormat::Json {
        let json = serde_json::json!({
            "input": args.name,
            "normalized": normalized,
        });
        let text = serde_json::to_string_pretty(&json).map_err(|e| CliError::InvalidInput {
            message: format!("could not serialize result: {e}"),
        })?;
        output.payload(&text)?;
        return Ok(());
    }

    output.payload(&normalized)?;
    Ok(())
}
