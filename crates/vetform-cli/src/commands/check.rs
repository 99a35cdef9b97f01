//! Implementation of the `vetform check` command.
//!
//! Responsibility: assemble a form record from a file, stdin, or field
//! flags, call the core validation service, and display the verdict.  No
//! rule logic lives here.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, instrument};

use vetform_adapters::form_file;
use vetform_core::{
    application::{ReportSummary, ValidationService},
    domain::{FormInput, PolicyProfile, ValidatorPolicy},
    error::VetformError,
};

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `vetform check` command.
///
/// Dispatch sequence:
/// 1. Resolve the policy (flag > config > strict preset)
/// 2. Resolve the whitelist source and build the service (setup errors stop
///    here, before any input is read)
/// 3. Assemble the form record (file/stdin, overlaid by field flags)
/// 4. Validate, as of `--as-of` when given
/// 5. Render the verdict (human rows or JSON)
/// 6. Map a rejected form to exit code 2
#[instrument(skip_all)]
pub fn execute(
    args: CheckArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Policy
    let policy = resolve_policy(&args, &config)?;

    // 2. Whitelist + service
    let source = super::resolve_source(args.catalog.as_deref(), args.countries_file.clone(), &config)?;
    let service =
        ValidationService::from_source(source.as_ref(), policy).map_err(CliError::Core)?;

    // 3. Form record
    let input = assemble_input(&args)?;
    let json = output.format() == OutputFormat::Json;
    if !json && args.form.is_some() && has_field_flags(&args) {
        output.warning("Field flags override values from the form file")?;
    }
    if !json && global.verbose > 0 {
        output.info(&format!(
            "Judging against {} accepted countries",
            service.countries().count()
        ))?;
    }

    // 4. Validate
    let report = match parse_as_of(args.as_of.as_deref())? {
        Some(today) => {
            if !json {
                output.print(&format!("Validating as of {today}"))?;
            }
            service.validate_at(&input, today)
        }
        None => service.validate(&input),
    };
    let summary = service.summarize(&report);
    debug!(
        valid = summary.is_valid,
        failures = summary.failures.len(),
        "Check finished"
    );

    // 5. Render
    render(&summary, &output)?;

    // 6. Exit status
    if summary.is_valid {
        Ok(())
    } else {
        Err(CliError::FormRejected {
            failures: summary.failures.len(),
        })
    }
}

// ── Policy resolution ─────────────────────────────────────────────────────────

fn resolve_policy(args: &CheckArgs, config: &AppConfig) -> CliResult<ValidatorPolicy> {
    if let Some(profile) = args.profile {
        return Ok(ValidatorPolicy::for_profile(profile.into()));
    }
    if let Some(policy) = &config.policy {
        return Ok(policy.clone());
    }
    if let Some(name) = &config.defaults.profile {
        let profile: PolicyProfile = name
            .parse()
            .map_err(|e| CliError::Core(VetformError::Domain(e)))?;
        return Ok(ValidatorPolicy::for_profile(profile));
    }
    Ok(ValidatorPolicy::strict())
}

// ── Input assembly ────────────────────────────────────────────────────────────

/// Build the record to judge: file or stdin first, field flags overlaid.
fn assemble_input(args: &CheckArgs) -> CliResult<FormInput> {
    let mut input = match &args.form {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .with_cli_context(|| "reading form record from stdin")?;
            form_file::parse(&text, Path::new("<stdin>")).map_err(CliError::Core)?
        }
        Some(path) => form_file::load(path).map_err(CliError::Core)?,
        None => {
            if !has_field_flags(args) {
                return Err(CliError::MissingFormInput);
            }
            FormInput::default()
        }
    };

    if let Some(name) = &args.full_name {
        input.full_name = name.as_str().into();
    }
    if let Some(email) = &args.email {
        input.email = email.as_str().into();
    }
    if let Some(date) = &args.birth_date {
        input.birth_date = date.as_str().into();
    }
    if let Some(country) = &args.country {
        input.country = country.as_str().into();
    }
    if let Some(comments) = &args.comments {
        input.comments = comments.as_str().into();
    }
    Ok(input)
}

fn has_field_flags(args: &CheckArgs) -> bool {
    args.full_name.is_some()
        || args.email.is_some()
        || args.birth_date.is_some()
        || args.country.is_some()
        || args.comments.is_some()
}

fn parse_as_of(as_of: Option<&str>) -> CliResult<Option<NaiveDate>> {
    let Some(text) = as_of else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| CliError::InvalidInput {
            message: format!("--as-of must be an ISO date (YYYY-MM-DD), got '{text}'"),
        })
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render(summary: &ReportSummary, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(summary).map_err(|e| CliError::InvalidInput {
            message: format!("could not serialize report: {e}"),
        })?;
        output.payload(&json)?;
        return Ok(());
    }

    if summary.is_valid {
        output.success("Form is valid")?;
        return Ok(());
    }

    // The failure list is the command's product — visible even under -q.
    output.error("Form rejected:")?;
    for failure in &summary.failures {
        output.field_failure(&failure.field, &failure.message)?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
