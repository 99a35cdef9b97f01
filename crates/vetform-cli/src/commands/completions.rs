//! Implementation of the `vetform completions` command.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::{
    cli::{Cli, CompletionsArgs},
    error::CliResult,
};

/// Execute the `vetform completions` command.
///
/// Writes the completion script for the requested shell to stdout; the user
/// redirects it into their shell's completion directory.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "vetform", &mut io::stdout());
    Ok(())
}
