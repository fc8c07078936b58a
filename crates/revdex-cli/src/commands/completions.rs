//! Implementation of the `revdex completions` command.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::{cli::Cli, cli::CompletionsArgs, error::CliResult};

/// Write a completion script for the requested shell to stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "revdex", &mut io::stdout());
    Ok(())
}
