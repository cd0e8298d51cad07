//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();
    let out = &mut std::io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, "catalog", out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, "catalog", out),
        Shell::Fish => generate(shells::Fish, &mut cmd, "catalog", out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, "catalog", out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, "catalog", out),
    };

    Ok(())
}
