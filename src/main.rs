mod commands;
mod domain;
mod logger;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::simulate_cmd::simulate_command;
use crate::commands::sweep_cmd::sweep_command;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logger::init(args.log_file.as_deref());

    match args.command {
        cmd @ Commands::Simulate { .. } => simulate_command(cmd),
        cmd @ Commands::Sweep { .. } => sweep_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            generate(shell, &mut command, "adbreaks", &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
