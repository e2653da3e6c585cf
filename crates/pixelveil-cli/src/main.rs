use clap::Parser;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub(crate) type CliResult<T> = std::result::Result<T, pixelveil_core::PixelveilError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();

    match args.command {
        Commands::Hide(cmd) => cmd.run(),
        Commands::Unveil(cmd) => cmd.run(),
    }
}
