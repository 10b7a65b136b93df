use clap::Parser;

mod cli;
mod commands;
mod recent;

use cli::{CliArgs, Commands};

pub type CliResult<T = ()> = codesticker_core::Result<T>;

fn main() -> CliResult {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Create(cmd) => cmd.run(),
        Commands::Scan(cmd) => cmd.run(),
    }
}
