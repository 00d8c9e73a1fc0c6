pub mod check;
pub mod extract;

use anyhow::Result;
use clap::Subcommand;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Write the "ours" version of conflicted content
    Extract(extract::ExtractArgs),
    /// Check files for unresolved conflict regions
    Check(check::CheckArgs),
}

pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Extract(args) => extract::run(&args),
        Commands::Check(args) => check::run(&args),
    }
}
