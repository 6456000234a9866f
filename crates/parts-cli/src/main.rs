//! parts CLI
//!
//! Merges partial configuration files into a marker-delimited section of an
//! aggregate file, or removes that section again.

mod cli;
mod commands;
mod error;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Request};
use commands::OutputFormat;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "parts", &mut std::io::stdout());
        return Ok(());
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    match cli.request()? {
        Request::Build(config) => commands::run_build(config, format),
        Request::Remove(config) => commands::run_remove(config, format),
    }
}
