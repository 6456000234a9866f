//! CLI argument parsing using clap derive

use clap::Parser;
use clap_complete::Shell;
use parts_core::{BuildConfig, RemoveConfig};

use crate::error::{CliError, Result};

const LONG_ABOUT: &str = "\
Merge partial configuration files into an aggregate file, or remove the merged section.

Designed primarily for SSH configs: keep one file per host group in ~/.ssh/config.d
and merge them into ~/.ssh/config. The merged section is bounded by comment markers,
so running the command again replaces it instead of appending another copy.

Partials are merged in file name order (byte-wise). Subdirectories are skipped.
Marker text must never appear inside a partial.

Comment styles keep the markers valid comments in the target file:
  Predefined: \"#\", \"//\", \"--\", \"/*\", \";\", \"%\", \"<!--\", \"'\", \"rem\", \"::\"
  Auto:       \"auto\" picks a style from the aggregate file extension (default \"#\")
  Custom:     any other string is used as a line comment prefix";

const EXAMPLES: &str = "\
Examples:
  parts ~/.ssh/config ~/.ssh/config.d \"#\"
  parts app.js ./partials \"//\"
  parts schema.sql ./sql-partials auto
  parts --dry-run ~/.ssh/config ~/.ssh/config.d \"#\"
  parts --remove ~/.ssh/config \"#\"
  parts --remove styles.css \"/*\"";

/// parts - Merge partial files into a marker-delimited section of an aggregate file
#[derive(Parser, Debug)]
#[command(name = "parts")]
#[command(author, version, about, long_about = LONG_ABOUT, after_help = EXAMPLES)]
pub struct Cli {
    /// Remove the partials section instead of building it
    #[arg(short, long)]
    pub remove: bool,

    /// Preview the result without writing the aggregate file
    #[arg(
        short = 'n',
        long,
        env = "PARTS_DRY_RUN",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub dry_run: bool,

    /// Print the operation report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,

    /// <AGGREGATE_FILE> [PARTIALS_DIR] <COMMENT_STYLE>
    #[arg(value_name = "ARGS", num_args = 0..=3)]
    pub args: Vec<String>,
}

/// A validated request for one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Build(BuildConfig),
    Remove(RemoveConfig),
}

impl Cli {
    /// Validate the positional arguments for the selected mode and build
    /// the operation's configuration.
    pub fn request(&self) -> Result<Request> {
        if self.remove {
            match self.args.as_slice() {
                [aggregate, style] => Ok(Request::Remove(
                    RemoveConfig::new(aggregate, style).with_dry_run(self.dry_run),
                )),
                other => Err(CliError::user(format!(
                    "remove mode requires exactly 2 arguments: <aggregate-file> <comment-style>, got {}",
                    other.len()
                ))),
            }
        } else {
            match self.args.as_slice() {
                [aggregate, partials_dir, style] => Ok(Request::Build(
                    BuildConfig::new(aggregate, partials_dir, style).with_dry_run(self.dry_run),
                )),
                other => Err(CliError::user(format!(
                    "build mode requires exactly 3 arguments: <aggregate-file> <partials-directory> <comment-style>, got {}",
                    other.len()
                ))),
            }
        }
    }
}
