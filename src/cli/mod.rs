//! CLI argument parsing for patchsub.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Patchsub: rename words across a series of git patches.
///
/// Typical workflow:
/// - `patchsub export mybranch~9` writes one patch per commit
/// - `patchsub rewrite patches/*.patch` writes `.new` artifacts
/// - `git reset --hard mybranch~9`
/// - `patchsub import patches/*.patch.new` recreates the commits
#[derive(Parser, Debug)]
#[command(name = "patchsub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for patchsub.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite patch files with the substitution rules.
    ///
    /// Patches are processed in the order given. Each input `P` produces
    /// `P.new`; inputs are never modified. Every altered line is printed
    /// to stderr as an original/rewritten pair.
    Rewrite(RewriteArgs),

    /// Print the active substitution rules in order.
    Rules(RulesArgs),

    /// Export a commit range as patch files (`git format-patch`).
    Export(ExportArgs),

    /// Import rewritten patch files as commits (`git am`).
    Import(ImportArgs),
}

/// Arguments for the `rewrite` command.
#[derive(Parser, Debug)]
pub struct RewriteArgs {
    /// Patch files, in series order.
    #[arg(required = true)]
    pub patches: Vec<PathBuf>,

    /// YAML rules file replacing the built-in rules.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Suffix appended to each input path for its output.
    #[arg(long)]
    pub suffix: Option<String>,

    /// Do not print altered lines.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// YAML rules file replacing the built-in rules.
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Revision range, e.g. `mybranch~9`.
    pub range: String,

    /// Directory to write patch files into.
    #[arg(short, long, default_value = "patches")]
    pub output_dir: PathBuf,
}

/// Arguments for the `import` command.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Patch files to apply, in series order.
    #[arg(required = true)]
    pub patches: Vec<PathBuf>,

    /// Do not pass `--ignore-whitespace` to `git am`.
    #[arg(long = "no-ignore-whitespace", action = ArgAction::SetFalse)]
    pub ignore_whitespace: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
