//! Command implementations for patchsub.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod export;
mod import;
mod rewrite;
mod rules;


use crate::cli::Command;
use crate::error::{PatchsubError, Result};
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Rewrite(args) => rewrite::cmd_rewrite(args),
        Command::Rules(args) => rules::cmd_rules(args),
        Command::Export(args) => export::cmd_export(args),
        Command::Import(args) => import::cmd_import(args),
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        PatchsubError::UserError(format!("failed to get current directory: {}", e))
    })
}
