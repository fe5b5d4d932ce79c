//! Implementation of the `patchsub import` command.

use crate::cli::ImportArgs;
use crate::error::Result;
use crate::git::import_patches;
use std::path::Path;

use super::current_dir;

/// Execute the `patchsub import` command.
pub fn cmd_import(args: ImportArgs) -> Result<()> {
    let cwd = current_dir()?;
    print!("{}", run_import(&args, &cwd)?);
    Ok(())
}

/// Apply the patches to the repository at `cwd`.
pub(crate) fn run_import(args: &ImportArgs, cwd: &Path) -> Result<String> {
    import_patches(cwd, &args.patches, args.ignore_whitespace)?;
    Ok(format!("Applied {} patch(es).\n", args.patches.len()))
}
