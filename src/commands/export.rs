//! Implementation of the `patchsub export` command.

use crate::cli::ExportArgs;
use crate::error::Result;
use crate::git::export_patches;
use std::path::Path;

use super::current_dir;

/// Execute the `patchsub export` command.
///
/// Prints each written patch path, one per line, so the output can be fed
/// straight to `patchsub rewrite`.
pub fn cmd_export(args: ExportArgs) -> Result<()> {
    let cwd = current_dir()?;
    print!("{}", run_export(&args, &cwd)?);
    Ok(())
}

/// Export from the repository at `cwd` and list the written patches,
/// relative to `cwd` where possible.
pub(crate) fn run_export(args: &ExportArgs, cwd: &Path) -> Result<String> {
    let patches = export_patches(cwd, &args.range, &args.output_dir)?;

    if patches.is_empty() {
        eprintln!("No commits in range '{}'.", args.range);
    }

    let mut out = String::new();
    for patch in &patches {
        let shown = patch.strip_prefix(cwd).unwrap_or(patch.as_path());
        out.push_str(&format!("{}\n", shown.display()));
    }
    Ok(out)
}
