//! Git command runner for patchsub.
//!
//! Wraps the two git commands a rewrite sits between: `format-patch`, which
//! exports a commit range as one patch file per commit, and `am`, which
//! re-imports the rewritten artifacts. All git operations go through
//! `run_git`.

use crate::error::{PatchsubError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(PatchsubError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P, S>(cwd: P, args: &[S]) -> Result<GitOutput>
where
    P: AsRef<Path>,
    S: AsRef<OsStr>,
{
    let cwd = cwd.as_ref();
    let subcommand = args
        .first()
        .map(|a| a.as_ref().to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!(cwd = %cwd.display(), subcommand = %subcommand, "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            PatchsubError::GitError(format!("failed to execute git {}: {}", subcommand, e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(PatchsubError::GitError(format!(
            "git {} failed (exit code {}): {}",
            subcommand, exit_code, error_msg
        )))
    }
}

/// Check that `cwd` is inside a git repository.
///
/// Returns a `UserError` rather than a `GitError` so that running outside
/// a repository is reported as a usage mistake.
pub fn ensure_repository<P: AsRef<Path>>(cwd: P) -> Result<()> {
    run_git(cwd.as_ref(), &["rev-parse", "--git-dir"])
        .map(|_| ())
        .map_err(|_| {
            PatchsubError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            )
        })
}

/// Check if the working directory has uncommitted tracked changes.
pub fn has_uncommitted_changes<P: AsRef<Path>>(cwd: P) -> Result<bool> {
    let output = run_git(cwd, &["status", "--porcelain", "--untracked-files=no"])?;
    Ok(!output.is_empty())
}

/// Export `range` as one patch file per commit into `output_dir`.
///
/// Runs `git format-patch --output-directory <output_dir> <range>` and
/// returns the written patch paths in series order.
pub fn export_patches<P: AsRef<Path>>(
    cwd: P,
    range: &str,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let cwd = cwd.as_ref();
    ensure_repository(cwd)?;

    let args: [&OsStr; 4] = [
        OsStr::new("format-patch"),
        OsStr::new("--output-directory"),
        output_dir.as_os_str(),
        OsStr::new(range),
    ];
    let output = run_git(cwd, &args)?;

    Ok(output
        .lines()
        .into_iter()
        .map(|line| cwd.join(line))
        .collect())
}

/// Apply `patches` in order with `git am`.
///
/// Refuses to run when tracked files have uncommitted changes, since `am`
/// would mix them into the recreated commits.
pub fn import_patches<P: AsRef<Path>>(
    cwd: P,
    patches: &[PathBuf],
    ignore_whitespace: bool,
) -> Result<()> {
    let cwd = cwd.as_ref();
    ensure_repository(cwd)?;

    if patches.is_empty() {
        return Err(PatchsubError::UserError(
            "no patches given to import".to_string(),
        ));
    }

    if has_uncommitted_changes(cwd)? {
        return Err(PatchsubError::UserError(format!(
            "working tree has uncommitted changes.\n\
             Path: {}\n\n\
             Please commit, stash, or revert changes before importing patches.",
            cwd.display()
        )));
    }

    let mut args: Vec<&OsStr> = vec![OsStr::new("am")];
    if ignore_whitespace {
        args.push(OsStr::new("--ignore-whitespace"));
    }
    args.extend(patches.iter().map(|p| p.as_os_str()));

    run_git(cwd, &args)?;
    Ok(())
}
