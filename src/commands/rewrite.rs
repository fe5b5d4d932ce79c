//! Implementation of the `patchsub rewrite` command.

use crate::cli::RewriteArgs;
use crate::config::Config;
use crate::error::{PatchsubError, Result};
use crate::rewrite::{write_changes, BatchReport, PatchRewriter};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Execute the `patchsub rewrite` command.
///
/// Loads the rules, rewrites every patch in order, prints each altered
/// line pair to stderr, then prints a summary (or the JSON report) to
/// stdout.
pub fn cmd_rewrite(args: RewriteArgs) -> Result<()> {
    let mut config = Config::load_or_default(args.rules.as_deref())?;
    if let Some(suffix) = args.suffix {
        config.output_suffix = suffix;
        config.validate()?;
    }

    info!(
        patches = args.patches.len(),
        rules = config.rules.len(),
        suffix = %config.output_suffix,
        "starting rewrite"
    );

    let diagnostics = diagnostics_writer(args.quiet, io::stderr().lock());
    let report = rewrite_patches(&args.patches, &config, diagnostics)?;

    let rendered = if args.json {
        render_json(&report)?
    } else {
        render_summary(&report)
    };
    print!("{}", rendered);

    Ok(())
}

/// Where altered line pairs go: `stream`, or nowhere in quiet mode.
pub(crate) fn diagnostics_writer<'a, W: Write + 'a>(quiet: bool, stream: W) -> Box<dyn Write + 'a> {
    if quiet {
        Box::new(io::sink())
    } else {
        Box::new(stream)
    }
}

/// Rewrite `patches` in order with one shared rewriter, writing altered
/// line pairs to `diagnostics` after each file.
///
/// A failed diagnostic write aborts the run as an output error.
pub(crate) fn rewrite_patches<W: Write>(
    patches: &[PathBuf],
    config: &Config,
    mut diagnostics: W,
) -> Result<BatchReport> {
    let rules = config.rule_set();
    let mut rewriter = PatchRewriter::new(&rules);

    rewriter.rewrite_batch(patches, &config.output_suffix, |file| {
        write_changes(&mut diagnostics, &file.changes).map_err(|e| {
            PatchsubError::OutputError(format!(
                "failed to write diagnostics for '{}': {}",
                file.input.display(),
                e
            ))
        })
    })
}

/// The run report as pretty-printed JSON, with a trailing newline.
pub(crate) fn render_json(report: &BatchReport) -> Result<String> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| PatchsubError::UserError(format!("failed to serialize report: {}", e)))?;
    Ok(format!("{}\n", json))
}

/// One line per file, a blank line, then the run totals.
pub(crate) fn render_summary(report: &BatchReport) -> String {
    let mut out = String::new();
    for file in &report.files {
        out.push_str(&format!(
            "{} -> {} ({} line(s) changed)\n",
            file.input.display(),
            file.output.display(),
            file.changes.len()
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "Rewrote {} line(s) across {} patch(es); {} distinct addition(s) recorded.\n",
        report.lines_rewritten(),
        report.files.len(),
        report.table_entries
    ));
    out
}
