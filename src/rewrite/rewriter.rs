//! The patch rewriter: applies rules to additions and propagates the
//! results to deletions and context lines across a batch of patches.

use crate::error::{PatchsubError, Result};
use crate::rules::RuleSet;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::line::{split_terminator, DiffLine};
use super::table::PropagationTable;

/// A single altered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChange {
    /// Line number in the patch file (1-based).
    pub line_number: usize,
    /// The line as it was, without its terminator.
    pub original: String,
    /// The line as written to the output, without its terminator.
    pub rewritten: String,
}

/// Result of rewriting one patch's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenPatch {
    pub content: String,
    pub changes: Vec<LineChange>,
}

/// Result of rewriting one patch file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub changes: Vec<LineChange>,
}

/// Result of rewriting a batch of patch files.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    /// Number of distinct addition payloads that were rewritten.
    pub table_entries: usize,
}

impl BatchReport {
    pub fn lines_rewritten(&self) -> usize {
        self.files.iter().map(|f| f.changes.len()).sum()
    }
}

/// Rewrites patches in order, sharing one propagation table.
///
/// Construct one per run. Patches must be fed in series order: a deletion
/// or context line is only rewritten if its text was rewritten as an
/// addition earlier in the same run.
#[derive(Debug)]
pub struct PatchRewriter<'r> {
    rules: &'r RuleSet,
    table: PropagationTable,
}

impl<'r> PatchRewriter<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            rules,
            table: PropagationTable::new(),
        }
    }

    pub fn table(&self) -> &PropagationTable {
        &self.table
    }

    /// Rewrite the text of one patch.
    ///
    /// Line terminators are preserved exactly, including a missing final
    /// newline.
    pub fn rewrite_text(&mut self, content: &str) -> RewrittenPatch {
        let mut output = String::with_capacity(content.len());
        let mut changes = Vec::new();

        for (index, raw) in content.split_inclusive('\n').enumerate() {
            let (text, terminator) = split_terminator(raw);

            match self.rewrite_line(text) {
                Some(rewritten) => {
                    output.push_str(&rewritten);
                    output.push_str(terminator);
                    changes.push(LineChange {
                        line_number: index + 1,
                        original: text.to_string(),
                        rewritten,
                    });
                }
                None => output.push_str(raw),
            }
        }

        RewrittenPatch {
            content: output,
            changes,
        }
    }

    /// Returns the replacement for `text`, or `None` if the line is kept.
    fn rewrite_line(&mut self, text: &str) -> Option<String> {
        match DiffLine::classify(text) {
            DiffLine::Header | DiffLine::Other => None,
            DiffLine::Addition(payload) => {
                let (rewritten, changed) = self.rules.apply(payload);
                if !changed {
                    return None;
                }
                self.table.record(payload, &rewritten);
                Some(format!("+{}", rewritten))
            }
            DiffLine::Deletion(payload) => self.propagate('-', payload),
            DiffLine::Context(payload) => self.propagate(' ', payload),
        }
    }

    fn propagate(&self, marker: char, payload: &str) -> Option<String> {
        let rewritten = self.table.lookup(payload)?;
        trace!(marker = %marker, payload, "propagated earlier rewrite");
        Some(format!("{}{}", marker, rewritten))
    }

    /// Rewrite one patch file into `<path><suffix>`.
    ///
    /// The input file is never modified. The output is written only after
    /// the whole file has been processed.
    pub fn rewrite_file<P: AsRef<Path>>(&mut self, path: P, suffix: &str) -> Result<FileReport> {
        let path = path.as_ref();
        debug!(path = %path.display(), "rewriting patch");

        let content = std::fs::read_to_string(path).map_err(|e| {
            PatchsubError::InputError(format!("'{}': {}", path.display(), e))
        })?;

        let rewritten = self.rewrite_text(&content);
        let output = output_path(path, suffix);
        crate::fs::atomic_write_file(&output, &rewritten.content)?;

        debug!(
            output = %output.display(),
            changes = rewritten.changes.len(),
            table_entries = self.table.len(),
            "wrote rewritten patch"
        );

        Ok(FileReport {
            input: path.to_path_buf(),
            output,
            changes: rewritten.changes,
        })
    }

    /// Rewrite every file in order, calling `on_file` after each one.
    ///
    /// Stops at the first failure, including a failure returned by
    /// `on_file`.
    pub fn rewrite_batch<P, F>(
        &mut self,
        paths: &[P],
        suffix: &str,
        mut on_file: F,
    ) -> Result<BatchReport>
    where
        P: AsRef<Path>,
        F: FnMut(&FileReport) -> Result<()>,
    {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let report = self.rewrite_file(path, suffix)?;
            on_file(&report)?;
            files.push(report);
        }

        Ok(BatchReport {
            files,
            table_entries: self.table.len(),
        })
    }
}

/// The sibling artifact path for `input`: the input path with `suffix`
/// appended.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
