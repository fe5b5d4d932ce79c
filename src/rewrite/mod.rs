//! Patch rewriting for patchsub.
//!
//! Additions (`+`) are run through the rule set. Whenever an addition is
//! rewritten, its original text is remembered so that the same text showing
//! up later as a deletion (`-`) or context line (` `), in the same patch or
//! a later one, is rewritten identically. This keeps a patch series
//! applicable after the rename.
//!
//! Diff structure is not parsed: hunk headers, file paths and line numbers
//! are ignored, and `---`/`+++` lines are never touched.

mod diagnostics;
mod line;
mod rewriter;
mod table;


// Re-export public API
pub use diagnostics::write_changes;
pub use line::DiffLine;
pub use rewriter::{output_path, BatchReport, FileReport, LineChange, PatchRewriter, RewrittenPatch};
pub use table::PropagationTable;
