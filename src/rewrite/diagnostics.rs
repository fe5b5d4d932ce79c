//! Human-readable audit output for rewritten lines.

use super::rewriter::LineChange;
use std::io::{self, Write};

/// Write each change as the original line, the rewritten line, and a blank
/// separator.
pub fn write_changes<W: Write>(mut out: W, changes: &[LineChange]) -> io::Result<()> {
    for change in changes {
        writeln!(out, "{}", change.original)?;
        writeln!(out, "{}", change.rewritten)?;
        writeln!(out)?;
    }
    out.flush()
}
