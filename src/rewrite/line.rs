//! Classification of patch lines by their leading marker.

/// A patch line, classified once by its marker.
///
/// Payloads borrow from the line with the marker and the line terminator
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLine<'a> {
    /// `---` or `+++` file identity line. Never rewritten.
    Header,
    /// `+` line: new text, judged by the rules.
    Addition(&'a str),
    /// `-` line: rewritten only through the propagation table.
    Deletion(&'a str),
    /// ` ` line: rewritten only through the propagation table.
    Context(&'a str),
    /// Hunk headers, blank lines, commit message text and anything else.
    Other,
}

impl<'a> DiffLine<'a> {
    /// Classify a line. `text` must not include its line terminator.
    pub fn classify(text: &'a str) -> Self {
        if text.starts_with("---") || text.starts_with("+++") {
            return DiffLine::Header;
        }

        if let Some(payload) = text.strip_prefix('+') {
            DiffLine::Addition(payload)
        } else if let Some(payload) = text.strip_prefix('-') {
            DiffLine::Deletion(payload)
        } else if let Some(payload) = text.strip_prefix(' ') {
            DiffLine::Context(payload)
        } else {
            DiffLine::Other
        }
    }
}

/// Split a raw line into its text and its terminator (`\r\n`, `\n` or empty).
pub(crate) fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(text) = raw.strip_suffix("\r\n") {
        (text, "\r\n")
    } else if let Some(text) = raw.strip_suffix('\n') {
        (text, "\n")
    } else {
        (raw, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_win_over_markers() {
        assert_eq!(DiffLine::classify("--- a/file.txt"), DiffLine::Header);
        assert_eq!(DiffLine::classify("+++ b/file.txt"), DiffLine::Header);
        assert_eq!(DiffLine::classify("---"), DiffLine::Header);
        assert_eq!(DiffLine::classify("+++floor"), DiffLine::Header);
    }

    #[test]
    fn payload_lines_strip_marker() {
        assert_eq!(DiffLine::classify("+added"), DiffLine::Addition("added"));
        assert_eq!(DiffLine::classify("-removed"), DiffLine::Deletion("removed"));
        assert_eq!(DiffLine::classify(" context"), DiffLine::Context("context"));
        assert_eq!(DiffLine::classify("+"), DiffLine::Addition(""));
        assert_eq!(DiffLine::classify("-- "), DiffLine::Deletion("- "));
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(DiffLine::classify("@@ -1,2 +1,2 @@"), DiffLine::Other);
        assert_eq!(DiffLine::classify(""), DiffLine::Other);
        assert_eq!(DiffLine::classify("Subject: [PATCH] floor"), DiffLine::Other);
        assert_eq!(DiffLine::classify("\tindented"), DiffLine::Other);
    }

    #[test]
    fn split_terminator_variants() {
        assert_eq!(split_terminator("abc\n"), ("abc", "\n"));
        assert_eq!(split_terminator("abc\r\n"), ("abc", "\r\n"));
        assert_eq!(split_terminator("abc"), ("abc", ""));
        assert_eq!(split_terminator("\n"), ("", "\n"));
    }
}
