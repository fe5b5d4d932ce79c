//! Memo of rewritten addition payloads.

use std::collections::HashMap;

/// Maps an addition payload, as it was before rewriting, to its rewritten
/// form.
///
/// Keys are line text only. Identical text in different files or at
/// different positions shares one entry. The table lives for one run and
/// only grows.
#[derive(Debug, Clone, Default)]
pub struct PropagationTable {
    entries: HashMap<String, String>,
}

impl PropagationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `original` was rewritten to `rewritten`. Overwrites any
    /// previous entry for the same key.
    pub fn record(&mut self, original: &str, rewritten: &str) {
        self.entries
            .insert(original.to_string(), rewritten.to_string());
    }

    pub fn lookup(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let table = PropagationTable::new();
        assert!(table.is_empty());
        assert_eq!(table.lookup("anything"), None);
    }

    #[test]
    fn record_then_lookup() {
        let mut table = PropagationTable::new();
        table.record("old level text", "old floor text");
        assert_eq!(table.lookup("old level text"), Some("old floor text"));
        assert_eq!(table.lookup("old level text "), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn same_key_overwrites() {
        let mut table = PropagationTable::new();
        table.record("a", "b");
        table.record("a", "c");
        assert_eq!(table.lookup("a"), Some("c"));
        assert_eq!(table.len(), 1);
    }
}
