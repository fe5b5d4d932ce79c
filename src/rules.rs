//! Ordered literal substitution rules.
//!
//! A rule set is applied to a single line at a time. Every rule runs, in
//! order, on the output of the previous one, so a later rule may match text
//! introduced by an earlier rule. This is what allows a broad rename to be
//! followed by narrower rules that undo it in specific phrases.

use serde::{Deserialize, Serialize};

/// A single literal substitution step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Text to search for (literal, not a regex).
    #[serde(rename = "match")]
    pub pattern: String,
    /// Text every occurrence of `pattern` is replaced with.
    pub replacement: String,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Built-in rename list, applied in order.
const BUILTIN_RULES: &[(&str, &str)] = &[
    ("floor", "level"),
    ("Floor", "Level"),
    ("levelMarker", "floorMarker"),
    ("LevelMarker", "FloorMarker"),
    ("level marker", "floor marker"),
    ("levelPlan", "floorPlan"),
    ("LevelPlan", "FloorPlan"),
    ("levelplan", "floorplan"),
    ("level plan", "floor plan"),
    ("Level Plan", "Floor Plan"),
    ("Math.level", "Math.floor"),
];

/// An ordered, immutable list of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The rename list compiled into the program.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_RULES
                .iter()
                .map(|(pattern, replacement)| Rule::new(*pattern, *replacement))
                .collect(),
        )
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule to `line` in order.
    ///
    /// The returned flag is true when any rule's pattern occurs in the
    /// *original* input. It is not recomputed against intermediate results,
    /// so it can be true even when the rules cancel each other out.
    pub fn apply(&self, line: &str) -> (String, bool) {
        let mut changed = false;
        let mut output = line.to_string();

        for rule in &self.rules {
            if !changed && line.contains(rule.pattern.as_str()) {
                changed = true;
            }
            if output.contains(rule.pattern.as_str()) {
                output = output.replace(rule.pattern.as_str(), &rule.replacement);
            }
        }

        (output, changed)
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}
